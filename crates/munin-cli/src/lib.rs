//! Munin console
//!
//! The `munin` binary hosts the command framework over a small demo "server"
//! (see [`demo`]). It executes one line given on the command line, or runs an
//! interactive console whose tab completion is driven by the completion engine.

pub mod app;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod render;
pub mod repl;

pub use app::App;
pub use cli::Cli;
pub use config::AppConfig;
pub use error::{CliError, CliResult};
pub use render::Renderer;

/// Send panic reports to `debug!` instead of stderr
///
/// Handler panics are already caught and logged by the dispatcher.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::debug!(location = %location, "{}", info);
    }));
}

/// Run the console for parsed arguments
pub fn run(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    }
    .with_demo_triggers();

    let app = App::new(config, cli.as_caller.as_deref(), Renderer::detect(cli.plain))?;

    match cli.command_line() {
        Some(line) => {
            if let Some(output) = app.execute_line(&line) {
                println!("{}", output);
            }
            Ok(())
        }
        None => repl::run(&app),
    }
}
