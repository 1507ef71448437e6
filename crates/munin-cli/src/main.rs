// Munin console entry point

use clap::Parser;
use munin_cli::{run, Cli};
use munin_common::{init_logging, LogOptions};

fn main() {
    let cli = Cli::parse();
    init_logging(
        LogOptions::default()
            .with_level(cli.log_level())
            .with_ansi(!cli.plain),
    );
    munin_cli::install_panic_hook();

    if let Err(e) = run(cli) {
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}
