// Command-line arguments
use std::path::PathBuf;

use clap::Parser;
use munin_common::LogLevel;

/// Munin - console command framework demo host
#[derive(Parser, Debug)]
#[command(name = "munin")]
#[command(bin_name = "munin")]
#[command(about = "Run console commands against the munin demo host")]
#[command(
    long_about = "Run console commands against the munin demo host.\n\nWith a command it executes that one line and exits:\n  munin help\n  munin spawn Troll 2 --level=3\n  munin Demo echo a \"b c\" -f\n\nWithout one it starts an interactive console with tab completion."
)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// YAML configuration file with `dispatcher` and `completion` sections
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run commands as this roster member instead of the host
    #[arg(long = "as", value_name = "NAME")]
    pub as_caller: Option<String>,

    /// Print results without colors
    #[arg(long)]
    pub plain: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Command line to execute once
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    pub fn log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else if self.quiet {
            LogLevel::Error
        } else {
            LogLevel::Warn
        }
    }

    /// The trailing words as one console line, or `None` for interactive mode
    ///
    /// Words the shell already unquoted are quoted again when they hold
    /// whitespace so they stay one argument.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            return None;
        }
        let words: Vec<String> = self
            .command
            .iter()
            .map(|word| {
                if word.chars().any(char::is_whitespace) && !word.contains('"') {
                    format!("\"{}\"", word)
                } else {
                    word.clone()
                }
            })
            .collect();
        Some(words.join(" "))
    }
}
