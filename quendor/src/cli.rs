//! Command-line argument parsing.

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "quendor",
    version,
    about = "Execute a z-code program on the Z-Machine",
    after_help = "Enjoy your visit to Quendor!"
)]
pub(crate) struct Args {
    /// z-code program to load.
    pub zcode: String,

    /// Print debug logging.
    #[arg(short, long, conflicts_with = "info")]
    pub debug: bool,

    /// Print informative logging.
    #[arg(short, long)]
    pub info: bool,

    /// Secondary directory searched after the current directory.
    #[arg(long, env = quendor::SEARCH_PATH_ENV, value_name = "DIR")]
    pub search_path: Option<String>,
}

impl Args {
    /// Log level selected by the verbosity flags.
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else if self.info {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }
}
