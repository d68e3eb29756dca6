use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// One or more scenario files to run. Ignored when `--bench` is given.
    pub scenarios: Vec<PathBuf>,

    /// Suppress per-experiment banners; print only the final run summary.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Increase log verbosity: once for info, twice for debug.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip scenario files and run N synthetic experiments on a randomly
    /// generated grid instead.
    #[arg(long)]
    pub bench: Option<usize>,
}

impl Cli {
    /// The `env_logger` filter implied by the verbosity count: `warn` by
    /// default, `info` at one `-v`, `debug` at two or more.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
