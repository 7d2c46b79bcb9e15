//! Command-line arguments and logging setup for the `minic` binary

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the default log filter.
pub const LOG_ENV: &str = "MINIC_LOG";

/// Filter used when neither `--log` nor `MINIC_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Fallback filter under `--verbose`, low enough for per-token events.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Scan and recognize a MiniC source file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// MiniC source file
    pub file: PathBuf,

    /// Print the token stream and lexical warnings instead of parsing
    #[arg(short, long, conflicts_with = "interactive")]
    pub tokens: bool,

    /// Step through the token stream in a terminal UI
    #[arg(short, long)]
    pub interactive: bool,

    /// Emit a debug event for every scanned token
    #[arg(short, long)]
    pub verbose: bool,

    /// Log filter directives, e.g. `debug` or `minic::parser=trace`
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Args {
    /// `--log` wins over `env_value`; without either, `--verbose` selects `debug`.
    fn filter_directives(&self, env_value: Option<String>) -> String {
        self.log.clone().or(env_value).unwrap_or_else(|| {
            if self.verbose {
                VERBOSE_LOG_FILTER.to_string()
            } else {
                DEFAULT_LOG_FILTER.to_string()
            }
        })
    }

    /// Filter from `--log`, `MINIC_LOG` or the default; an unparsable filter falls back to the default.
    pub fn env_filter(&self) -> EnvFilter {
        let directives = self.filter_directives(std::env::var(LOG_ENV).ok());

        EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            eprintln!("invalid log filter {directives:?}: {e}");
            EnvFilter::new(DEFAULT_LOG_FILTER)
        })
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
pub fn init_logging(args: &Args) {
    tracing_subscriber::fmt()
        .with_env_filter(args.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
