//! ccdiff CLI
//!
//! Compares two CCD configuration export directories and reports semantic
//! differences. Exit status: 0 no differences, 1 differences found (or a
//! file could not be read or parsed), 2 a root directory is missing.

use ccdiff_core::errors::CcdDiffError;
use ccdiff_core::logging_facility::{init, Profile};
use clap::{Parser, ValueEnum};

mod commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable log lines on stderr
    Development,
    /// JSON log lines on stderr
    Production,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Development => Profile::Development,
            LogFormat::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ccdiff")]
#[command(about = "Compare two CCD config directories", long_about = None)]
struct Cli {
    #[command(flatten)]
    compare: commands::compare::CompareArgs,

    /// Log output format (filter with RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogFormat::Development)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format.into());

    let code = match commands::compare::execute(cli.compare) {
        Ok(outcome) => outcome.exit_code(),
        Err(e @ CcdDiffError::RootNotFound { .. }) => {
            eprintln!("{}", e);
            2
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    std::process::exit(code);
}
