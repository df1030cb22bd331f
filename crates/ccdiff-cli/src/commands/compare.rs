//! Compare command
//!
//! Usage: ccdiff <BASE> <HEAD> [--ignore-field <FIELD>]... [--max-printed <N>]

use ccdiff_core::compare::{compare_trees, CompareOptions, DEFAULT_MAX_PRINTED_ITEMS};
use ccdiff_core::diff::human_summary::render_report;
use ccdiff_core::errors::CcdDiffError;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Path to config generated from base branch
    pub base: PathBuf,

    /// Path to config generated from PR branch
    pub head: PathBuf,

    /// Field name to ignore during comparison (can be specified multiple times)
    #[arg(long = "ignore-field", value_name = "FIELD")]
    pub ignored_fields: Vec<String>,

    /// Maximum files or entries listed per report section
    #[arg(long = "max-printed", value_name = "N", default_value_t = DEFAULT_MAX_PRINTED_ITEMS)]
    pub max_printed: usize,
}

/// Verdict of a completed comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoDifferences,
    DifferencesFound,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::NoDifferences => 0,
            Outcome::DifferencesFound => 1,
        }
    }
}

impl From<&CompareArgs> for CompareOptions {
    fn from(args: &CompareArgs) -> Self {
        CompareOptions::default()
            .with_ignored_fields(args.ignored_fields.iter().cloned())
            .with_max_printed_items(args.max_printed)
    }
}

/// Execute the comparison and print the report to stdout
pub fn execute(args: CompareArgs) -> Result<Outcome, CcdDiffError> {
    let options = CompareOptions::from(&args);
    tracing::debug!(
        ignored_fields = ?options.ignored_fields,
        max_printed = options.max_printed_items,
        "starting comparison"
    );

    let comparison = compare_trees(&args.base, &args.head, &options)?;
    print!("{}", render_report(&comparison, options.max_printed_items));

    if comparison.has_differences() {
        Ok(Outcome::DifferencesFound)
    } else {
        Ok(Outcome::NoDifferences)
    }
}
