//! Human-readable report renderer.
//!
//! Rendering is pure: the CLI prints the returned string as-is.

use crate::diff::index::FrequencyIndex;
use crate::diff::model::{FileDiff, TreeComparison};
use crate::diff::similarity::find_best_match;
use crate::model::Record;

pub const VERDICT_DIFFERENCES: &str = "Semantic differences detected in CCD configuration outputs.";
pub const VERDICT_IDENTICAL: &str =
    "No semantic differences detected between CCD configuration outputs.";

/// Render the full report for a tree comparison, verdict line included
pub fn render_report(comparison: &TreeComparison, max_items: usize) -> String {
    let mut out = String::new();

    out.push_str(&render_file_listing("Files only in base", &comparison.only_in_base, max_items));
    out.push_str(&render_file_listing("Files only in head", &comparison.only_in_head, max_items));
    for file_diff in &comparison.file_diffs {
        out.push_str(&render_file_diff(file_diff, max_items));
    }

    if comparison.has_differences() {
        out.push_str(VERDICT_DIFFERENCES);
    } else {
        out.push_str(VERDICT_IDENTICAL);
    }
    out.push('\n');
    out
}

/// Render a list of paths under a heading; empty lists render nothing
pub fn render_file_listing(label: &str, paths: &[String], max_items: usize) -> String {
    if paths.is_empty() {
        return String::new();
    }
    let mut out = format!("{}:\n", label);
    for path in paths.iter().take(max_items) {
        out.push_str(&format!("  {}\n", path));
    }
    if paths.len() > max_items {
        out.push_str(&format!("  ... {} more not shown\n", paths.len() - max_items));
    }
    out.push('\n');
    out
}

/// Render the difference block of one file
pub fn render_file_diff(file_diff: &FileDiff, max_items: usize) -> String {
    let mut out = format!("Differences found in {}\n", file_diff.rel_path);
    out.push_str(&render_entries(
        "Missing entries",
        &file_diff.diff.missing,
        &file_diff.base_index,
        &file_diff.head_index,
        max_items,
    ));
    out.push_str(&render_entries(
        "Unexpected entries",
        &file_diff.diff.unexpected,
        &file_diff.head_index,
        &file_diff.base_index,
        max_items,
    ));
    out.push('\n');
    out
}

/// Render up to `max_items` discrepant entries, each with its closest match
/// on the opposite side when one is useful
pub fn render_entries(
    label: &str,
    keys: &[String],
    samples: &FrequencyIndex,
    opposite: &FrequencyIndex,
    max_items: usize,
) -> String {
    if keys.is_empty() {
        return String::new();
    }
    let mut out = format!("  {} ({}):\n", label, keys.len());
    for (position, key) in keys.iter().take(max_items).enumerate() {
        out.push_str(&format!("    {})\n", position + 1));
        let Some(entry) = samples.representative(key) else {
            continue;
        };
        push_indented(&mut out, &pretty(entry), "      ");
        if let Some(best) = find_best_match(entry, opposite) {
            out.push_str(&format!("      closest match {:.1}%:\n", best.ratio * 100.0));
            push_indented(&mut out, &pretty(best.record), "        ");
        }
    }
    if keys.len() > max_items {
        out.push_str(&format!("    ... {} more not shown\n", keys.len() - max_items));
    }
    out
}

/// Sorted-key, two-space-indented JSON
fn pretty(record: &Record) -> String {
    serde_json::to_string_pretty(record).unwrap_or_default()
}

/// Append `text` with `prefix` on every non-blank line
fn push_indented(out: &mut String, text: &str, prefix: &str) {
    for line in text.lines() {
        if !line.trim().is_empty() {
            out.push_str(prefix);
        }
        out.push_str(line);
        out.push('\n');
    }
}
