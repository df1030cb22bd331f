//! Tree comparison driver.
//!
//! Pairs the export files of two roots by relative path, compares every
//! shared file as a multiset of normalized records, and collects the result
//! into a [`TreeComparison`]. Nothing is printed here; see
//! [`render_report`](crate::diff::human_summary::render_report).
//!
//! Any read or parse failure aborts the whole comparison. A file that cannot
//! be parsed is never treated as having no differences.

use crate::diff::engine::diff_indexes;
use crate::diff::index::build_index;
use crate::diff::model::{FileDiff, TreeComparison};
use crate::errors::Result;
use crate::model::Record;
use crate::rules::NormalizeOptions;
use crate::source::{discover_files, ensure_directory, load_records};
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

/// Files whose relative path contains this fragment are compared without `ID`
pub const STRIP_ID_PATH_FRAGMENT: &str = "CaseEventToComplexTypes";

/// Default cap on listed files and entries per report section
pub const DEFAULT_MAX_PRINTED_ITEMS: usize = 20;

/// Options for a comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Extra field names to drop from every record
    pub ignored_fields: BTreeSet<String>,
    /// Cap on listed files and entries per report section
    pub max_printed_items: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            ignored_fields: BTreeSet::new(),
            max_printed_items: DEFAULT_MAX_PRINTED_ITEMS,
        }
    }
}

impl CompareOptions {
    pub fn with_ignored_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_fields
            .extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn with_max_printed_items(mut self, max: usize) -> Self {
        self.max_printed_items = max;
        self
    }

    /// Normalization parameters for one file
    pub fn normalize_options(&self, strip_id: bool) -> NormalizeOptions {
        NormalizeOptions {
            ignored_fields: self.ignored_fields.clone(),
            strip_id,
        }
    }
}

/// Whether identifiers are stripped for the file at `rel_path`
pub fn strip_id_for(rel_path: &str) -> bool {
    rel_path.contains(STRIP_ID_PATH_FRAGMENT)
}

/// Compare two already-loaded record collections for `rel_path`
///
/// Returns `None` when they are equal as multisets after normalization.
pub fn compare_records(
    rel_path: &str,
    base_records: &[Record],
    head_records: &[Record],
    options: &CompareOptions,
) -> Option<FileDiff> {
    let normalize = options.normalize_options(strip_id_for(rel_path));
    let base_index = build_index(base_records, &normalize);
    let head_index = build_index(head_records, &normalize);

    let diff = diff_indexes(&base_index, &head_index);
    if diff.is_identical() {
        return None;
    }
    Some(FileDiff {
        rel_path: rel_path.to_string(),
        diff,
        base_index,
        head_index,
    })
}

/// Load and compare one file present under both roots
///
/// # Errors
///
/// Propagates read and parse errors from either side.
pub fn compare_file(
    rel_path: &str,
    base_file: &Path,
    head_file: &Path,
    options: &CompareOptions,
) -> Result<Option<FileDiff>> {
    let start = Instant::now();
    crate::log_op_start!(
        "compare_file",
        rel_path = rel_path,
        strip_id = strip_id_for(rel_path)
    );

    let result = load_records(base_file).and_then(|base_records| {
        let head_records = load_records(head_file)?;
        Ok(compare_records(rel_path, &base_records, &head_records, options))
    });

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(file_diff) => {
            let (missing_count, unexpected_count) = file_diff
                .as_ref()
                .map_or((0, 0), |d| (d.missing_count(), d.unexpected_count()));
            crate::log_op_end!(
                "compare_file",
                duration_ms = duration_ms,
                rel_path = rel_path,
                missing_count = missing_count,
                unexpected_count = unexpected_count
            );
        }
        Err(err) => {
            crate::log_op_error_propagated!(
                "compare_file",
                err.clone(),
                duration_ms = duration_ms,
                rel_path = rel_path
            );
        }
    }
    result
}

/// Compare every export file under `base_root` with its counterpart under `head_root`
///
/// # Errors
///
/// `RootNotFound` when either root is missing or not a directory (checked
/// before anything is read); otherwise the first traversal, read or parse
/// error encountered.
pub fn compare_trees(
    base_root: &Path,
    head_root: &Path,
    options: &CompareOptions,
) -> Result<TreeComparison> {
    let base_root = ensure_directory(base_root, "Base")?;
    let head_root = ensure_directory(head_root, "Head")?;

    let start = Instant::now();
    crate::log_op_start!(
        "compare_trees",
        base = %base_root.display(),
        head = %head_root.display()
    );

    let result = compare_discovered(&base_root, &head_root, options);
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(comparison) => {
            crate::log_op_end!(
                "compare_trees",
                duration_ms = duration_ms,
                file_count = comparison.files_compared,
                differing_files = comparison.file_diffs.len()
            );
        }
        Err(err) => {
            crate::log_op_error_propagated!(
                "compare_trees",
                err.clone(),
                duration_ms = duration_ms
            );
        }
    }
    result
}

fn compare_discovered(
    base_root: &Path,
    head_root: &Path,
    options: &CompareOptions,
) -> Result<TreeComparison> {
    let base_files = discover_files(base_root)?;
    let head_files = discover_files(head_root)?;

    let only_in_base: Vec<String> = base_files
        .keys()
        .filter(|rel| !head_files.contains_key(*rel))
        .cloned()
        .collect();
    let only_in_head: Vec<String> = head_files
        .keys()
        .filter(|rel| !base_files.contains_key(*rel))
        .cloned()
        .collect();

    let mut file_diffs = Vec::new();
    let mut files_compared = 0;
    for (rel, base_file) in &base_files {
        let Some(head_file) = head_files.get(rel) else {
            continue;
        };
        files_compared += 1;
        if let Some(file_diff) = compare_file(rel, base_file, head_file, options)? {
            file_diffs.push(file_diff);
        }
    }

    Ok(TreeComparison {
        only_in_base,
        only_in_head,
        file_diffs,
        files_compared,
    })
}
