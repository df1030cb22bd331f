//! Diff output types.

use crate::diff::index::FrequencyIndex;

/// Count-respecting difference between two frequency indexes
///
/// Both lists are sorted and hold one canonical key per unmatched occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultisetDiff {
    /// Keys in base not matched in head
    pub missing: Vec<String>,
    /// Keys in head not matched in base
    pub unexpected: Vec<String>,
}

impl MultisetDiff {
    pub fn is_identical(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Differences found in one file present on both sides
///
/// Both indexes are kept so the report can show the representative record of
/// every key and look up closest matches on the opposite side.
#[derive(Debug, Clone)]
pub struct FileDiff {
    /// Path relative to the comparison roots, `/`-separated
    pub rel_path: String,
    pub diff: MultisetDiff,
    pub base_index: FrequencyIndex,
    pub head_index: FrequencyIndex,
}

impl FileDiff {
    pub fn missing_count(&self) -> usize {
        self.diff.missing.len()
    }

    pub fn unexpected_count(&self) -> usize {
        self.diff.unexpected.len()
    }
}

/// Outcome of comparing two directory trees
#[derive(Debug, Clone, Default)]
pub struct TreeComparison {
    /// Relative paths present only under the base root, sorted
    pub only_in_base: Vec<String>,
    /// Relative paths present only under the head root, sorted
    pub only_in_head: Vec<String>,
    /// Shared files with differences, in path order
    pub file_diffs: Vec<FileDiff>,
    /// Number of shared files compared
    pub files_compared: usize,
}

impl TreeComparison {
    /// Any missing file, new file, or per-file difference
    pub fn has_differences(&self) -> bool {
        !self.only_in_base.is_empty()
            || !self.only_in_head.is_empty()
            || !self.file_diffs.is_empty()
    }
}
