//! Multiset diff between two frequency indexes.
//!
//! Counts are compared per key, so a record that appears twice in base and
//! once in head is one missing occurrence. Results are flattened by
//! multiplicity and sorted by key, so identical inputs always produce the
//! same output order.

use crate::diff::index::FrequencyIndex;
use crate::diff::model::MultisetDiff;
use std::collections::BTreeMap;

/// Per-key `count_a - count_b`, keeping only positive remainders
///
/// Explicit map merge; keys absent from `b` count as zero there.
pub fn subtract_counts<'a>(a: &'a FrequencyIndex, b: &FrequencyIndex) -> BTreeMap<&'a str, usize> {
    a.counts()
        .filter_map(|(key, count_a)| {
            let remainder = count_a.saturating_sub(b.count(key));
            (remainder > 0).then_some((key, remainder))
        })
        .collect()
}

/// Flatten a count map into a key list, one entry per occurrence, sorted
pub fn expand(counts: &BTreeMap<&str, usize>) -> Vec<String> {
    let mut expanded: Vec<String> = counts
        .iter()
        .flat_map(|(key, count)| std::iter::repeat(key.to_string()).take(*count))
        .collect();
    expanded.sort();
    expanded
}

/// Compare base against head
///
/// `missing` holds base occurrences not matched in head, `unexpected` head
/// occurrences not matched in base.
pub fn diff_indexes(base: &FrequencyIndex, head: &FrequencyIndex) -> MultisetDiff {
    MultisetDiff {
        missing: expand(&subtract_counts(base, head)),
        unexpected: expand(&subtract_counts(head, base)),
    }
}
