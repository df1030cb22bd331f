//! Frequency index: a multiset of canonical keys over a record collection.

use crate::diff::canonical::canonical_key;
use crate::model::Record;
use crate::rules::{normalize_entry, NormalizeOptions};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexEntry {
    count: usize,
    representative: Record,
}

/// Occurrence counts per canonical key, plus the first-seen record for each key
///
/// Keys are also remembered in first-insertion order, which is the order
/// closest-match candidates are visited in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyIndex {
    entries: BTreeMap<String, IndexEntry>,
    insertion_order: Vec<String>,
}

impl FrequencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`; `record` becomes the representative
    /// only if the key is new
    pub fn insert(&mut self, key: String, record: Record) {
        match self.entries.get_mut(&key) {
            Some(entry) => entry.count += 1,
            None => {
                self.insertion_order.push(key.clone());
                self.entries.insert(
                    key,
                    IndexEntry {
                        count: 1,
                        representative: record,
                    },
                );
            }
        }
    }

    /// Normalize a raw record, count it, and return its canonical key
    pub fn add_record(&mut self, raw: &Record, options: &NormalizeOptions) -> String {
        let normalized = normalize_entry(raw, options);
        let key = canonical_key(&normalized);
        self.insert(key.clone(), normalized);
        key
    }

    /// Occurrences of `key` (0 when absent)
    pub fn count(&self, key: &str) -> usize {
        self.entries.get(key).map_or(0, |entry| entry.count)
    }

    pub fn representative(&self, key: &str) -> Option<&Record> {
        self.entries.get(key).map(|entry| &entry.representative)
    }

    /// `(key, count)` pairs in key order
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry.count))
    }

    /// `(key, representative)` pairs in first-insertion order
    pub fn representatives(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.insertion_order.iter().filter_map(|key| {
            self.entries
                .get(key)
                .map(|entry| (key.as_str(), &entry.representative))
        })
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of records counted, duplicates included
    pub fn total(&self) -> usize {
        self.entries.values().map(|entry| entry.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the frequency index of a record collection
pub fn build_index(records: &[Record], options: &NormalizeOptions) -> FrequencyIndex {
    let mut index = FrequencyIndex::new();
    for record in records {
        index.add_record(record, options);
    }
    index
}
