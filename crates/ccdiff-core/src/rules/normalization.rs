//! Entry normalization.
//!
//! A record is normalized by dropping, in order:
//!
//! 1. fields in [`ALWAYS_IGNORED`] (cosmetic, no functional effect),
//! 2. fields the caller asked to ignore,
//! 3. field/value pairs listed in [`CONDITIONAL_REMOVALS`] (defaults that
//!    mean the same as the field being absent),
//! 4. the [`ID_FIELD`] when identifier stripping is requested.
//!
//! Normalization never mutates its input and is idempotent.

use crate::model::{FieldValue, Record};
use std::collections::BTreeSet;

/// Fields that are never compared
pub const ALWAYS_IGNORED: [&str; 4] = [
    "Comment",
    "DisplayOrder",
    "FieldDisplayOrder",
    "ElementLabel",
];

/// Field/value pairs equivalent to the field being absent
pub const CONDITIONAL_REMOVALS: [(&str, &str); 8] = [
    ("SecurityClassification", "Public"),
    ("EventElementLabel", " "),
    ("PageLabel", " "),
    ("ShowSummary", "N"),
    ("Publish", "N"),
    ("ShowEventNotes", "N"),
    ("ShowSummaryChangeOption", "N"),
    ("ShowSummaryChangeOption", "No"),
];

/// Identifier field, regenerated per environment
pub const ID_FIELD: &str = "ID";

/// Caller-supplied normalization parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub ignored_fields: BTreeSet<String>,
    pub strip_id: bool,
}

impl NormalizeOptions {
    pub fn new<I, S>(ignored_fields: I, strip_id: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored_fields: ignored_fields.into_iter().map(Into::into).collect(),
            strip_id,
        }
    }
}

pub fn is_always_ignored(field: &str) -> bool {
    ALWAYS_IGNORED.contains(&field)
}

/// True when `field = value` is one of the neutral defaults
///
/// Only text values match; `Publish = false` is not the same as `Publish = "N"`.
pub fn is_conditionally_neutral(field: &str, value: &FieldValue) -> bool {
    let Some(text) = value.as_text() else {
        return false;
    };
    CONDITIONAL_REMOVALS
        .iter()
        .any(|(name, neutral)| *name == field && *neutral == text)
}

/// Produce the normalized copy of `record`
pub fn normalize_entry(record: &Record, options: &NormalizeOptions) -> Record {
    let mut normalized: Record = record
        .iter()
        .filter(|(field, value)| {
            !is_always_ignored(field)
                && !options.ignored_fields.contains(*field)
                && !is_conditionally_neutral(field, value)
        })
        .map(|(field, value)| (field.to_string(), value.clone()))
        .collect();

    if options.strip_id {
        normalized.remove(ID_FIELD);
    }
    normalized
}
