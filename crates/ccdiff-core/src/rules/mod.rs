//! Normalization rules for configuration records
//!
//! Fixed tables of fields and field/value pairs that never count as a
//! semantic difference, and the normalizer that applies them.

pub mod normalization;

pub use normalization::{normalize_entry, NormalizeOptions};
