//! Record-collection diff engine.
//!
//! Compares two collections of configuration records as multisets of
//! canonical keys and reports the occurrences that do not pair up.
//!
//! ## Entry point
//!
//! ```
//! use ccdiff_core::diff::{build_index, diff_indexes};
//! use ccdiff_core::model::Record;
//! use ccdiff_core::rules::NormalizeOptions;
//! use serde_json::json;
//!
//! let options = NormalizeOptions::default();
//! let base = build_index(&[Record::from_json(json!({"Name": "A", "Publish": "N"}))], &options);
//! let head = build_index(&[Record::from_json(json!({"Name": "A"}))], &options);
//! assert!(diff_indexes(&base, &head).is_identical());
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: output lists are sorted by canonical key.
//! - **Multiset semantics**: surplus duplicates are differences.
//! - **Noise suppression**: cosmetic fields and neutral defaults never count.

pub mod canonical;
pub mod engine;
pub mod human_summary;
pub mod index;
pub mod model;
pub mod similarity;

pub use canonical::canonical_key;
pub use engine::diff_indexes;
pub use human_summary::render_report;
pub use index::{build_index, FrequencyIndex};
pub use model::{FileDiff, MultisetDiff, TreeComparison};
pub use similarity::{find_best_match, similarity_ratio, BestMatch};
