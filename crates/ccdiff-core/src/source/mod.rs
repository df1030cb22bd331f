//! Filesystem side of a comparison: finding export files under a root and
//! loading their records.

pub mod discovery;
pub mod loader;

pub use discovery::{
    discover_files, ensure_directory, is_export_file, is_non_production, relative_key,
};
pub use loader::{load_records, parse_records};
