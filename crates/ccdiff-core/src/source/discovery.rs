//! Export file discovery.

use crate::errors::{CcdDiffError, Result};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// File-name suffix of export files, matched case-sensitively
pub const JSON_SUFFIX: &str = ".json";

/// File-name marker of non-production exports, matched case-insensitively
pub const NON_PRODUCTION_MARKER: &str = "nonprod";

/// Check that `path` is an existing directory and return its canonical form
///
/// # Errors
///
/// `RootNotFound` when the path is missing or not a directory; `Io` when it
/// cannot be canonicalized.
pub fn ensure_directory(path: &Path, label: &str) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(CcdDiffError::RootNotFound {
            label: label.to_string(),
            path: path.to_path_buf(),
        });
    }
    std::fs::canonicalize(path).map_err(|e| CcdDiffError::io(path, e))
}

/// True when the file name ends in `.json`, including a bare `.json`
pub fn is_export_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(JSON_SUFFIX))
        .unwrap_or(false)
}

/// True for exports of a non-production environment
pub fn is_non_production(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_lowercase()
                .contains(NON_PRODUCTION_MARKER)
        })
        .unwrap_or(false)
}

/// `/`-separated form of a relative path, used as the pairing key
pub fn relative_key(rel: &Path) -> String {
    rel.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Recursively collect `*.json` files under `root`, keyed by relative path
///
/// Non-production exports are left out entirely.
///
/// # Errors
///
/// `Traversal` when a directory under `root` cannot be read.
pub fn discover_files(root: &Path) -> Result<BTreeMap<String, PathBuf>> {
    let start = Instant::now();
    crate::log_op_start!("discover_files", root = %root.display());

    let result = walk_exports(root);
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(files) => {
            crate::log_op_end!(
                "discover_files",
                duration_ms = duration_ms,
                file_count = files.len()
            );
        }
        Err(err) => {
            crate::log_op_error!(
                "discover_files",
                err.clone(),
                duration_ms = duration_ms,
                root = %root.display()
            );
        }
    }
    result
}

fn walk_exports(root: &Path) -> Result<BTreeMap<String, PathBuf>> {
    let mut files = BTreeMap::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| CcdDiffError::Traversal {
            path: e.path().unwrap_or(root).to_path_buf(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        if !path.is_file() || !is_export_file(path) {
            continue;
        }
        if is_non_production(path) {
            tracing::debug!(path = %path.display(), "skipping non-production export");
            continue;
        }
        let rel = path.strip_prefix(root).map_err(|e| CcdDiffError::Traversal {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        files.insert(relative_key(rel), path.to_path_buf());
    }
    Ok(files)
}
