use ccdiff_core::Record;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create an empty base root and an empty head root
#[allow(dead_code)]
pub fn setup_trees() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

/// Write `content` to `root/rel`, creating parent directories
#[allow(dead_code)]
pub fn write_export(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Build records from a JSON array literal
#[allow(dead_code)]
pub fn records(value: serde_json::Value) -> Vec<Record> {
    match value {
        serde_json::Value::Array(items) => items.into_iter().map(Record::from_json).collect(),
        other => vec![Record::from_json(other)],
    }
}
