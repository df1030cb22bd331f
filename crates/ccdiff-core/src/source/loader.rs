//! Record loading.
//!
//! An export file is either a JSON array (one record per element) or a single
//! JSON object (a one-record collection). Any other top-level value is an
//! error for the whole run.

use crate::errors::{CcdDiffError, Result};
use crate::model::{FieldValue, Record};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Read and parse one export file
///
/// # Errors
///
/// `Io` when the file cannot be read, `InvalidJson` or
/// `UnsupportedStructure` as for [`parse_records`].
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let start = Instant::now();
    crate::log_op_start!("load_records", path = %path.display());

    let result = fs::read_to_string(path)
        .map_err(|e| CcdDiffError::io(path, e))
        .and_then(|content| parse_records(&content, path));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(records) => {
            crate::log_op_end!(
                "load_records",
                duration_ms = duration_ms,
                record_count = records.len()
            );
        }
        Err(err) => {
            crate::log_op_error!(
                "load_records",
                err.clone(),
                duration_ms = duration_ms,
                path = %path.display()
            );
        }
    }
    result
}

/// Parse export file content; `origin` is only used in error values
///
/// # Errors
///
/// `InvalidJson` for malformed content, `UnsupportedStructure` when the top
/// level is a scalar.
pub fn parse_records(content: &str, origin: &Path) -> Result<Vec<Record>> {
    let data: Value =
        serde_json::from_str(content).map_err(|e| CcdDiffError::invalid_json(origin, e))?;

    match data {
        Value::Array(items) => Ok(items.into_iter().map(Record::from_json).collect()),
        Value::Object(_) => Ok(vec![Record::from_json(data)]),
        other => Err(CcdDiffError::UnsupportedStructure {
            path: origin.to_path_buf(),
            found: FieldValue::from(other).type_name().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_array_yields_one_record_per_element() {
        let content = r#"[{"Name":"A"},{"Name":"B"},"loose"]"#;
        let records = parse_records(content, Path::new("x.json")).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[2].get(Record::SCALAR_FIELD),
            Some(&FieldValue::from("loose"))
        );
    }

    #[test]
    fn test_object_is_single_record() {
        let records = parse_records(r#"{"Name":"A","ID":"1"}"#, Path::new("x.json")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn test_empty_array_is_empty_collection() {
        assert!(parse_records("[]", Path::new("x.json")).unwrap().is_empty());
    }

    #[test]
    fn test_scalar_top_level_is_rejected() {
        let err = parse_records(r#""just text""#, Path::new("x.json")).unwrap_err();
        assert_eq!(
            err,
            CcdDiffError::UnsupportedStructure {
                path: "x.json".into(),
                found: "string".to_string(),
            }
        );
    }

    #[test]
    fn test_unsupported_structure_names_the_json_type() {
        for (content, found) in [("42", "number"), ("null", "null"), ("true", "boolean")] {
            let err = parse_records(content, Path::new("x.json")).unwrap_err();
            assert_eq!(
                err,
                CcdDiffError::UnsupportedStructure {
                    path: "x.json".into(),
                    found: found.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_records("[{", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, CcdDiffError::InvalidJson { .. }));
        assert!(err
            .to_string()
            .starts_with("Failed to parse JSON from broken.json"));
    }

    #[test]
    fn test_load_records_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("x.json");
        std::fs::write(&path, r#"[{"ID":"1","Name":"A","Comment":"junk"}]"#).unwrap();
        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].contains_field("Comment"));
    }

    #[test]
    fn test_load_records_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = load_records(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CcdDiffError::Io { .. }));
    }
}
