//! Canonical encoding of normalized records.
//!
//! The canonical key is compact JSON with fields in lexicographic order and
//! every non-printable or non-ASCII character escaped as `\uXXXX`. Two records
//! get the same key iff they hold the same field/value pairs. Strings are
//! always quoted, so `true` and `"true"` never collide.

use crate::model::{FieldValue, Record};
use serde_json::Value;
use std::fmt::Write as _;

/// Encode a (normalized) record as its canonical key
pub fn canonical_key(record: &Record) -> String {
    let mut out = String::with_capacity(16 * record.len() + 2);
    out.push('{');
    for (i, (name, value)) in record.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(&mut out, name);
        out.push(':');
        write_field_value(&mut out, value);
    }
    out.push('}');
    out
}

fn write_field_value(out: &mut String, value: &FieldValue) {
    match value {
        FieldValue::Null => out.push_str("null"),
        FieldValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        FieldValue::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        FieldValue::Text(text) => write_string(out, text),
        FieldValue::Structured(value) => write_json(out, value),
    }
}

fn write_json(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::String(text) => write_string(out, text),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            // serde_json's default map is ordered by key
            out.push('{');
            for (i, (name, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, name);
                out.push(':');
                write_json(out, item);
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{:04x}", unit);
                }
            }
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_is_compact_and_sorted() {
        let record = Record::from_json(json!({"b": 1, "a": "x", "c": null}));
        assert_eq!(canonical_key(&record), r#"{"a":"x","b":1,"c":null}"#);
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(canonical_key(&Record::new()), "{}");
    }

    #[test]
    fn test_bool_and_text_do_not_collide() {
        let boolean = Record::from_json(json!({"Flag": true}));
        let text = Record::from_json(json!({"Flag": "true"}));
        assert_ne!(canonical_key(&boolean), canonical_key(&text));
    }

    #[test]
    fn test_number_and_text_do_not_collide() {
        let number = Record::from_json(json!({"Order": 1}));
        let text = Record::from_json(json!({"Order": "1"}));
        assert_ne!(canonical_key(&number), canonical_key(&text));
    }

    #[test]
    fn test_escapes_are_unambiguous() {
        let record = Record::from_json(json!({"Label": "say \"hi\"\\\n\t"}));
        assert_eq!(canonical_key(&record), r#"{"Label":"say \"hi\"\\\n\t"}"#);
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let record = Record::from_json(json!({"Label": "café 😀"}));
        assert_eq!(
            canonical_key(&record),
            r#"{"Label":"caf\u00e9 \ud83d\ude00"}"#
        );
        assert!(canonical_key(&record).is_ascii());
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let record = Record::from_json(json!({"Label": "a\u{01}\u{7f}"}));
        assert_eq!(canonical_key(&record), r#"{"Label":"a\u0001\u007f"}"#);
    }

    #[test]
    fn test_structured_values_are_encoded_compactly() {
        let record = Record::from_json(json!({"List": [1, {"z": 1, "a": "b"}]}));
        assert_eq!(canonical_key(&record), r#"{"List":[1,{"a":"b","z":1}]}"#);
    }

    #[test]
    fn test_key_parses_back_to_same_content() {
        let record = Record::from_json(json!({"Name": "Ünïcode \"q\"", "N": 2.5, "F": false}));
        let reparsed: serde_json::Value = serde_json::from_str(&canonical_key(&record)).unwrap();
        assert_eq!(Record::from_json(reparsed), record);
    }
}
