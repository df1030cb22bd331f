use crate::model::FieldValue;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One configuration entity: a flat mapping from field name to value
///
/// Fields are kept sorted by name. Insertion order in the source file carries
/// no meaning for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Field name used to wrap a non-object array element
    pub const SCALAR_FIELD: &'static str = "__value";

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from one JSON value
    ///
    /// Objects map field-for-field. Anything else is wrapped as
    /// `{"__value": <value>}` so it flows through the same pipeline.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(name, value)| (name, FieldValue::from(value)))
                .collect(),
            other => {
                let mut record = Self::new();
                record.insert(Self::SCALAR_FIELD, FieldValue::from(other));
                record
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Set a field, returning the previous value
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
