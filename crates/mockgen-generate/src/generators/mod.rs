pub mod primitives;
pub mod semantic;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Generated value for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Array(Vec<GeneratedValue>),
    Object(GeneratedRecord),
}

impl GeneratedValue {
    /// Single-cell rendering used by tabular output.
    ///
    /// Arrays collapse into one `", "`-joined cell; objects inside arrays
    /// render as compact JSON.
    pub fn to_csv(&self) -> String {
        match self {
            GeneratedValue::Null => String::new(),
            GeneratedValue::Bool(value) => value.to_string(),
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float(value) => value.to_string(),
            GeneratedValue::Text(value) => value.clone(),
            GeneratedValue::Timestamp(value) => format_timestamp(value),
            GeneratedValue::Array(items) => items
                .iter()
                .map(GeneratedValue::to_csv)
                .collect::<Vec<_>>()
                .join(", "),
            GeneratedValue::Object(record) => serde_json::to_string(record).unwrap_or_default(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(value) => Some(*value as f64),
            GeneratedValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[GeneratedValue]> {
        match self {
            GeneratedValue::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&GeneratedRecord> {
        match self {
            GeneratedValue::Object(record) => Some(record),
            _ => None,
        }
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Serialize for GeneratedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GeneratedValue::Null => serializer.serialize_unit(),
            GeneratedValue::Bool(value) => serializer.serialize_bool(*value),
            GeneratedValue::Int(value) => serializer.serialize_i64(*value),
            GeneratedValue::Float(value) => serializer.serialize_f64(*value),
            GeneratedValue::Text(value) => serializer.serialize_str(value),
            GeneratedValue::Timestamp(value) => serializer.serialize_str(&format_timestamp(value)),
            GeneratedValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            GeneratedValue::Object(record) => record.serialize(serializer),
        }
    }
}

impl From<bool> for GeneratedValue {
    fn from(value: bool) -> Self {
        GeneratedValue::Bool(value)
    }
}

impl From<i64> for GeneratedValue {
    fn from(value: i64) -> Self {
        GeneratedValue::Int(value)
    }
}

impl From<f64> for GeneratedValue {
    fn from(value: f64) -> Self {
        GeneratedValue::Float(value)
    }
}

impl From<&str> for GeneratedValue {
    fn from(value: &str) -> Self {
        GeneratedValue::Text(value.to_string())
    }
}

impl From<String> for GeneratedValue {
    fn from(value: String) -> Self {
        GeneratedValue::Text(value)
    }
}

impl From<Vec<GeneratedValue>> for GeneratedValue {
    fn from(value: Vec<GeneratedValue>) -> Self {
        GeneratedValue::Array(value)
    }
}

impl From<GeneratedRecord> for GeneratedValue {
    fn from(value: GeneratedRecord) -> Self {
        GeneratedValue::Object(value)
    }
}

/// One synthesized record: field values in declaration order.
///
/// Absent optional fields have no entry at all; they are never stored as
/// [`GeneratedValue::Null`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedRecord {
    fields: Vec<(String, GeneratedValue)>,
}

impl GeneratedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Set a field, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: GeneratedValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&GeneratedValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, GeneratedValue)> for GeneratedRecord {
    fn from_iter<I: IntoIterator<Item = (K, GeneratedValue)>>(iter: I) -> Self {
        let mut record = GeneratedRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for GeneratedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn insert_keeps_first_position_on_overwrite() {
        let mut record = GeneratedRecord::new();
        record.insert("id", GeneratedValue::Int(1));
        record.insert("name", "A".into());
        record.insert("id", GeneratedValue::Int(2));

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "name"]);
        assert_eq!(record.get("id").and_then(GeneratedValue::as_i64), Some(2));
    }

    #[test]
    fn serializes_in_insertion_order() {
        let record: GeneratedRecord = [
            ("zeta", GeneratedValue::Bool(true)),
            ("alpha", GeneratedValue::Null),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(json, r#"{"zeta":true,"alpha":null}"#);
    }

    #[test]
    fn timestamps_render_with_millis() {
        let value = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp");
        let value = GeneratedValue::Timestamp(value);
        assert_eq!(value.to_csv(), "2024-01-02T03:04:05.000Z");
        assert_eq!(
            serde_json::to_string(&value).expect("serialize timestamp"),
            "\"2024-01-02T03:04:05.000Z\""
        );
    }

    #[test]
    fn arrays_collapse_into_one_cell() {
        let inner: GeneratedRecord = [("x", GeneratedValue::Int(1))].into_iter().collect();
        let value = GeneratedValue::Array(vec![
            "a".into(),
            GeneratedValue::Float(2.5),
            GeneratedValue::Object(inner),
            GeneratedValue::Null,
        ]);
        assert_eq!(value.to_csv(), r#"a, 2.5, {"x":1}, "#);
    }
}
