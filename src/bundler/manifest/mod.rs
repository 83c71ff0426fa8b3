//! Bundle manifest: YAML in, canonical JSON out.
//!
//! The [`ManifestRecord`] keeps the source key order and sequence order
//! untouched, so the emitted JSON is a pure projection of the YAML document.

mod emit;
mod load;

pub use emit::write_manifest;
pub use load::load_manifest;

use crate::bundler::{Error, Result};
use serde_json::{Map, Value};

/// Parsed manifest document.
///
/// A top-level mapping whose key order is the order of the source document.
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestRecord(Map<String, Value>);

impl ManifestRecord {
    /// Wraps an already parsed mapping.
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Returns the underlying mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Looks up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Projects the fix entry sequence to its identifiers.
    ///
    /// `list_key` names the sequence and `id_key` the identifier inside each
    /// entry. Identifiers come back in source order, without sorting or
    /// de-duplication.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`] if the sequence or an entry's identifier is absent
    /// - [`Error::InvalidField`] if the sequence is not a list, an entry is not
    ///   a mapping, or an identifier is not a string
    pub fn fix_ids(&self, list_key: &str, id_key: &str) -> Result<Vec<&str>> {
        let entries = self.0.get(list_key).ok_or_else(|| Error::MissingField {
            field: list_key.to_string(),
        })?;
        let entries = entries.as_array().ok_or_else(|| Error::InvalidField {
            field: list_key.to_string(),
            reason: format!("expected a sequence, found {}", kind(entries)),
        })?;

        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let field = format!("{list_key}[{i}].{id_key}");
                let entry = entry.as_object().ok_or_else(|| Error::InvalidField {
                    field: format!("{list_key}[{i}]"),
                    reason: format!("expected a mapping, found {}", kind(entry)),
                })?;
                let id = entry
                    .get(id_key)
                    .ok_or_else(|| Error::MissingField { field: field.clone() })?;
                id.as_str().ok_or_else(|| Error::InvalidField {
                    reason: format!("expected a string, found {}", kind(id)),
                    field,
                })
            })
            .collect()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ManifestRecord {
        match value {
            Value::Object(map) => ManifestRecord::new(map),
            _ => panic!("test manifest must be a mapping"),
        }
    }

    #[test]
    fn fix_ids_keep_source_order_and_duplicates() {
        let manifest = record(json!({
            "CESA_list": [
                {"CESA": "CESA-2020:0002"},
                {"CESA": "CESA-2020:0001"},
                {"CESA": "CESA-2020:0002"}
            ]
        }));

        let ids = manifest.fix_ids("CESA_list", "CESA").unwrap();
        assert_eq!(ids, ["CESA-2020:0002", "CESA-2020:0001", "CESA-2020:0002"]);
    }

    #[test]
    fn empty_fix_list_yields_no_ids() {
        let manifest = record(json!({"CESA_list": []}));
        assert!(manifest.fix_ids("CESA_list", "CESA").unwrap().is_empty());
    }

    #[test]
    fn missing_fix_list_is_a_key_error() {
        let manifest = record(json!({"name": "bundle"}));
        let err = manifest.fix_ids("CESA_list", "CESA").unwrap_err();
        assert!(matches!(err, Error::MissingField { field } if field == "CESA_list"));
    }

    #[test]
    fn entry_without_identifier_names_its_position() {
        let manifest = record(json!({
            "CESA_list": [{"CESA": "CESA-2020:0001"}, {"severity": "high"}]
        }));
        let err = manifest.fix_ids("CESA_list", "CESA").unwrap_err();
        assert!(matches!(err, Error::MissingField { field } if field == "CESA_list[1].CESA"));
    }

    #[test]
    fn non_sequence_fix_list_is_rejected() {
        let manifest = record(json!({"CESA_list": "CESA-2020:0001"}));
        let err = manifest.fix_ids("CESA_list", "CESA").unwrap_err();
        assert!(matches!(err, Error::InvalidField { .. }));
    }

    #[test]
    fn numeric_identifier_is_rejected() {
        let manifest = record(json!({"CESA_list": [{"CESA": 42}]}));
        let err = manifest.fix_ids("CESA_list", "CESA").unwrap_err();
        assert!(err.to_string().contains("a number"));
    }
}
