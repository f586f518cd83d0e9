//! The record contract shared by every request and response type.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use super::translate::is_empty_value;
use crate::error::{Error, Result};

/// A typed record that crosses the wire as a JSON object.
///
/// The serde derive on the implementing struct is the field schema:
/// every declared field is a scalar, a nested record, an optional record,
/// or a list of records exactly as its Rust type says, and hydration
/// recurses through that declaration the same way for every implementor.
pub trait WireRecord: Serialize + DeserializeOwned {
  /// Keep empty-valued fields when serializing to a mapping. Off by
  /// default; a response type whose callers expect every declared field
  /// to stay present opts in.
  const RETAIN_EMPTY: bool = false;

  /// Hydrate a record tree from a host-case mapping, as produced by the
  /// inbound translator. Nested mappings become nested records and
  /// sequences of mappings become sequences of records, in order; a value
  /// that does not fit its declared field fails the whole hydration.
  fn from_map(raw: Value) -> Result<Self> {
    Ok(serde_json::from_value(raw)?)
  }

  /// Serialize the record tree to a host-case mapping. Date/time fields
  /// come out as ISO-8601 strings, and keys holding empty values are
  /// removed unless [`Self::RETAIN_EMPTY`] is set.
  fn to_map(&self) -> Result<Map<String, Value>> {
    match serde_json::to_value(self)? {
      Value::Object(map) if Self::RETAIN_EMPTY => Ok(map),
      Value::Object(map) => Ok(map.into_iter().filter(|(_, v)| !is_empty_value(v)).collect()),
      other => {
        Err(Error::Unexpected(format!("record serialized to {other:?} instead of an object")))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use serde_json::json;

  #[derive(Debug, PartialEq, Serialize, Deserialize)]
  struct Inner {
    name: String,
    value: String,
  }

  impl WireRecord for Inner {}

  #[derive(Debug, PartialEq, Serialize, Deserialize)]
  struct Outer {
    id: String,
    nested: Option<Inner>,
    items: Vec<Inner>,
    count: i64,
  }

  impl WireRecord for Outer {}

  #[derive(Debug, PartialEq, Serialize, Deserialize)]
  struct Sticky {
    id: String,
    count: i64,
  }

  impl WireRecord for Sticky {
    const RETAIN_EMPTY: bool = true;
  }

  #[test]
  fn test_hydrates_nested_record_from_mapping() {
    let outer = Outer::from_map(json!({
      "id": "x",
      "nested": {"name": "n", "value": "v"},
      "items": [],
      "count": 2,
    }))
    .unwrap();

    assert_eq!(outer.nested, Some(Inner { name: "n".into(), value: "v".into() }));
  }

  #[test]
  fn test_hydrates_record_sequence_in_order() {
    let outer = Outer::from_map(json!({
      "id": "x",
      "items": [
        {"name": "a", "value": "1"},
        {"name": "b", "value": "2"},
      ],
      "count": 1,
    }))
    .unwrap();

    assert_eq!(outer.items.len(), 2);
    assert_eq!(outer.items[0].name, "a");
    assert_eq!(outer.items[1].name, "b");
  }

  #[test]
  fn test_absent_optional_field_stays_unset() {
    let outer =
      Outer::from_map(json!({"id": "x", "items": [], "count": 0})).unwrap();
    assert_eq!(outer.nested, None);
  }

  #[test]
  fn test_mismatched_value_fails_hydration() {
    let result = Outer::from_map(json!({"id": "x", "items": "oops", "count": 1}));
    assert!(result.is_err());
  }

  #[test]
  fn test_to_map_drops_empty_fields() {
    let outer = Outer { id: "x".into(), nested: None, items: vec![], count: 0 };
    let map = outer.to_map().unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map["id"], json!("x"));
  }

  #[test]
  fn test_to_map_retains_empty_fields_when_flagged() {
    let sticky = Sticky { id: "x".into(), count: 0 };
    let map = sticky.to_map().unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map["count"], json!(0));
  }
}
