//! Recursive key translation for nested JSON structures.
//!
//! Requests go out through [`outbound`], responses come back through
//! [`inbound`]. Both walk the same shapes (objects, and arrays whose first
//! element is an object) but they are deliberately asymmetric: the outbound
//! pass drops empty values so that unset filter fields never reach the
//! wire, while the inbound pass keeps everything the API returned.

use serde_json::{Map, Value};

use super::case::{from_wire_case, to_wire_case};

/// True for the values the wire layer treats as unset: null, `false`,
/// numeric zero, and empty strings, arrays, and objects.
pub fn is_empty_value(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::Bool(b) => !b,
    Value::Number(n) => n.as_f64() == Some(0.0),
    Value::String(s) => s.is_empty(),
    Value::Array(items) => items.is_empty(),
    Value::Object(map) => map.is_empty(),
  }
}

/// Rewrite a request structure for the wire: camelCase keys, empty values
/// dropped at every level. Recurses into objects and into arrays whose
/// first element is an object; any other value is copied unchanged.
///
/// Dropping empty values means an intentional literal `0` or `false`
/// cannot be sent; the Gong API treats those fields as unset either way.
pub fn outbound(value: Value) -> Value {
  match value {
    Value::Object(map) => {
      let mut out = Map::with_capacity(map.len());

      for (key, entry) in map {
        if is_empty_value(&entry) {
          continue;
        }
        out.insert(to_wire_case(&key), outbound_nested(entry));
      }

      Value::Object(out)
    }
    other => other,
  }
}

fn outbound_nested(value: Value) -> Value {
  match value {
    Value::Object(_) => outbound(value),
    Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => {
      Value::Array(items.into_iter().map(outbound).collect())
    }
    other => other,
  }
}

/// Normalize a wire response for hydration: snake_case keys, recursing
/// into objects and arrays of objects. Scalars and arrays of scalars are
/// copied through verbatim and nothing is dropped on the way in.
pub fn inbound(value: Value) -> Value {
  match value {
    Value::Object(map) => {
      let mut out = Map::with_capacity(map.len());

      for (key, entry) in map {
        out.insert(from_wire_case(&key), inbound_nested(entry));
      }

      Value::Object(out)
    }
    other => other,
  }
}

fn inbound_nested(value: Value) -> Value {
  match value {
    Value::Object(_) => inbound(value),
    Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => {
      Value::Array(items.into_iter().map(inbound).collect())
    }
    other => other,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_outbound_renames_and_drops_empty() {
    let translated = outbound(json!({
      "call_ids": [],
      "workspace_id": "w1",
    }));

    assert_eq!(translated, json!({"workspaceId": "w1"}));
  }

  #[test]
  fn test_outbound_drops_every_empty_shape() {
    let translated = outbound(json!({
      "a": 0,
      "b": "",
      "c": false,
      "d": null,
      "e": [],
      "f": {},
      "g": 0.0,
      "kept": "v",
    }));

    assert_eq!(translated, json!({"kept": "v"}));
  }

  #[test]
  fn test_outbound_recurses_into_objects_and_object_lists() {
    let translated = outbound(json!({
      "content_selector": {
        "context_timing": "now",
        "exposed_fields": {"call_outcome": true, "key_points": null},
      },
      "context_objects": [
        {"object_id": "o1", "object_type": ""},
        {"object_id": "o2"},
      ],
    }));

    assert_eq!(
      translated,
      json!({
        "contentSelector": {
          "contextTiming": "now",
          "exposedFields": {"callOutcome": true},
        },
        "contextObjects": [
          {"objectId": "o1"},
          {"objectId": "o2"},
        ],
      })
    );
  }

  #[test]
  fn test_outbound_copies_scalar_lists_verbatim() {
    let translated = outbound(json!({"call_ids": ["1", "2", "3"]}));
    assert_eq!(translated, json!({"callIds": ["1", "2", "3"]}));
  }

  #[test]
  fn test_inbound_renames_without_dropping() {
    let translated = inbound(json!({"currentPageSize": 10, "cursor": "abc"}));
    assert_eq!(translated, json!({"current_page_size": 10, "cursor": "abc"}));
  }

  #[test]
  fn test_inbound_keeps_empty_and_scalar_list_values() {
    let translated = inbound(json!({
      "totalRecords": 0,
      "emailAliases": ["a@b.c", "d@e.f"],
      "personalMeetingUrls": [],
      "isPrivate": false,
    }));

    assert_eq!(
      translated,
      json!({
        "total_records": 0,
        "email_aliases": ["a@b.c", "d@e.f"],
        "personal_meeting_urls": [],
        "is_private": false,
      })
    );
  }

  #[test]
  fn test_inbound_recurses_into_objects_and_object_lists() {
    let translated = inbound(json!({
      "records": {"currentPageNumber": 1},
      "callTranscripts": [
        {"callId": "c1", "transcript": [{"speakerId": "s1"}]},
      ],
    }));

    assert_eq!(
      translated,
      json!({
        "records": {"current_page_number": 1},
        "call_transcripts": [
          {"call_id": "c1", "transcript": [{"speaker_id": "s1"}]},
        ],
      })
    );
  }

  #[test]
  fn test_non_object_values_pass_through() {
    assert_eq!(outbound(json!("scalar")), json!("scalar"));
    assert_eq!(inbound(json!([1, 2])), json!([1, 2]));
  }
}
