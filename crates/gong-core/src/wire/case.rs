//! Conversion between snake_case field names and camelCase wire keys.

/// Convert a snake_case field name to the camelCase form used on the wire.
///
/// Splits on underscores, lowercases the first segment, and uppercases the
/// first letter of every later segment: `from_date_time` -> `fromDateTime`.
pub fn to_wire_case(name: &str) -> String {
  let mut segments = name.split('_');
  let mut out = String::with_capacity(name.len());

  if let Some(first) = segments.next() {
    out.push_str(&first.to_lowercase());
  }

  for segment in segments {
    let mut chars = segment.chars();
    if let Some(head) = chars.next() {
      out.extend(head.to_uppercase());
      out.push_str(chars.as_str());
    }
  }

  out
}

/// Convert a camelCase wire key back to snake_case.
///
/// Each uppercase letter becomes an underscore plus its lowercase form, and
/// one leading underscore is stripped: `fromDateTime` -> `from_date_time`.
/// Names with digits or runs of capitals do not round-trip; Gong's key
/// style never produces those.
pub fn from_wire_case(name: &str) -> String {
  let mut out = String::with_capacity(name.len() + 4);

  for c in name.chars() {
    if c.is_uppercase() {
      out.push('_');
      out.extend(c.to_lowercase());
    } else {
      out.push(c);
    }
  }

  if out.starts_with('_') {
    out.remove(0);
  }

  out
}
