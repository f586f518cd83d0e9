//! Serde codecs for Gong's flexible timestamp encoding.
//!
//! Call times arrive either as epoch seconds or as an ISO-8601 string,
//! with or without a UTC offset, and always go out as an ISO-8601 string
//! with seconds precision. The modules follow the layout of
//! `chrono::serde::ts_seconds`: attach them with `#[serde(with = "...")]`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum TimeRepr {
  Epoch(i64),
  Text(String),
}

fn decode(repr: TimeRepr) -> Result<DateTime<Utc>, String> {
  match repr {
    TimeRepr::Epoch(secs) => DateTime::from_timestamp(secs, 0)
      .ok_or_else(|| format!("epoch seconds out of range: {secs}")),
    TimeRepr::Text(text) => DateTime::parse_from_rfc3339(&text)
      .map(|dt| dt.with_timezone(&Utc))
      .or_else(|_| {
        // Offset-less timestamps are taken as UTC.
        NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f")
          .map(|naive| naive.and_utc())
          .map_err(|e| format!("unparseable timestamp {text:?}: {e}"))
      }),
  }
}

fn encode(time: &DateTime<Utc>) -> String {
  time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Codec for a required flexible timestamp field.
pub mod flex_time {
  use chrono::{DateTime, Utc};
  use serde::de::Error as _;
  use serde::{Deserialize, Deserializer, Serializer};

  use super::{decode, encode, TimeRepr};

  pub fn serialize<S: Serializer>(
    time: &DateTime<Utc>,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode(time))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<DateTime<Utc>, D::Error> {
    decode(TimeRepr::deserialize(deserializer)?).map_err(D::Error::custom)
  }
}

/// Codec for an optional flexible timestamp field. Pair it with
/// `#[serde(default)]` so an absent key stays `None`.
pub mod flex_time_option {
  use chrono::{DateTime, Utc};
  use serde::de::Error as _;
  use serde::{Deserialize, Deserializer, Serializer};

  use super::{decode, encode, TimeRepr};

  pub fn serialize<S: Serializer>(
    time: &Option<DateTime<Utc>>,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    match time {
      Some(time) => serializer.serialize_some(&encode(time)),
      None => serializer.serialize_none(),
    }
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<Option<DateTime<Utc>>, D::Error> {
    Option::<TimeRepr>::deserialize(deserializer)?
      .map(|repr| decode(repr).map_err(D::Error::custom))
      .transpose()
  }
}
