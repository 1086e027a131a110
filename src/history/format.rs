use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

use crate::models::TIMESTAMP_FORMAT;

pub fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

/// Accepts the store's `YYYY-MM-DD HH:MM:SS` layout, falling back to RFC3339
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if let Ok(ts) = NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT) {
        return Ok(ts);
    }

    DateTime::parse_from_rfc3339(&s)
        .map(|dt| truncate_to_seconds(dt.naive_local()))
        .map_err(|e| Error::custom(format!("invalid timestamp '{}': {}", s, e)))
}

pub fn truncate_to_seconds(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}
