pub mod candidate;
pub mod job;
pub mod submission;

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use tracing::warn;

/// Accepts the backend's ISO-8601 timestamps with or without a UTC offset.
/// Offset-carrying values are normalised to UTC.
pub(crate) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_timestamp(&value).map_err(serde::de::Error::custom))
        .transpose()
}

/// Like `deserialize_optional_timestamp`, but an unparseable value becomes
/// `None` instead of failing the whole record. For display-only fields.
pub(crate) fn deserialize_lenient_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(opt.and_then(|value| match value {
        serde_json::Value::String(raw) => parse_timestamp(&raw)
            .map_err(|err| warn!("Ignoring {err}"))
            .ok(),
        serde_json::Value::Null => None,
        other => {
            warn!("Ignoring non-string timestamp {other}");
            None
        }
    }))
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|err| format!("invalid timestamp '{value}': {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_naive_isoformat_with_micros() {
        let ts = parse_timestamp("2025-03-14T09:26:53.589793").unwrap();
        assert_eq!(ts.hour(), 9);
        assert_eq!(ts.nanosecond(), 589_793_000);
    }

    #[test]
    fn test_parse_offset_normalises_to_utc() {
        let ts = parse_timestamp("2025-03-14T09:00:00+02:00").unwrap();
        assert_eq!(ts.hour(), 7);
    }

    #[derive(Debug, Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
        at: Option<NaiveDateTime>,
    }

    #[test]
    fn test_lenient_timestamp_drops_bad_values() {
        for body in [r#"{"at": "last tuesday"}"#, r#"{"at": 17}"#, r#"{"at": null}"#, "{}"] {
            let stamped: Stamped = serde_json::from_str(body).unwrap();
            assert!(stamped.at.is_none(), "{body}");
        }
        let stamped: Stamped = serde_json::from_str(r#"{"at": "2025-03-14T09:00:00"}"#).unwrap();
        assert_eq!(stamped.at.unwrap().hour(), 9);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
