//! Serde adapter for date fields.
//!
//! Use with `#[serde(with = "tagged_date")]` on `DateTime<Utc>` fields and
//! `#[serde(default, with = "tagged_date::option")]` on optional ones.
//!
//! Writing always produces the tagged wrapper. Reading accepts the tagged
//! wrapper, a bare RFC 3339 string, or epoch milliseconds, and normalizes
//! all three to `DateTime<Utc>`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serializer};

use super::{DATE_TAG, DATE_TAG_FIELD, DATE_VALUE_FIELD};

/// Format a timestamp the way browsers print `Date.toISOString()`.
///
/// Sub-millisecond precision is kept (with more digits) so nothing is lost.
pub fn format_timestamp(date: &DateTime<Utc>) -> String {
    let precision = if date.timestamp_subsec_nanos() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::Nanos
    };
    date.to_rfc3339_opts(precision, true)
}

/// Layout of timestamps outside years 0000..=9999, which carry a sign and
/// more than four year digits (`+12000-01-01T00:00:00.000Z`).
const EXTENDED_YEAR_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an RFC 3339 timestamp into UTC.
///
/// Also accepts the signed extended-year form [`format_timestamp`] writes
/// for dates RFC 3339 cannot express.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if let Some(utc) = text.strip_suffix('Z') {
        return NaiveDateTime::parse_from_str(utc, EXTENDED_YEAR_FORMAT)
            .ok()
            .map(|date| date.and_utc());
    }
    DateTime::parse_from_str(text, &format!("{EXTENDED_YEAR_FORMAT}%:z"))
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateRepr {
    Tagged {
        #[serde(rename = "__type")]
        tag: String,
        value: String,
    },
    Text(String),
    Millis(i64),
}

impl DateRepr {
    fn into_date(self) -> Result<DateTime<Utc>, String> {
        match self {
            Self::Tagged { tag, value } => {
                if tag != DATE_TAG {
                    return Err(format!("unknown value tag '{tag}'"));
                }
                parse_timestamp(&value).ok_or_else(|| format!("invalid date '{value}'"))
            }
            Self::Text(value) => {
                parse_timestamp(&value).ok_or_else(|| format!("invalid date '{value}'"))
            }
            Self::Millis(millis) => DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| format!("timestamp {millis} out of range")),
        }
    }
}

pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut wrapper = serializer.serialize_struct("TaggedDate", 2)?;
    wrapper.serialize_field(DATE_TAG_FIELD, DATE_TAG)?;
    wrapper.serialize_field(DATE_VALUE_FIELD, &format_timestamp(date))?;
    wrapper.end()
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    DateRepr::deserialize(deserializer)?
        .into_date()
        .map_err(D::Error::custom)
}

/// Variant of the adapter for `Option<DateTime<Utc>>` fields.
pub mod option {
    use super::{DateRepr, DateTime, Deserialize, Deserializer, Serializer, Utc};
    use serde::de::Error as _;

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<DateRepr>::deserialize(deserializer)?
            .map(DateRepr::into_date)
            .transpose()
            .map_err(D::Error::custom)
    }
}
