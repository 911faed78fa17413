//! Untyped value trees with first-class dates.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

use super::tagged_date::{format_timestamp, parse_timestamp};
use super::{CodecError, DATE_TAG, DATE_TAG_FIELD, DATE_VALUE_FIELD};

/// A stored value: JSON plus a native date variant.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<StoredValue>),
    Map(BTreeMap<String, StoredValue>),
    Date(DateTime<Utc>),
}

impl StoredValue {
    /// Build a number node. Returns `None` for NaN and infinities.
    pub fn number(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self::Number)
    }

    /// Whether this node is a native date.
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Convert to plain JSON, writing dates as tagged wrappers.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Self::Date(date) => {
                let mut wrapper = Map::new();
                wrapper.insert(DATE_TAG_FIELD.to_owned(), Value::String(DATE_TAG.to_owned()));
                wrapper.insert(
                    DATE_VALUE_FIELD.to_owned(),
                    Value::String(format_timestamp(date)),
                );
                Value::Object(wrapper)
            }
        }
    }

    /// If this map is exactly a date wrapper, return the date it carries.
    fn as_date_tag(fields: &BTreeMap<String, Self>) -> Option<DateTime<Utc>> {
        if fields.len() != 2 {
            return None;
        }
        match (fields.get(DATE_TAG_FIELD), fields.get(DATE_VALUE_FIELD)) {
            (Some(Self::String(tag)), Some(Self::String(value))) if tag == DATE_TAG => {
                parse_timestamp(value)
            }
            _ => None,
        }
    }
}

/// Structural conversion. Tags are not interpreted here; see [`revive`].
impl From<Value> for StoredValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(fields) => Self::Map(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<DateTime<Utc>> for StoredValue {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for StoredValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

/// Replace every date wrapper in the tree with a native date.
///
/// Idempotent: native dates pass through, so reviving an already revived
/// tree is harmless. A wrapper whose timestamp does not parse is left as a
/// plain map.
pub fn revive(value: StoredValue) -> StoredValue {
    match value {
        StoredValue::Array(items) => StoredValue::Array(items.into_iter().map(revive).collect()),
        StoredValue::Map(fields) => {
            let fields: BTreeMap<String, StoredValue> = fields
                .into_iter()
                .map(|(key, value)| (key, revive(value)))
                .collect();
            match StoredValue::as_date_tag(&fields) {
                Some(date) => StoredValue::Date(date),
                None => StoredValue::Map(fields),
            }
        }
        other => other,
    }
}

/// Encode a value tree as text.
pub fn encode(value: &StoredValue) -> Result<String, CodecError> {
    serde_json::to_string(&value.to_json()).map_err(CodecError::Encode)
}

/// Decode text produced by [`encode`] back into a value tree.
pub fn decode(text: &str) -> Result<StoredValue, CodecError> {
    let json: Value = serde_json::from_str(text).map_err(CodecError::Parse)?;
    Ok(revive(StoredValue::from(json)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 8, 0, 0).unwrap()
    }

    fn map(entries: Vec<(&str, StoredValue)>) -> StoredValue {
        StoredValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
        )
    }

    fn nested_tree() -> StoredValue {
        map(vec![
            ("created", StoredValue::Date(date(1))),
            ("title", StoredValue::from("roster")),
            ("count", StoredValue::number(3.0).unwrap()),
            ("missing", StoredValue::Null),
            (
                "rows",
                StoredValue::Array(vec![
                    map(vec![
                        ("at", StoredValue::Date(date(2))),
                        ("deep", StoredValue::Array(vec![StoredValue::Date(date(3))])),
                    ]),
                    StoredValue::Bool(true),
                ]),
            ),
        ])
    }

    #[test]
    fn test_round_trip_keeps_nested_dates_typed() {
        let tree = nested_tree();
        let text = encode(&tree).unwrap();
        let back = decode(&text).unwrap();
        assert_eq!(back, tree);

        let StoredValue::Map(fields) = &back else {
            panic!("expected map");
        };
        assert!(fields["created"].is_date());
    }

    #[test]
    fn test_encode_writes_tag_shape() {
        let text = encode(&StoredValue::Date(date(1))).unwrap();
        assert_eq!(text, r#"{"__type":"Date","value":"2024-01-01T08:00:00.000Z"}"#);
    }

    #[test]
    fn test_revive_is_idempotent() {
        let tree = nested_tree();
        assert_eq!(revive(tree.clone()), tree);
        assert_eq!(revive(revive(tree.clone())), tree);
    }

    #[test]
    fn test_only_exact_tags_become_dates() {
        let text = r#"[
            {"__type":"Date","value":"2024-01-01T00:00:00.000Z","extra":1},
            {"__type":"date","value":"2024-01-01T00:00:00.000Z"},
            {"__type":"Date","value":"tomorrow"},
            "2024-01-01T00:00:00.000Z"
        ]"#;
        let StoredValue::Array(items) = decode(text).unwrap() else {
            panic!("expected array");
        };
        assert!(items.iter().all(|item| !item.is_date()));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(matches!(decode("{not json"), Err(CodecError::Parse(_))));
    }

    #[test]
    fn test_extended_year_dates_stay_typed() {
        let far = Utc.with_ymd_and_hms(12000, 1, 1, 0, 0, 0).unwrap();
        let ancient = Utc.with_ymd_and_hms(-500, 6, 15, 0, 0, 0).unwrap();
        let tree = map(vec![
            ("far", StoredValue::Date(far)),
            ("ancient", StoredValue::Array(vec![StoredValue::Date(ancient)])),
        ]);

        assert_eq!(decode(&encode(&tree).unwrap()).unwrap(), tree);
    }

    #[test]
    fn test_finite_numbers_round_trip_exactly() {
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut checked = 0;
        for _ in 0..50_000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let Some(number) = StoredValue::number(f64::from_bits(state)) else {
                continue;
            };
            let back = decode(&encode(&number).unwrap()).unwrap();
            assert_eq!(back, number);
            checked += 1;
        }
        assert!(checked > 40_000);

        for text in [
            "1.0715660391465826e-75",
            "-1.81996730402717e-179",
            "-1.603964615428183e143",
            "-9.643915712060552e-234",
            "5e-324",
        ] {
            let number = StoredValue::number(text.parse().unwrap()).unwrap();
            assert_eq!(decode(&encode(&number).unwrap()).unwrap(), number);
        }
    }

    #[test]
    fn test_non_finite_numbers_are_refused() {
        assert!(StoredValue::number(f64::NAN).is_none());
        assert!(StoredValue::number(f64::INFINITY).is_none());
    }
}
