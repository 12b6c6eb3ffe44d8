//! Serde adapter for optional detail records.
//!
//! `None` is written as an empty object (`{}`) rather than `null`, which is
//! what report consumers expect from a sentinel result.
//!
//! ```ignore
//! #[serde(with = "scoring_core::details_map")]
//! pub details: Option<MyDetails>,
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(details) => details.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<T> {
    Full(T),
    Empty {},
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(match Repr::<T>::deserialize(deserializer)? {
        Repr::Full(details) => Some(details),
        Repr::Empty {} => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Details {
        frames: usize,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        #[serde(with = "crate::details_map")]
        details: Option<Details>,
    }

    #[test]
    fn test_none_is_empty_object() {
        let json = serde_json::to_string(&Record { details: None }).unwrap();
        assert_eq!(json, r#"{"details":{}}"#);
    }

    #[test]
    fn test_round_trip_both_shapes() {
        let full: Record = serde_json::from_str(r#"{"details":{"frames":4}}"#).unwrap();
        assert_eq!(full.details, Some(Details { frames: 4 }));

        let empty: Record = serde_json::from_str(r#"{"details":{}}"#).unwrap();
        assert_eq!(empty.details, None);
    }
}
