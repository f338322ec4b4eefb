//! Serde adapter for `f64` fields that may be infinite or NaN.
//!
//! JSON has no representation for non-finite numbers, so they are written
//! as the strings `"inf"`, `"-inf"` and `"NaN"`. Finite values stay numbers.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Bound {
    Finite(f64),
    Named(String),
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        Bound::Finite(*value).serialize(serializer)
    } else {
        Bound::Named(value.to_string()).serialize(serializer)
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Bound::deserialize(deserializer)? {
        Bound::Finite(v) => Ok(v),
        Bound::Named(name) => name
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid bound: {name}"))),
    }
}
