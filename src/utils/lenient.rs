// src/utils/lenient.rs

//! Integer fields that also accept numeric strings.
//!
//! The trivia front-end posts ids taken from `<select>` values, so
//! `"category": "3"` and `"category": 3` must mean the same thing.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    fn into_int(self) -> Result<i64, String> {
        match self {
            IntOrString::Int(n) => Ok(n),
            IntOrString::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("expected an integer, got {s:?}")),
        }
    }
}

pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?
        .into_int()
        .map_err(D::Error::custom)
}

pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        Some(value) => value.into_int().map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}
