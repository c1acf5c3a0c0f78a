//! Typed view of an input document.
//!
//! A document is a JSON object with a reserved `keys` field carrying `n` and
//! `k`; every other field is a point entry keyed by its x-coordinate:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Entries are enumerated the way a JavaScript object enumerates its own
//! keys: canonical array-index keys (`"0"`, `"1"`, ...) in ascending numeric
//! order, then every other key in textual order. That enumeration decides the
//! interpolation prefix.

use std::io::Read;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{error::MalformedInput, params::RESERVED_KEYS_FIELD};

/// The `keys` metadata block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Keys {
    /// Number of points the document claims to carry (informational).
    pub n: usize,
    /// Number of points needed, i.e. polynomial degree plus one.
    pub k: usize,
}

/// A radix given either as a JSON number or as a decimal string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Base {
    Number(u64),
    Text(String),
}

impl Base {
    /// The radix as an integer, without range checks.
    pub fn value(&self) -> Result<u64, MalformedInput> {
        match self {
            Base::Number(n) => Ok(*n),
            Base::Text(text) => text
                .parse::<u64>()
                .map_err(|_| MalformedInput::InvalidBase(text.clone())),
        }
    }
}

impl From<u32> for Base {
    fn from(value: u32) -> Self {
        Base::Number(u64::from(value))
    }
}

/// One point entry: a digit string and the base it is written in.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EncodedValue {
    pub base: Base,
    pub value: String,
}

impl EncodedValue {
    pub fn new(base: impl Into<Base>, value: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputDocument {
    keys: Keys,
    entries: Vec<(String, EncodedValue)>,
}

impl InputDocument {
    /// Entries are kept exactly in the order given.
    pub fn new(keys: Keys, entries: Vec<(String, EncodedValue)>) -> Self {
        Self { keys, entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self, MalformedInput> {
        let map: Map<String, Value> = serde_json::from_str(json)
            .map_err(|err| MalformedInput::Json(err.to_string()))?;
        Self::try_from(map)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MalformedInput> {
        let map: Map<String, Value> = serde_json::from_reader(reader)
            .map_err(|err| MalformedInput::Json(err.to_string()))?;
        Self::try_from(map)
    }

    pub fn keys(&self) -> Keys {
        self.keys
    }

    /// Point entries in enumeration order.
    pub fn entries(&self) -> &[(String, EncodedValue)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Map<String, Value>> for InputDocument {
    type Error = MalformedInput;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut keys = None;
        let mut entries = Vec::with_capacity(map.len().saturating_sub(1));

        for (key, value) in map {
            if key == RESERVED_KEYS_FIELD {
                let parsed = serde_json::from_value::<Keys>(value)
                    .map_err(|err| MalformedInput::InvalidEntry {
                        key: key.clone(),
                        reason: err.to_string(),
                    })?;
                keys = Some(parsed);
                continue;
            }

            match serde_json::from_value::<EncodedValue>(value) {
                Ok(entry) => entries.push((key, entry)),
                Err(err) => {
                    return Err(MalformedInput::InvalidEntry {
                        key,
                        reason: err.to_string(),
                    })
                }
            }
        }

        let keys =
            keys.ok_or(MalformedInput::MissingField(RESERVED_KEYS_FIELD))?;
        // Stable, so non-index keys keep their textual order.
        entries.sort_by_key(|(key, _)| enumeration_rank(key));
        Ok(Self { keys, entries })
    }
}

/// Sort key placing array-index keys first, in ascending numeric order.
fn enumeration_rank(key: &str) -> (bool, u32) {
    match array_index(key) {
        Some(index) => (false, index),
        None => (true, 0),
    }
}

/// `key` as an array index: a canonical decimal in `0..u32::MAX`.
///
/// `"01"`, `"+1"` and `"-1"` are not canonical, so they are ordinary keys.
fn array_index(key: &str) -> Option<u32> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&index| index != u32::MAX)
}
