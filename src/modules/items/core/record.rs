use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const SEED_ID: &str = "1";
pub const SEED_DATA: &str = "hello world";

/// One stored entry. `id` is caller supplied and never checked for
/// uniqueness; `data` is any JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    pub data: Value,
}

impl Record {
    pub fn new(id: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// The record every fresh store starts with.
    pub fn seed() -> Self {
        Self::new(SEED_ID, SEED_DATA)
    }
}

// Decoding is lenient: a `null` document is an empty record, keys match
// case-insensitively, a repeated key overwrites the earlier value, a `null`
// id leaves the id untouched and unknown keys are skipped.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a record object or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Record, E> {
        Ok(Record::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Record, E> {
        Ok(Record::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Record, D::Error> {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
        let mut record = Record::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("id") {
                if let Some(id) = map.next_value::<Option<String>>()? {
                    record.id = id;
                }
            } else if key.eq_ignore_ascii_case("data") {
                record.data = map.next_value()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(record)
    }
}
