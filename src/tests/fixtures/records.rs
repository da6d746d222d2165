// Shared test fixture for records sent to and read from the store.

use crate::modules::items::core::record::Record;
use serde_json::Value;

pub struct RecordBuilder {
    inner: Record,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: Record::new("item-fixed-0001", "fixture payload"),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn data(mut self, v: impl Into<Value>) -> Self {
        self.inner.data = v.into();
        self
    }

    pub fn build(self) -> Record {
        self.inner
    }

    /// Compact JSON body as a client would send it.
    pub fn to_body(&self) -> String {
        serde_json::to_string(&self.inner).unwrap()
    }
}

#[cfg(test)]
mod record_builder_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn default_delegates_to_new() {
        let built = RecordBuilder::default().build();
        assert_eq!(built.id, "item-fixed-0001");
        assert_eq!(built.data, json!("fixture payload"));
    }

    #[rstest]
    fn setters_override_all_fields() {
        let builder = RecordBuilder::new().id("2").data(42);
        assert_eq!(builder.to_body(), r#"{"id":"2","data":42}"#);
        assert_eq!(builder.build(), Record::new("2", 42));
    }
}
