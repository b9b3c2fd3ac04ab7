//! JSON rendering with ECS-style canonical keys followed by declared extra fields.

use super::{Formatter, timestamp};
use crate::record::LogRecord;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Output key `name` takes its value from the record attribute `source`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtraField {
    pub name: String,
    pub source: String,
}

impl ExtraField {
    /// An empty `source` makes the field inert.
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StructuredFormatter {
    /// Rendered right after `@timestamp`, ahead of the canonical keys.
    leading: Option<ExtraField>,
    fields: Vec<ExtraField>,
}

impl StructuredFormatter {
    /// Fields with an empty `source` are dropped; declaration order is kept.
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = ExtraField>) -> Self {
        Self {
            leading: None,
            fields: fields
                .into_iter()
                .filter(|field| !field.source.is_empty())
                .collect(),
        }
    }

    /// Places `field` second, between `@timestamp` and `log.level`. File records
    /// use this for `app.name`. A trailing field with the same name is dropped.
    #[must_use]
    pub fn leading_field(mut self, field: ExtraField) -> Self {
        self.fields.retain(|extra| extra.name != field.name);
        self.leading = Some(field);
        self
    }

    /// Trailing extra fields, in output order.
    #[must_use]
    pub fn fields(&self) -> &[ExtraField] {
        &self.fields
    }

    /// `@timestamp`, the leading field if any, the canonical keys, then the
    /// extra fields in insertion order.
    #[must_use]
    pub fn to_value(&self, record: &LogRecord) -> Value {
        let mut object = Map::new();
        object.insert(
            "@timestamp".to_string(),
            Value::String(timestamp::iso8601(&record.timestamp)),
        );
        if let Some(field) = &self.leading {
            object.insert(
                field.name.clone(),
                Value::String(record.attribute(&field.source).to_string()),
            );
        }
        object.insert(
            "log.level".to_string(),
            Value::String(record.level.name().to_string()),
        );
        object.insert(
            "message".to_string(),
            Value::String(format!(
                "[{} | {} | LN{}]: {}",
                record.logger,
                record.function,
                record.line,
                record.rendered_message()
            )),
        );

        for field in &self.fields {
            object.insert(
                field.name.clone(),
                Value::String(record.attribute(&field.source).to_string()),
            );
        }

        Value::Object(object)
    }
}

impl Formatter for StructuredFormatter {
    fn format(&self, record: &LogRecord) -> String {
        self.to_value(record).to_string()
    }
}
