use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Event attributes that can carry validation errors.
///
/// Declaration order is the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Place,
    Content,
    StartTime,
    EndTime,
    EventImage,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Place => "place",
            Field::Content => "content",
            Field::StartTime => "start_time",
            Field::EndTime => "end_time",
            Field::EventImage => "event_image",
        }
    }

    pub fn human_name(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Place => "Place",
            Field::Content => "Content",
            Field::StartTime => "Start time",
            Field::EndTime => "End time",
            Field::EventImage => "Event image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation. The `Display` output is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("can't be blank")]
    PresenceMissing,

    #[error("is too long (maximum is {limit} characters)")]
    LengthExceeded { limit: usize },

    #[error("must be before the end time")]
    TemporalOrderInvalid {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("has an unsupported content type ({actual})")]
    UnsupportedMimeType { actual: String },
}

/// Field-keyed errors collected during one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, Vec<ValidationFailure>>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, failure: ValidationFailure) {
        self.errors.entry(field).or_default().push(failure);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of failures across all fields.
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn failures(&self, field: Field) -> &[ValidationFailure] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn messages(&self, field: Field) -> Vec<String> {
        self.failures(field).iter().map(ToString::to_string).collect()
    }

    /// Messages prefixed with the field label, e.g. "Name can't be blank".
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .map(|(field, failure)| format!("{} {}", field.human_name(), failure))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationFailure)> + '_ {
        self.errors
            .iter()
            .flat_map(|(field, failures)| failures.iter().map(move |failure| (*field, failure)))
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, failures) in &self.errors {
            let messages: Vec<String> = failures.iter().map(ToString::to_string).collect();
            map.serialize_entry(field.as_str(), &messages)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(result.failures(Field::Name).is_empty());
        assert!(result.messages(Field::Name).is_empty());
    }

    #[test]
    fn test_failures_keep_insertion_order_per_field() {
        let mut result = ValidationResult::new();
        result.add(Field::Name, ValidationFailure::PresenceMissing);
        result.add(Field::Name, ValidationFailure::LengthExceeded { limit: 50 });

        assert_eq!(
            result.messages(Field::Name),
            vec![
                "can't be blank".to_string(),
                "is too long (maximum is 50 characters)".to_string(),
            ]
        );
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_full_messages_follow_field_order() {
        let mut result = ValidationResult::new();
        result.add(
            Field::EventImage,
            ValidationFailure::UnsupportedMimeType {
                actual: "text/plain".to_string(),
            },
        );
        result.add(Field::Place, ValidationFailure::PresenceMissing);

        assert_eq!(
            result.full_messages(),
            vec![
                "Place can't be blank".to_string(),
                "Event image has an unsupported content type (text/plain)".to_string(),
            ]
        );
        assert_eq!(
            result.to_string(),
            "Place can't be blank, Event image has an unsupported content type (text/plain)"
        );
    }

    #[test]
    fn test_serializes_as_field_keyed_messages() {
        let mut result = ValidationResult::new();
        result.add(Field::StartTime, ValidationFailure::PresenceMissing);
        result.add(Field::Content, ValidationFailure::LengthExceeded { limit: 2000 });

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "content": ["is too long (maximum is 2000 characters)"],
                "start_time": ["can't be blank"],
            })
        );
    }
}
