use crate::models::event::Event;
use crate::validation::result::{Field, ValidationFailure, ValidationResult};

/// Presence plus maximum length for a required text attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub max_length: usize,
}

pub const NAME_MAX_LENGTH: usize = 50;
pub const PLACE_MAX_LENGTH: usize = 100;
pub const CONTENT_MAX_LENGTH: usize = 2000;

pub const TEXT_FIELD_RULES: [FieldRule; 3] = [
    FieldRule {
        field: Field::Name,
        max_length: NAME_MAX_LENGTH,
    },
    FieldRule {
        field: Field::Place,
        max_length: PLACE_MAX_LENGTH,
    },
    FieldRule {
        field: Field::Content,
        max_length: CONTENT_MAX_LENGTH,
    },
];

impl FieldRule {
    /// Appends a presence error and, independently, a length error.
    pub fn check(&self, value: Option<&str>, errors: &mut ValidationResult) {
        if is_blank(value) {
            errors.add(self.field, ValidationFailure::PresenceMissing);
        }

        if let Some(value) = value {
            // Length is counted in characters, not bytes.
            if value.chars().count() > self.max_length {
                errors.add(
                    self.field,
                    ValidationFailure::LengthExceeded {
                        limit: self.max_length,
                    },
                );
            }
        }
    }
}

/// Absent, empty and whitespace-only values are all blank.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub fn validate_text_fields(event: &Event, errors: &mut ValidationResult) {
    for rule in &TEXT_FIELD_RULES {
        let value = match rule.field {
            Field::Name => event.name.as_deref(),
            Field::Place => event.place.as_deref(),
            Field::Content => event.content.as_deref(),
            _ => continue,
        };
        rule.check(value, errors);
    }
}
