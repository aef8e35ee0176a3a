//! Rule engine deciding whether an [`Event`] may be persisted.
//!
//! Every rule group runs on every pass; failures are collected, never short-circuited.

use tracing::debug;

use crate::models::event::{Attachment, Event};

pub mod fields;
pub mod image;
pub mod result;
pub mod temporal;

pub use result::{Field, ValidationFailure, ValidationResult};

pub fn validate(event: &Event) -> ValidationResult {
    let mut errors = ValidationResult::new();

    fields::validate_text_fields(event, &mut errors);
    temporal::validate_time_presence(event, &mut errors);
    temporal::start_time_should_be_before_end_time(event.start_time, event.end_time, &mut errors);
    image::event_image_should_have_valid_mime_type(
        event.event_image.as_ref().map(|image| image as &dyn Attachment),
        &mut errors,
    );

    debug!(
        event_id = ?event.id,
        failures = errors.len(),
        "Validated event"
    );

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventImage;
    use chrono::{Duration, Utc};

    fn valid_event() -> Event {
        let start = Utc::now();
        Event {
            name: Some("Rust Tokyo".to_string()),
            place: Some("Shibuya".to_string()),
            content: Some("Monthly meetup for Rustaceans.".to_string()),
            start_time: Some(start),
            end_time: Some(start + Duration::hours(2)),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_event_has_no_errors() {
        assert!(validate(&valid_event()).is_empty());
    }

    #[test]
    fn test_empty_event_collects_every_presence_error() {
        let errors = validate(&Event::default());

        for field in [
            Field::Name,
            Field::Place,
            Field::Content,
            Field::StartTime,
            Field::EndTime,
        ] {
            assert_eq!(errors.failures(field), &[ValidationFailure::PresenceMissing]);
        }
        assert!(!errors.contains(Field::EventImage));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_rule_groups_do_not_short_circuit() {
        let mut event = valid_event();
        event.name = Some("n".repeat(51));
        event.end_time = event.start_time;
        event.event_image = Some(EventImage {
            filename: "notes.txt".to_string(),
            content_type: "text/plain".to_string(),
            byte_size: 12,
        });

        let errors = validate(&event);
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::StartTime));
        assert!(errors.contains(Field::EventImage));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut event = valid_event();
        event.place = None;
        event.end_time = Some(event.start_time.unwrap() - Duration::minutes(1));

        assert_eq!(validate(&event), validate(&event));
    }
}
