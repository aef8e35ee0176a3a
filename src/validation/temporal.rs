use chrono::{DateTime, Utc};

use crate::models::event::Event;
use crate::validation::result::{Field, ValidationFailure, ValidationResult};

pub fn validate_time_presence(event: &Event, errors: &mut ValidationResult) {
    if event.start_time.is_none() {
        errors.add(Field::StartTime, ValidationFailure::PresenceMissing);
    }
    if event.end_time.is_none() {
        errors.add(Field::EndTime, ValidationFailure::PresenceMissing);
    }
}

/// Flags `start_time` unless it is strictly earlier than `end_time`.
///
/// Missing times are left to [`validate_time_presence`]. Equal times are rejected.
pub fn start_time_should_be_before_end_time(
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    errors: &mut ValidationResult,
) {
    let (Some(start), Some(end)) = (start_time, end_time) else {
        return;
    };

    if start >= end {
        errors.add(
            Field::StartTime,
            ValidationFailure::TemporalOrderInvalid { start, end },
        );
    }
}
