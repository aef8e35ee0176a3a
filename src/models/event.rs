use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::models::user::User;
use crate::utils::error::AppError;
use crate::validation::{self, ValidationResult};

/// Metadata of an attached file. Implementors only need to report the MIME type.
pub trait Attachment {
    fn content_type(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventImage {
    pub filename: String,
    pub content_type: String,
    pub byte_size: u64,
}

impl Attachment for EventImage {
    fn content_type(&self) -> &str {
        &self.content_type
    }
}

/// An event as submitted or loaded, before validation.
///
/// An event owns many tickets. Destroying an event destroys its tickets; that is
/// the storage layer's job (see [`crate::storage::EventStore::destroy_event`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<Uuid>,
    pub owner_id: Option<Uuid>,
    pub name: Option<String>,
    pub place: Option<String>,
    pub content: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub event_image: Option<EventImage>,
}

impl Event {
    pub fn validate(&self) -> ValidationResult {
        validation::validate(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Whether `user` owns this event. No user, or no owner, means false.
    pub fn created_by(&self, user: Option<&User>) -> bool {
        match (user, self.owner_id) {
            (Some(user), Some(owner_id)) => user.id == owner_id,
            _ => false,
        }
    }

    pub fn ensure_owned_by(&self, user: Option<&User>) -> Result<(), AppError> {
        if self.created_by(user) {
            return Ok(());
        }

        warn!(
            event_id = ?self.id,
            user_id = ?user.map(|u| u.id),
            "Ownership check denied"
        );
        Err(AppError::Forbidden(
            "Only the owner can modify this event".to_string(),
        ))
    }
}
