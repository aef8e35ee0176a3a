pub mod config;
pub mod models;
pub mod storage;
pub mod utils;
pub mod validation;

pub use models::{Attachment, Event, EventImage, Ticket, User};
pub use storage::{EventStore, InMemoryEventStore};
pub use utils::error::AppError;
pub use validation::{validate, Field, ValidationFailure, ValidationResult};
