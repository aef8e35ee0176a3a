pub mod event;
pub mod ticket;
pub mod user;

pub use event::{Attachment, Event, EventImage};
pub use ticket::Ticket;
pub use user::User;
