use std::collections::HashMap;

use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Event, Ticket};
use crate::utils::error::AppError;

/// What the validation core expects from whatever persists events.
pub trait EventStore {
    /// Validates, then stores. An invalid event is never written.
    fn save_event(&mut self, event: Event) -> Result<Event, AppError>;

    fn find_event(&self, id: Uuid) -> Option<&Event>;

    fn events_owned_by(&self, owner_id: Uuid) -> Vec<&Event>;

    fn add_ticket(&mut self, ticket: Ticket) -> Result<(), AppError>;

    fn tickets_for(&self, event_id: Uuid) -> Vec<&Ticket>;

    /// Removes the event together with every ticket it owns and returns those tickets.
    fn destroy_event(&mut self, id: Uuid) -> Result<Vec<Ticket>, AppError>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: HashMap<Uuid, Event>,
    tickets: HashMap<Uuid, Ticket>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for InMemoryEventStore {
    fn save_event(&mut self, mut event: Event) -> Result<Event, AppError> {
        let errors = event.validate();
        if !errors.is_empty() {
            warn!(event_id = ?event.id, failures = errors.len(), "Rejected invalid event");
            return Err(AppError::Validation(errors));
        }

        let id = *event.id.get_or_insert_with(Uuid::new_v4);
        self.events.insert(id, event.clone());
        info!(event_id = %id, "Saved event");

        Ok(event)
    }

    fn find_event(&self, id: Uuid) -> Option<&Event> {
        self.events.get(&id)
    }

    fn events_owned_by(&self, owner_id: Uuid) -> Vec<&Event> {
        self.events
            .values()
            .filter(|event| event.owner_id == Some(owner_id))
            .collect()
    }

    fn add_ticket(&mut self, ticket: Ticket) -> Result<(), AppError> {
        if !self.events.contains_key(&ticket.event_id) {
            return Err(AppError::NotFound(format!(
                "Event with id '{}' was not found",
                ticket.event_id
            )));
        }

        self.tickets.insert(ticket.id, ticket);
        Ok(())
    }

    fn tickets_for(&self, event_id: Uuid) -> Vec<&Ticket> {
        self.tickets
            .values()
            .filter(|ticket| ticket.event_id == event_id)
            .collect()
    }

    fn destroy_event(&mut self, id: Uuid) -> Result<Vec<Ticket>, AppError> {
        if self.events.remove(&id).is_none() {
            return Err(AppError::NotFound(format!(
                "Event with id '{}' was not found",
                id
            )));
        }

        let ticket_ids: Vec<Uuid> = self
            .tickets
            .values()
            .filter(|ticket| ticket.event_id == id)
            .map(|ticket| ticket.id)
            .collect();
        let destroyed: Vec<Ticket> = ticket_ids
            .iter()
            .filter_map(|ticket_id| self.tickets.remove(ticket_id))
            .collect();

        info!(event_id = %id, tickets = destroyed.len(), "Destroyed event");
        Ok(destroyed)
    }
}
