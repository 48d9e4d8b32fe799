use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::venue::Venue;
use super::FieldError;

/// Event read model. Rows come back joined with the owning venue's name and
/// the number of tickets sold against the event, which is everything the
/// guard rules need.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub sales_started: bool,
    pub venue_id: i32,
    pub venue_name: String,
    pub ticket_count: i64,
}

impl Event {
    pub fn has_tickets(&self) -> bool {
        self.ticket_count > 0
    }
}

/// Fields as submitted. Echoed back into the form view when validation
/// fails. `sales_started` is accepted from the wire but never honored on
/// creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventForm {
    #[serde(default)]
    pub name: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub venue_id: Option<i32>,
    #[serde(default)]
    pub sales_started: bool,
}

/// An event that passed field validation and is ready to persist.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub sales_started: bool,
    pub venue_id: i32,
}

impl EventForm {
    /// Checks the field constraints: name required and at most 100
    /// characters, a well-formed start time, and a venue reference that
    /// resolves to an existing venue. The caller resolves the reference and
    /// passes the result in.
    pub fn to_new_event(&self, venue: Option<&Venue>) -> Result<NewEvent, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name must be provided!"));
        } else if self.name.chars().count() > 100 {
            errors.push(FieldError::new("name", "Name must less than 100 characters!"));
        }

        if self.starts_at.is_none() {
            errors.push(FieldError::new("starts_at", "Event date must be provided!"));
        }

        match (self.venue_id, venue) {
            (None, _) => errors.push(FieldError::new("venue_id", "Venue must be provided!")),
            (Some(_), None) => errors.push(FieldError::new("venue_id", "Venue does not exist!")),
            (Some(_), Some(_)) => {}
        }

        match (self.starts_at, venue) {
            (Some(starts_at), Some(venue)) if errors.is_empty() => Ok(NewEvent {
                name: self.name.clone(),
                starts_at,
                sales_started: self.sales_started,
                venue_id: venue.id,
            }),
            _ => Err(errors),
        }
    }
}
