use serde::Serialize;

pub mod event;
pub mod venue;

pub use event::{Event, EventForm, NewEvent};
pub use venue::{NewVenue, Venue, VenueForm};

/// One field-level validation failure, rendered back into the offending
/// form view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}
