use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::FieldError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub seats: i32,
}

/// Fields as submitted. Echoed back into the form view when validation
/// fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub seats: Option<i32>,
}

/// A venue that passed field validation and is ready to persist.
#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub address: String,
    pub seats: i32,
}

impl VenueForm {
    /// Checks the field constraints: name required and at most 100
    /// characters, address required and at most 255 characters, seats
    /// between 1 and 100 inclusive.
    pub fn to_new_venue(&self) -> Result<NewVenue, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name must be provided!"));
        } else if self.name.chars().count() > 100 {
            errors.push(FieldError::new("name", "Name must less than 100 characters!"));
        }

        if self.address.trim().is_empty() {
            errors.push(FieldError::new("address", "Address must be provided!"));
        } else if self.address.chars().count() > 255 {
            errors.push(FieldError::new(
                "address",
                "Address must less than 255 characters!",
            ));
        }

        let seats = self.seats.unwrap_or(0);
        if seats < 1 {
            errors.push(FieldError::new("seats", "Number of least must at least 1"));
        } else if seats > 100 {
            errors.push(FieldError::new("seats", "Number of least must less than 100"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewVenue {
            name: self.name.clone(),
            address: self.address.clone(),
            seats,
        })
    }
}
