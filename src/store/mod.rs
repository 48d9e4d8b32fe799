use std::sync::Arc;

use async_trait::async_trait;

pub mod memory;
pub mod postgres;

use crate::models::{Event, NewEvent, NewVenue, Venue};
use crate::utils::error::AppError;

/// Persistent collection of events. Read models come back with the owning
/// venue's name and the ticket count attached.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Event>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Event>, AppError>;

    /// Inserts and returns the assigned id.
    async fn insert(&self, event: NewEvent) -> Result<i32, AppError>;

    /// Full replace of the row's user-editable fields.
    async fn update(&self, id: i32, event: NewEvent) -> Result<(), AppError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;
}

/// Persistent collection of venues.
#[async_trait]
pub trait VenueStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Venue>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Venue>, AppError>;

    async fn find_by_address(&self, address: &str) -> Result<Option<Venue>, AppError>;

    /// Inserts and returns the assigned id.
    async fn insert(&self, venue: NewVenue) -> Result<i32, AppError>;

    /// Deletes the venue. Events owned by the venue (and their tickets) go
    /// with it through the adapter's cascade.
    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;
}

/// Shared handler state. Stores are injected here at startup; there is no
/// global registry.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventStore>,
    pub venues: Arc<dyn VenueStore>,
}
