//! In-memory store backing the test suite. Implements both store traits
//! over one mutex-guarded relation set so cascades behave like the
//! database adapter.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{EventStore, VenueStore};
use crate::models::{Event, NewEvent, NewVenue, Venue};
use crate::utils::error::AppError;

struct StoredEvent {
    id: i32,
    name: String,
    starts_at: chrono::DateTime<chrono::Utc>,
    sales_started: bool,
    venue_id: i32,
}

#[derive(Default)]
struct Inner {
    venues: Vec<Venue>,
    events: Vec<StoredEvent>,
    /// Event ids with a sold ticket, one entry per ticket.
    tickets: Vec<i32>,
    last_venue_id: i32,
    last_event_id: i32,
}

impl Inner {
    fn read_model(&self, event: &StoredEvent) -> Option<Event> {
        let venue = self.venues.iter().find(|v| v.id == event.venue_id)?;
        let ticket_count = self.tickets.iter().filter(|&&e| e == event.id).count() as i64;

        Some(Event {
            id: event.id,
            name: event.name.clone(),
            starts_at: event.starts_at,
            sales_started: event.sales_started,
            venue_id: event.venue_id,
            venue_name: venue.name.clone(),
            ticket_count,
        })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sold ticket against an event, as the external ticketing
    /// system would.
    pub fn add_ticket(&self, event_id: i32) {
        self.lock().tickets.push(event_id);
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("store mutex poisoned")
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Event>, AppError> {
        let inner = self.lock();
        Ok(inner
            .events
            .iter()
            .filter_map(|e| inner.read_model(e))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        let inner = self.lock();
        Ok(inner
            .events
            .iter()
            .find(|e| e.id == id)
            .and_then(|e| inner.read_model(e)))
    }

    async fn insert(&self, event: NewEvent) -> Result<i32, AppError> {
        let mut inner = self.lock();
        inner.last_event_id += 1;
        let id = inner.last_event_id;

        inner.events.push(StoredEvent {
            id,
            name: event.name,
            starts_at: event.starts_at,
            sales_started: event.sales_started,
            venue_id: event.venue_id,
        });

        Ok(id)
    }

    async fn update(&self, id: i32, event: NewEvent) -> Result<(), AppError> {
        let mut inner = self.lock();
        if let Some(stored) = inner.events.iter_mut().find(|e| e.id == id) {
            stored.name = event.name;
            stored.starts_at = event.starts_at;
            stored.sales_started = event.sales_started;
            stored.venue_id = event.venue_id;
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        let mut inner = self.lock();
        inner.events.retain(|e| e.id != id);
        inner.tickets.retain(|&e| e != id);

        Ok(())
    }
}

#[async_trait]
impl VenueStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Venue>, AppError> {
        Ok(self.lock().venues.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Venue>, AppError> {
        Ok(self.lock().venues.iter().find(|v| v.id == id).cloned())
    }

    async fn find_by_address(&self, address: &str) -> Result<Option<Venue>, AppError> {
        Ok(self
            .lock()
            .venues
            .iter()
            .find(|v| v.address == address)
            .cloned())
    }

    async fn insert(&self, venue: NewVenue) -> Result<i32, AppError> {
        let mut inner = self.lock();
        inner.last_venue_id += 1;
        let id = inner.last_venue_id;

        inner.venues.push(Venue {
            id,
            name: venue.name,
            address: venue.address,
            seats: venue.seats,
        });

        Ok(id)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        let mut inner = self.lock();
        let owned: Vec<i32> = inner
            .events
            .iter()
            .filter(|e| e.venue_id == id)
            .map(|e| e.id)
            .collect();

        inner.tickets.retain(|e| !owned.contains(e));
        inner.events.retain(|e| e.venue_id != id);
        inner.venues.retain(|v| v.id != id);

        Ok(())
    }
}
