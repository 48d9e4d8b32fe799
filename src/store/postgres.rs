use async_trait::async_trait;
use sqlx::PgPool;

use super::{EventStore, VenueStore};
use crate::models::{Event, NewEvent, NewVenue, Venue};
use crate::utils::error::AppError;

const SELECT_EVENTS: &str = "\
    SELECT e.id, e.name, e.starts_at, e.sales_started, e.venue_id, \
           v.name AS venue_name, \
           (SELECT COUNT(*) FROM tickets t WHERE t.event_id = e.id) AS ticket_count \
    FROM events e \
    JOIN venues v ON v.id = e.venue_id \
    ORDER BY e.id";

const SELECT_EVENT_BY_ID: &str = "\
    SELECT e.id, e.name, e.starts_at, e.sales_started, e.venue_id, \
           v.name AS venue_name, \
           (SELECT COUNT(*) FROM tickets t WHERE t.event_id = e.id) AS ticket_count \
    FROM events e \
    JOIN venues v ON v.id = e.venue_id \
    WHERE e.id = $1";

pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn find_all(&self) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(SELECT_EVENTS)
            .fetch_all(&self.pool)
            .await?;

        Ok(events)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>(SELECT_EVENT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    async fn insert(&self, event: NewEvent) -> Result<i32, AppError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO events (name, starts_at, sales_started, venue_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&event.name)
        .bind(event.starts_at)
        .bind(event.sales_started)
        .bind(event.venue_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i32, event: NewEvent) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE events \
             SET name = $1, starts_at = $2, sales_started = $3, venue_id = $4 \
             WHERE id = $5",
        )
        .bind(&event.name)
        .bind(event.starts_at)
        .bind(event.sales_started)
        .bind(event.venue_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

pub struct PgVenueStore {
    pool: PgPool,
}

impl PgVenueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueStore for PgVenueStore {
    async fn find_all(&self) -> Result<Vec<Venue>, AppError> {
        let venues =
            sqlx::query_as::<_, Venue>("SELECT id, name, address, seats FROM venues ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(venues)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Venue>, AppError> {
        let venue =
            sqlx::query_as::<_, Venue>("SELECT id, name, address, seats FROM venues WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(venue)
    }

    async fn find_by_address(&self, address: &str) -> Result<Option<Venue>, AppError> {
        let venue = sqlx::query_as::<_, Venue>(
            "SELECT id, name, address, seats FROM venues WHERE address = $1",
        )
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(venue)
    }

    async fn insert(&self, venue: NewVenue) -> Result<i32, AppError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO venues (name, address, seats) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&venue.name)
        .bind(&venue.address)
        .bind(venue.seats)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        // Explicit cascade: tickets of owned events, then the events, then
        // the venue, in one transaction.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM tickets \
             WHERE event_id IN (SELECT id FROM events WHERE venue_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM events WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
