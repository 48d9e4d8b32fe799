use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use serde::Serialize;

use crate::models::{Event, EventForm, FieldError, Venue};
use crate::store::{AppState, EventStore, VenueStore};
use crate::utils::error::AppError;
use crate::utils::response::{redirect_to, render};

const VIEW_INDEX: &str = "events/index";
const VIEW_CREATE: &str = "events/create";
const VIEW_UPDATE: &str = "events/update";
const INDEX_REDIRECT: &str = "/events/index";

#[derive(Serialize)]
struct IndexView {
    events: Vec<Event>,
}

/// Form views carry the event being edited (or the echoed submission), the
/// venue selection list, and any field errors.
#[derive(Serialize)]
struct FormView<E>
where
    E: Serialize,
{
    event: E,
    venues: Vec<Venue>,
    errors: Vec<FieldError>,
}

fn event_not_found(id: i32) -> AppError {
    AppError::not_found(
        id,
        format!("Event with id {{{id}}} not found!"),
        INDEX_REDIRECT,
    )
}

async fn resolve_venue(state: &AppState, venue_id: Option<i32>) -> Result<Option<Venue>, AppError> {
    match venue_id {
        Some(id) => state.venues.find_by_id(id).await,
        None => Ok(None),
    }
}

pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = state.events.find_all().await?;

    Ok(render(VIEW_INDEX, IndexView { events }))
}

pub async fn create_form(State(state): State<AppState>) -> Result<Response, AppError> {
    let venues = state.venues.find_all().await?;

    Ok(render(
        VIEW_CREATE,
        FormView {
            event: EventForm::default(),
            venues,
            errors: Vec::new(),
        },
    ))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<EventForm>,
) -> Result<Response, AppError> {
    let venue = resolve_venue(&state, form.venue_id).await?;

    match form.to_new_event(venue.as_ref()) {
        Ok(mut event) => {
            // Sales never open at creation, whatever the form claims.
            event.sales_started = false;
            state.events.insert(event).await?;
            Ok(redirect_to(INDEX_REDIRECT))
        }
        Err(errors) => {
            let venues = state.venues.find_all().await?;
            Ok(render(
                VIEW_CREATE,
                FormView {
                    event: form,
                    venues,
                    errors,
                },
            ))
        }
    }
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let event = state
        .events
        .find_by_id(id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    let venues = state.venues.find_all().await?;

    Ok(render(
        VIEW_UPDATE,
        FormView {
            event,
            venues,
            errors: Vec::new(),
        },
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<EventForm>,
) -> Result<Response, AppError> {
    let existing = state
        .events
        .find_by_id(id)
        .await?
        .ok_or_else(|| event_not_found(id))?;

    let venue = resolve_venue(&state, form.venue_id).await?;

    // The venue-change guard runs before field validation and compares
    // venue NAMES, not ids.
    if let Some(venue) = &venue {
        if venue.name != existing.venue_name && existing.has_tickets() {
            return Err(AppError::conflict(
                "Event already has ticket sold, change of venue is not allowed",
                format!("/events/update/{id}"),
            ));
        }
    }

    match form.to_new_event(venue.as_ref()) {
        Ok(event) => {
            state.events.update(id, event).await?;
            Ok(redirect_to(INDEX_REDIRECT))
        }
        Err(errors) => {
            let venues = state.venues.find_all().await?;
            Ok(render(
                VIEW_UPDATE,
                FormView {
                    event: form,
                    venues,
                    errors,
                },
            ))
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let event = state
        .events
        .find_by_id(id)
        .await?
        .ok_or_else(|| event_not_found(id))?;

    if event.has_tickets() {
        return Err(AppError::conflict(
            "Event already has ticket sold, delete is not allowed! Please delete corresponding ticket(s) first",
            INDEX_REDIRECT,
        ));
    }

    state.events.delete_by_id(id).await?;

    Ok(redirect_to(INDEX_REDIRECT))
}
