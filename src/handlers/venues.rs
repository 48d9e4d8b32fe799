use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use serde::Serialize;

use crate::models::{FieldError, Venue, VenueForm};
use crate::store::{AppState, VenueStore};
use crate::utils::error::AppError;
use crate::utils::response::{redirect_to, render};

const VIEW_INDEX: &str = "venues/index";
const VIEW_CREATE: &str = "venues/create";
const INDEX_REDIRECT: &str = "/venues/index";

#[derive(Serialize)]
struct IndexView {
    venues: Vec<Venue>,
}

#[derive(Serialize)]
struct FormView {
    venue: VenueForm,
    errors: Vec<FieldError>,
}

fn venue_not_found(id: i32) -> AppError {
    AppError::not_found(
        id,
        format!("Venue with id {{{id}}} not found!"),
        INDEX_REDIRECT,
    )
}

pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let venues = state.venues.find_all().await?;

    Ok(render(VIEW_INDEX, IndexView { venues }))
}

pub async fn create_form() -> Response {
    render(
        VIEW_CREATE,
        FormView {
            venue: VenueForm::default(),
            errors: Vec::new(),
        },
    )
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Response, AppError> {
    let mut errors = Vec::new();
    let new_venue = match form.to_new_venue() {
        Ok(venue) => Some(venue),
        Err(field_errors) => {
            errors = field_errors;
            None
        }
    };

    // Uniqueness is checked against the store so a duplicate shows up as a
    // field error instead of a bare constraint violation.
    if !form.address.is_empty() && state.venues.find_by_address(&form.address).await?.is_some() {
        errors.push(FieldError::new("address", "Address already in use!"));
    }

    match new_venue {
        Some(venue) if errors.is_empty() => {
            state.venues.insert(venue).await?;
            Ok(redirect_to(INDEX_REDIRECT))
        }
        _ => Ok(render(VIEW_CREATE, FormView { venue: form, errors })),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    state
        .venues
        .find_by_id(id)
        .await?
        .ok_or_else(|| venue_not_found(id))?;

    // Owned events (and their tickets) go with the venue through the
    // adapter's cascade.
    state.venues.delete_by_id(id).await?;

    Ok(redirect_to(INDEX_REDIRECT))
}
