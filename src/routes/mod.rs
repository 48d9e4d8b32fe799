use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::with_security_headers;
use crate::handlers::{events, health_check, venues};
use crate::store::AppState;

pub fn create_routes(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(events::index))
        .route("/events", get(events::index))
        .route("/events/index", get(events::index))
        .route("/events/create", get(events::create_form).post(events::create))
        .route("/events/update/:id", get(events::update_form).post(events::update))
        .route("/events/delete/:id", get(events::delete))
        .route("/venues", get(venues::index))
        .route("/venues/index", get(venues::index))
        .route("/venues/create", get(venues::create_form).post(venues::create))
        .route("/venues/delete/:id", get(venues::delete))
        .route("/health", get(health_check));

    with_security_headers(router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
