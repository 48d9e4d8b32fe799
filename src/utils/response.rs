use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

/// A named server-rendered view: the view name plus the model the template
/// layer renders it with.
#[derive(Serialize)]
pub struct ViewResponse<T>
where
    T: Serialize,
{
    pub view: &'static str,
    pub model: T,
}

#[derive(Serialize)]
pub struct ErrorViewModel {
    pub code: String,
    pub message: String,
    pub redirect: String,
}

pub fn render<T>(view: &'static str, model: T) -> Response
where
    T: Serialize,
{
    (StatusCode::OK, Json(ViewResponse { view, model })).into_response()
}

/// Post/redirect/get after every successful mutation.
pub fn redirect_to(path: &str) -> Response {
    Redirect::to(path).into_response()
}

pub fn error_view(code: &str, message: String, redirect: String, status: StatusCode) -> Response {
    let body = ViewResponse {
        view: "error",
        model: ErrorViewModel {
            code: code.to_string(),
            message,
            redirect,
        },
    };

    (status, Json(body)).into_response()
}
