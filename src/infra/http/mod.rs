mod board;
mod middleware;

pub use board::{WebState, build_router};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::error::ErrorReport;

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn fallback() -> Response {
    let mut response = (StatusCode::NOT_FOUND, "Not found").into_response();
    ErrorReport::from_message(
        "infra::http::fallback",
        StatusCode::NOT_FOUND,
        "no route matched",
    )
    .attach(&mut response);
    response
}
