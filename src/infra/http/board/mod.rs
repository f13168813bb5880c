mod forms;
mod handlers;
mod panel;
mod selectors;
mod state;

pub use state::WebState;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::middleware::{log_responses, set_request_context};

pub fn build_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handlers::board_page))
        .route("/posts", get(handlers::board_page))
        .route("/posts/panel", post(handlers::board_panel))
        .route("/posts/new", post(handlers::board_create_open))
        .route("/posts/new/cancel", post(handlers::board_create_cancel))
        .route("/posts/create", post(handlers::board_create))
        .route("/posts/edit/cancel", post(handlers::board_edit_cancel))
        .route("/posts/{id}/edit", post(handlers::board_edit_start))
        .route("/posts/{id}/update", post(handlers::board_update))
        .route("/posts/{id}/delete", post(handlers::board_delete_request))
        .route("/prompt/confirm", post(handlers::board_prompt_confirm))
        .route("/prompt/close", post(handlers::board_prompt_close))
        .route("/pagination/previous", post(handlers::board_page_previous))
        .route("/pagination/next", post(handlers::board_page_next))
        .route("/_health", get(super::health))
        .fallback(super::fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}
