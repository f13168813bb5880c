use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{
    application::{
        board::{BoardError, PageDirection, RemoteOutcome},
        error::HttpError,
    },
    domain::posts::PostId,
    presentation::{board::BoardPageTemplate, views::render_template_response},
};

use super::{
    WebState,
    forms::PostDraftForm,
    panel::{build_panel_view, panel_patch},
};

/// Re-render the panel from the current state.
async fn respond_with_panel(state: &WebState, source: &'static str) -> Response {
    let board = state.board.state().await;
    match panel_patch(&board, source) {
        Ok(stream) => stream.into_response(),
        Err(err) => err.into_response(),
    }
}

async fn respond_after(
    state: &WebState,
    source: &'static str,
    result: Result<(), BoardError>,
) -> Response {
    match result {
        Ok(()) => respond_with_panel(state, source).await,
        Err(err) => HttpError::from_board(source, err).into_response(),
    }
}

async fn respond_after_remote(
    state: &WebState,
    source: &'static str,
    result: Result<RemoteOutcome, BoardError>,
) -> Response {
    match result {
        Ok(outcome) => {
            debug!(
                target = "postboard::http::board",
                source,
                applied = outcome.is_applied(),
                "remote action settled"
            );
            respond_with_panel(state, source).await
        }
        Err(err) => HttpError::from_board(source, err).into_response(),
    }
}

pub(super) async fn board_page(State(state): State<WebState>) -> Response {
    state.board.mount().await;

    let content = {
        let board = state.board.state().await;
        build_panel_view(&board)
    };
    let template = BoardPageTemplate {
        chrome: state.chrome.clone(),
        content,
    };
    render_template_response(template, StatusCode::OK)
}

pub(super) async fn board_panel(State(state): State<WebState>) -> Response {
    respond_with_panel(&state, "infra::http::board_panel").await
}

pub(super) async fn board_create_open(State(state): State<WebState>) -> Response {
    state.board.open_create().await;
    respond_with_panel(&state, "infra::http::board_create_open").await
}

pub(super) async fn board_create_cancel(State(state): State<WebState>) -> Response {
    state.board.cancel_create().await;
    respond_with_panel(&state, "infra::http::board_create_cancel").await
}

pub(super) async fn board_create(
    State(state): State<WebState>,
    Form(form): Form<PostDraftForm>,
) -> Response {
    let result = state.board.create(form.into()).await;
    respond_after_remote(&state, "infra::http::board_create", result).await
}

pub(super) async fn board_edit_start(
    State(state): State<WebState>,
    Path(id): Path<PostId>,
) -> Response {
    let result = state.board.start_edit(id).await;
    respond_after(&state, "infra::http::board_edit_start", result).await
}

pub(super) async fn board_edit_cancel(State(state): State<WebState>) -> Response {
    state.board.cancel_edit().await;
    respond_with_panel(&state, "infra::http::board_edit_cancel").await
}

pub(super) async fn board_update(
    State(state): State<WebState>,
    Path(id): Path<PostId>,
    Form(form): Form<PostDraftForm>,
) -> Response {
    let result = state.board.edit(id, form.into()).await;
    respond_after_remote(&state, "infra::http::board_update", result).await
}

pub(super) async fn board_delete_request(
    State(state): State<WebState>,
    Path(id): Path<PostId>,
) -> Response {
    state.board.request_delete(id).await;
    respond_with_panel(&state, "infra::http::board_delete_request").await
}

pub(super) async fn board_prompt_confirm(State(state): State<WebState>) -> Response {
    let result = state.board.confirm().await;
    respond_after_remote(&state, "infra::http::board_prompt_confirm", result).await
}

pub(super) async fn board_prompt_close(State(state): State<WebState>) -> Response {
    state.board.close_prompt().await;
    respond_with_panel(&state, "infra::http::board_prompt_close").await
}

pub(super) async fn board_page_previous(State(state): State<WebState>) -> Response {
    state.board.paginate(PageDirection::Previous).await;
    respond_with_panel(&state, "infra::http::board_page_previous").await
}

pub(super) async fn board_page_next(State(state): State<WebState>) -> Response {
    state.board.paginate(PageDirection::Next).await;
    respond_with_panel(&state, "infra::http::board_page_next").await
}
