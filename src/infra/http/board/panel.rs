use crate::{
    application::{
        board::{BoardState, PendingAction},
        error::HttpError,
        stream::PatchStream,
    },
    presentation::{
        board::{
            BoardPanelTemplate, BoardPanelView, PaginationView, PostFormMode, PostFormView,
            PostRowView, PromptView,
        },
        views::render_fragment,
    },
};

use super::selectors::BOARD_PANEL;

pub(super) fn build_panel_view(board: &BoardState) -> BoardPanelView {
    let rows = board
        .visible_page()
        .iter()
        .map(|post| PostRowView {
            id: post.id,
            title: post.title.clone(),
        })
        .collect();

    let create_form = board.create_session().map(|session| PostFormView {
        mode: PostFormMode::Create,
        title: session.draft.title.clone(),
        body: session.draft.body.clone(),
    });

    let edit_form = board.edit_session().map(|session| PostFormView {
        mode: PostFormMode::Edit(session.post.id),
        title: session.draft.title.clone(),
        body: session.draft.body.clone(),
    });

    let prompt = board.prompt().map(|request| PromptView {
        title: request.title.to_string(),
        message: request.message.to_string(),
        confirm_action: Some(confirm_route(request.action)),
    });

    BoardPanelView {
        rows,
        create_form,
        edit_form,
        pagination: PaginationView {
            current_page: board.current_page(),
            page_count: board.page_count(),
            can_go_previous: board.can_go_previous(),
            can_go_next: board.can_go_next(),
        },
        prompt,
    }
}

fn confirm_route(action: PendingAction) -> &'static str {
    match action {
        PendingAction::Delete { .. } => "/prompt/confirm",
    }
}

/// Render the panel and wrap it in a datastar patch replacing the live one.
pub(super) fn panel_patch(board: &BoardState, source: &'static str) -> Result<PatchStream, HttpError> {
    let content = build_panel_view(board);
    let html = render_fragment(BoardPanelTemplate { content }, source)?;
    Ok(PatchStream::replace(BOARD_PANEL, html))
}
