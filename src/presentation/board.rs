//! View models for the post board.
//!
//! Views are plain data: handlers build them from the board state and the
//! templates under `templates/board/` turn them into markup.

use askama::Template;

use crate::domain::posts::PostId;

#[derive(Clone)]
pub struct ShellChrome {
    pub heading: String,
}

impl ShellChrome {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
        }
    }
}

#[derive(Clone)]
pub struct PostRowView {
    pub id: PostId,
    pub title: String,
}

#[derive(Clone)]
pub struct PaginationView {
    pub current_page: usize,
    pub page_count: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

/// Which remote operation a form submits to.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PostFormMode {
    Create,
    Edit(PostId),
}

#[derive(Clone)]
pub struct PostFormView {
    pub mode: PostFormMode,
    pub title: String,
    pub body: String,
}

impl PostFormView {
    pub fn heading(&self) -> &'static str {
        match self.mode {
            PostFormMode::Create => "Crear Nuevo Post",
            PostFormMode::Edit(_) => "Editar Post",
        }
    }

    pub fn submit_action(&self) -> String {
        match self.mode {
            PostFormMode::Create => "/posts/create".to_string(),
            PostFormMode::Edit(id) => format!("/posts/{id}/update"),
        }
    }

    pub fn cancel_action(&self) -> &'static str {
        match self.mode {
            PostFormMode::Create => "/posts/new/cancel",
            PostFormMode::Edit(_) => "/posts/edit/cancel",
        }
    }

    pub fn form_role(&self) -> &'static str {
        match self.mode {
            PostFormMode::Create => "create",
            PostFormMode::Edit(_) => "edit",
        }
    }
}

#[derive(Clone)]
pub struct PromptView {
    pub title: String,
    pub message: String,
    /// Route that runs the pending action; without one only "Cerrar" is offered.
    pub confirm_action: Option<&'static str>,
}

#[derive(Clone)]
pub struct BoardPanelView {
    pub rows: Vec<PostRowView>,
    pub create_form: Option<PostFormView>,
    pub edit_form: Option<PostFormView>,
    pub pagination: PaginationView,
    pub prompt: Option<PromptView>,
}

#[derive(Template)]
#[template(path = "board/page.html")]
pub struct BoardPageTemplate {
    pub chrome: ShellChrome,
    pub content: BoardPanelView,
}

#[derive(Template)]
#[template(path = "board/panel.html")]
pub struct BoardPanelTemplate {
    pub content: BoardPanelView,
}
