use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::posts::PostId;

pub const DELETE_PROMPT_TITLE: &str = "Eliminar Post";
pub const DELETE_PROMPT_MESSAGE: &str = "¿Estás seguro de que deseas eliminar este post?";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("the create form is not open")]
    CreateNotOpen,
    #[error("post `{0}` is not being edited")]
    EditNotOpen(PostId),
    #[error("no action is awaiting confirmation")]
    NothingPending,
    #[error("post `{0}` is not in the collection")]
    UnknownPost(PostId),
}

/// Identifies one create session, edit session or confirmation request.
///
/// Tickets increase monotonically; a remote response only closes the session
/// whose ticket it was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionTicket(pub(crate) u64);

/// An operation captured when a destructive action was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingAction {
    Delete { target_id: PostId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub ticket: SessionTicket,
    pub title: &'static str,
    pub message: &'static str,
    pub action: PendingAction,
}

impl ConfirmationRequest {
    pub(crate) fn delete(ticket: SessionTicket, target_id: PostId) -> Self {
        Self {
            ticket,
            title: DELETE_PROMPT_TITLE,
            message: DELETE_PROMPT_MESSAGE,
            action: PendingAction::Delete { target_id },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

/// Whether a remote call behind a board operation succeeded.
///
/// Failures are logged and never surfaced further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOutcome {
    Applied,
    Failed,
}

impl RemoteOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, RemoteOutcome::Applied)
    }
}
