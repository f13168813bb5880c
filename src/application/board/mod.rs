//! The post board: collection, pagination and create/edit/delete orchestration.

mod service;
mod state;
pub mod types;

pub use service::PostBoardService;
pub use state::{BoardState, CreateSession, EditSession};
pub use types::{
    BoardError, ConfirmationRequest, DELETE_PROMPT_MESSAGE, DELETE_PROMPT_TITLE, PageDirection,
    PendingAction, RemoteOutcome, SessionTicket,
};
