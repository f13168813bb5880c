//! Repository traits describing the remote posts collaborator.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::posts::{Post, PostDraft, PostId};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("invalid remote url: {0}")]
    Url(#[from] url::ParseError),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("remote returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode remote response: {0}")]
    Decode(String),
}

impl RepoError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}

/// CRUD access to the remote posts resource.
///
/// Network failures and rejected requests are both reported as `RepoError`;
/// callers do not distinguish between them.
#[async_trait]
pub trait PostsRepo: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError>;

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, RepoError>;

    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, RepoError>;

    async fn delete_post(&self, id: PostId) -> Result<(), RepoError>;
}
