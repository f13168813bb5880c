use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, OnceCell};
use tracing::{error, info};

use crate::application::repos::PostsRepo;
use crate::domain::posts::{PostDraft, PostId};

use super::state::BoardState;
use super::types::{BoardError, PageDirection, PendingAction, RemoteOutcome};

/// Owns the board state and runs each operation against the remote service.
///
/// The state lock is never held across a remote call; responses are applied
/// in whatever order they resolve.
pub struct PostBoardService {
    repo: Arc<dyn PostsRepo>,
    state: Mutex<BoardState>,
    mounted: OnceCell<RemoteOutcome>,
}

impl PostBoardService {
    pub fn new(repo: Arc<dyn PostsRepo>) -> Self {
        Self {
            repo,
            state: Mutex::new(BoardState::new()),
            mounted: OnceCell::new(),
        }
    }

    /// Load the collection the first time the board is shown.
    pub async fn mount(&self) -> RemoteOutcome {
        *self.mounted.get_or_init(|| self.load()).await
    }

    pub async fn load(&self) -> RemoteOutcome {
        match self.repo.list_posts().await {
            Ok(posts) => {
                info!(
                    target = "postboard::board::load",
                    count = posts.len(),
                    "loaded posts"
                );
                self.state.lock().await.replace_posts(posts);
                RemoteOutcome::Applied
            }
            Err(err) => {
                error!(
                    target = "postboard::board::load",
                    error = %err,
                    "failed to fetch posts"
                );
                RemoteOutcome::Failed
            }
        }
    }

    pub async fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().await
    }

    pub async fn open_create(&self) {
        self.state.lock().await.open_create();
    }

    pub async fn cancel_create(&self) {
        self.state.lock().await.cancel_create();
    }

    pub async fn create(&self, draft: PostDraft) -> Result<RemoteOutcome, BoardError> {
        let ticket = self.state.lock().await.begin_create()?;

        match self.repo.create_post(&draft).await {
            Ok(post) => {
                info!(
                    target = "postboard::board::create",
                    id = post.id,
                    "created post"
                );
                self.state.lock().await.apply_created(ticket, post);
                Ok(RemoteOutcome::Applied)
            }
            Err(err) => {
                error!(
                    target = "postboard::board::create",
                    error = %err,
                    "failed to create post"
                );
                self.state.lock().await.apply_create_failed(ticket, draft);
                Ok(RemoteOutcome::Failed)
            }
        }
    }

    pub async fn start_edit(&self, id: PostId) -> Result<(), BoardError> {
        self.state.lock().await.start_edit(id)
    }

    pub async fn cancel_edit(&self) {
        self.state.lock().await.cancel_edit();
    }

    pub async fn edit(&self, id: PostId, draft: PostDraft) -> Result<RemoteOutcome, BoardError> {
        let ticket = self.state.lock().await.begin_edit(id)?;

        match self.repo.update_post(id, &draft).await {
            Ok(post) => {
                info!(target = "postboard::board::edit", id, "updated post");
                self.state.lock().await.apply_edited(ticket, id, post);
                Ok(RemoteOutcome::Applied)
            }
            Err(err) => {
                error!(
                    target = "postboard::board::edit",
                    id,
                    error = %err,
                    "failed to update post"
                );
                self.state.lock().await.apply_edit_failed(ticket, draft);
                Ok(RemoteOutcome::Failed)
            }
        }
    }

    pub async fn request_delete(&self, id: PostId) {
        self.state.lock().await.request_delete(id);
    }

    /// Run the action behind the open confirmation prompt.
    ///
    /// On failure the prompt stays open until it is closed explicitly.
    pub async fn confirm(&self) -> Result<RemoteOutcome, BoardError> {
        let (ticket, action) = self.state.lock().await.pending_action()?;

        match action {
            PendingAction::Delete { target_id } => match self.repo.delete_post(target_id).await {
                Ok(()) => {
                    info!(
                        target = "postboard::board::delete",
                        id = target_id,
                        "deleted post"
                    );
                    self.state.lock().await.apply_deleted(ticket, target_id);
                    Ok(RemoteOutcome::Applied)
                }
                Err(err) => {
                    error!(
                        target = "postboard::board::delete",
                        id = target_id,
                        error = %err,
                        "failed to delete post"
                    );
                    Ok(RemoteOutcome::Failed)
                }
            },
        }
    }

    pub async fn close_prompt(&self) {
        self.state.lock().await.close_prompt();
    }

    pub async fn paginate(&self, direction: PageDirection) {
        self.state.lock().await.paginate(direction);
    }
}
