//! Pure state transitions for the board.
//!
//! Nothing here talks to the remote service. The service layer reads a ticket
//! or a pending action out of the state, performs the remote call without
//! holding any lock, and then applies the matching `apply_*` transition.

use crate::domain::posts::{self, Post, PostDraft, PostId};

use super::types::{BoardError, ConfirmationRequest, PageDirection, PendingAction, SessionTicket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSession {
    pub ticket: SessionTicket,
    pub draft: PostDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub ticket: SessionTicket,
    pub post: Post,
    pub draft: PostDraft,
}

#[derive(Debug, Clone)]
pub struct BoardState {
    posts: Vec<Post>,
    create: Option<CreateSession>,
    edit: Option<EditSession>,
    current_page: usize,
    prompt: Option<ConfirmationRequest>,
    last_ticket: u64,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            create: None,
            edit: None,
            current_page: 1,
            prompt: None,
            last_ticket: 0,
        }
    }

    fn issue_ticket(&mut self) -> SessionTicket {
        self.last_ticket += 1;
        SessionTicket(self.last_ticket)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn create_session(&self) -> Option<&CreateSession> {
        self.create.as_ref()
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn prompt(&self) -> Option<&ConfirmationRequest> {
        self.prompt.as_ref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        posts::page_count(self.posts.len())
    }

    pub fn visible_page(&self) -> &[Post] {
        posts::page_slice(&self.posts, self.current_page)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Replace the collection with a freshly fetched list, in server order.
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn paginate(&mut self, direction: PageDirection) {
        self.current_page = match direction {
            PageDirection::Previous => self.current_page.saturating_sub(1).max(1),
            PageDirection::Next => (self.current_page + 1).min(self.page_count().max(1)),
        };
    }

    /// Open the create form. An already open form keeps its draft.
    pub fn open_create(&mut self) {
        if self.create.is_none() {
            let ticket = self.issue_ticket();
            self.create = Some(CreateSession {
                ticket,
                draft: PostDraft::default(),
            });
        }
    }

    pub fn cancel_create(&mut self) {
        self.create = None;
    }

    pub fn begin_create(&self) -> Result<SessionTicket, BoardError> {
        self.create
            .as_ref()
            .map(|session| session.ticket)
            .ok_or(BoardError::CreateNotOpen)
    }

    pub fn apply_created(&mut self, ticket: SessionTicket, post: Post) {
        self.posts.insert(0, post);
        if self
            .create
            .as_ref()
            .is_some_and(|session| session.ticket == ticket)
        {
            self.create = None;
        }
    }

    pub fn apply_create_failed(&mut self, ticket: SessionTicket, draft: PostDraft) {
        if let Some(session) = self
            .create
            .as_mut()
            .filter(|session| session.ticket == ticket)
        {
            session.draft = draft;
        }
    }

    /// Start editing `id`, replacing any edit already in progress.
    ///
    /// The create form is left as it is; both panels may be open at once.
    pub fn start_edit(&mut self, id: PostId) -> Result<(), BoardError> {
        let post = self
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(BoardError::UnknownPost(id))?;
        let ticket = self.issue_ticket();
        self.edit = Some(EditSession {
            ticket,
            draft: PostDraft::from(&post),
            post,
        });
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn begin_edit(&self, id: PostId) -> Result<SessionTicket, BoardError> {
        match &self.edit {
            Some(session) if session.post.id == id => Ok(session.ticket),
            _ => Err(BoardError::EditNotOpen(id)),
        }
    }

    /// Swap the updated post into place. Position and order are unchanged.
    pub fn apply_edited(&mut self, ticket: SessionTicket, id: PostId, post: Post) {
        for slot in self.posts.iter_mut().filter(|slot| slot.id == id) {
            *slot = post.clone();
        }
        if self
            .edit
            .as_ref()
            .is_some_and(|session| session.ticket == ticket)
        {
            self.edit = None;
        }
    }

    pub fn apply_edit_failed(&mut self, ticket: SessionTicket, draft: PostDraft) {
        if let Some(session) = self
            .edit
            .as_mut()
            .filter(|session| session.ticket == ticket)
        {
            session.draft = draft;
        }
    }

    pub fn request_delete(&mut self, id: PostId) {
        let ticket = self.issue_ticket();
        self.prompt = Some(ConfirmationRequest::delete(ticket, id));
    }

    pub fn pending_action(&self) -> Result<(SessionTicket, PendingAction), BoardError> {
        self.prompt
            .as_ref()
            .map(|request| (request.ticket, request.action))
            .ok_or(BoardError::NothingPending)
    }

    pub fn apply_deleted(&mut self, ticket: SessionTicket, id: PostId) {
        self.posts.retain(|post| post.id != id);
        if self
            .prompt
            .as_ref()
            .is_some_and(|request| request.ticket == ticket)
        {
            self.prompt = None;
        }
    }

    pub fn close_prompt(&mut self) {
        self.prompt = None;
    }
}
