use std::sync::Arc;

use crate::{application::board::PostBoardService, presentation::board::ShellChrome};

#[derive(Clone)]
pub struct WebState {
    pub board: Arc<PostBoardService>,
    pub chrome: ShellChrome,
}

impl WebState {
    pub fn new(board: Arc<PostBoardService>, chrome: ShellChrome) -> Self {
        Self { board, chrome }
    }
}
