use serde::Deserialize;

use crate::domain::posts::PostDraft;

/// Fields submitted by the create and edit forms.
#[derive(Debug, Deserialize)]
pub(crate) struct PostDraftForm {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) body: String,
}

impl From<PostDraftForm> for PostDraft {
    fn from(form: PostDraftForm) -> Self {
        PostDraft::new(form.title, form.body)
    }
}
