//! Request and response shapes for the remote `/posts` resource.
//!
//! The remote service owns every post; these types only describe what travels
//! over the wire. Fields the board does not use (for example `userId`) are
//! ignored on decode.

use serde::{Deserialize, Serialize};

/// Server-assigned post identifier.
pub type PostId = i64;

/// A post as returned by `GET /posts`, `POST /posts` and `PUT /posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Create responses may omit the body.
    #[serde(default)]
    pub body: String,
}

/// Payload sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }
}
