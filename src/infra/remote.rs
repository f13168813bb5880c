//! HTTP adapter for the remote posts resource.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use serde::{Serialize, de::DeserializeOwned};

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::posts::{Post, PostDraft, PostId};

#[derive(Clone, Debug)]
pub struct RemotePostsRepo {
    client: Client,
    base: Url,
}

impl RemotePostsRepo {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RepoError> {
        let base = normalize_base(Url::parse(base_url)?);
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()
            .map_err(RepoError::transport)?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("postboard/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, RepoError> {
        self.base.join(path).map_err(RepoError::Url)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, RepoError> {
        let mut req = self.client.request(method, self.url(path)?);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(RepoError::transport)?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(RepoError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(resp)
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, RepoError> {
        let resp = self.send(method, path, body).await?;
        let bytes = resp.bytes().await.map_err(RepoError::transport)?;
        serde_json::from_slice(&bytes).map_err(|e| RepoError::Decode(e.to_string()))
    }
}

/// Make sure relative joins append to the base path instead of replacing its
/// last segment.
fn normalize_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    base.set_fragment(None);
    base
}

fn post_path(id: PostId) -> String {
    format!("posts/{id}")
}

#[async_trait]
impl PostsRepo for RemotePostsRepo {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        self.request(Method::GET, "posts", None::<&()>).await
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, RepoError> {
        self.request(Method::POST, "posts", Some(draft)).await
    }

    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, RepoError> {
        self.request(Method::PUT, &post_path(id), Some(draft)).await
    }

    async fn delete_post(&self, id: PostId) -> Result<(), RepoError> {
        self.send(Method::DELETE, &post_path(id), None::<&()>)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_without_trailing_slash_keeps_its_path() {
        let repo = RemotePostsRepo::new("https://example.com/api", Duration::from_secs(1))
            .expect("valid base");
        assert_eq!(
            repo.url("posts/3").expect("join").as_str(),
            "https://example.com/api/posts/3"
        );
    }

    #[test]
    fn bare_host_joins_at_root() {
        let repo = RemotePostsRepo::new("https://jsonplaceholder.typicode.com", Duration::from_secs(1))
            .expect("valid base");
        assert_eq!(
            repo.url("posts").expect("join").as_str(),
            "https://jsonplaceholder.typicode.com/posts"
        );
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = RemotePostsRepo::new("not a url", Duration::from_secs(1))
            .expect_err("relative url");
        assert!(matches!(err, RepoError::Url(_)));
    }
}
