//! # Backend access: the CRUD flow behind the application shell
//!
//! [`BlogService`] performs every network round-trip the client makes and turns
//! each acknowledged result into a [`Change`] for the [`crate::BlogStore`]. All
//! I/O goes through the [`BlogBackend`] trait, so the same flow runs against the
//! HTTP backend in the `api` crate or the in-memory [`crate::MemoryBackend`] used
//! by tests.
//!
//! | Method | Request | Change on success |
//! |--------|---------|-------------------|
//! | [`load`](BlogService::load) | `GET /blogs` | [`Change::Loaded`] |
//! | [`create`](BlogService::create) | `POST /blogs` | [`Change::Created`] |
//! | [`update`](BlogService::update) | `PUT /blogs/{id}` | [`Change::Updated`] |
//! | [`delete`](BlogService::delete) | `DELETE /blogs/{id}` | [`Change::Deleted`] |
//!
//! Failures are logged here through `tracing` and returned to the caller, which
//! leaves the store untouched. Nothing is retried and nothing is applied before
//! the backend answers.

use thiserror::Error;

use crate::blog_store::Change;
use crate::draft::Submission;
use crate::models::{NewPost, Post, PostId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("invalid backend URL: {0}")]
    Url(String),
    #[error("post {0} not found")]
    NotFound(PostId),
}

/// Async interface to the REST collection of posts.
pub trait BlogBackend {
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Post>, BackendError>>;
    fn create(
        &self,
        post: &NewPost,
    ) -> impl std::future::Future<Output = Result<Post, BackendError>>;
    fn update(
        &self,
        id: &PostId,
        post: &Post,
    ) -> impl std::future::Future<Output = Result<Post, BackendError>>;
    fn delete(&self, id: &PostId) -> impl std::future::Future<Output = Result<(), BackendError>>;
}

/// CRUD flow over a [`BlogBackend`].
///
/// Cloning shares the backend, so one service (and its connection pool) can be
/// built once and handed to every task.
#[derive(Clone)]
pub struct BlogService<B: BlogBackend> {
    backend: B,
}

impl<B: BlogBackend> BlogService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch the whole collection.
    pub async fn load(&self) -> Result<Change, BackendError> {
        match self.backend.list().await {
            Ok(posts) => {
                tracing::info!("Loaded {} posts", posts.len());
                Ok(Change::Loaded(posts))
            }
            Err(e) => {
                tracing::error!("Error fetching blogs: {}", e);
                Err(e)
            }
        }
    }

    pub async fn create(&self, post: &NewPost) -> Result<Change, BackendError> {
        match self.backend.create(post).await {
            Ok(saved) => {
                tracing::info!("Created post {}", saved.id);
                Ok(Change::Created(saved))
            }
            Err(e) => {
                tracing::error!("Error adding blog: {}", e);
                Err(e)
            }
        }
    }

    pub async fn update(&self, post: &Post) -> Result<Change, BackendError> {
        match self.backend.update(&post.id, post).await {
            Ok(saved) => {
                tracing::info!("Updated post {}", post.id);
                Ok(Change::Updated(post.id.clone(), saved))
            }
            Err(e) => {
                tracing::error!("Error updating blog {}: {}", post.id, e);
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: &PostId) -> Result<Change, BackendError> {
        match self.backend.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted post {}", id);
                Ok(Change::Deleted(id.clone()))
            }
            Err(e) => {
                tracing::error!("Error deleting blog {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Send an editor submission as a create or an update.
    pub async fn submit(&self, submission: &Submission) -> Result<Change, BackendError> {
        match submission {
            Submission::Create(post) => self.create(post).await,
            Submission::Update(post) => self.update(post).await,
        }
    }
}
