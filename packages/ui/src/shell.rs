//! Application shell: owns the blog store and performs all network I/O.

use dioxus::prelude::*;
use api::HttpBackend;
use store::{BackendError, BlogConfig, BlogService, BlogStore, Change, Modal, PostId, Submission};

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
use crate::backend::{load_config, make_service};

/// Handles to the shared client state.
///
/// Provided via context by [`BlogProvider`]; all components reach it with [`use_blog`].
#[derive(Clone, Copy, PartialEq)]
pub struct Blog {
    pub store: Signal<BlogStore>,
    pub modal: Signal<Modal>,
    pub config: Signal<BlogConfig>,
    service: Signal<Result<BlogService<HttpBackend>, BackendError>>,
    log: Signal<ActivityLog>,
}

/// Consume the [`Blog`] handles from context.
pub fn use_blog() -> Blog {
    use_context::<Blog>()
}

impl Blog {
    /// Replace the store with the backend's collection.
    pub async fn load(self) {
        let mut log = self.log;
        let Some(service) = self.service() else {
            return;
        };
        log_activity(&mut log, LogLevel::Info, "Loading posts...");
        match service.load().await {
            Ok(change) => {
                self.apply(change);
                let count = self.store.peek().len();
                log_activity(&mut log, LogLevel::Success, &format!("Loaded {count} posts"));
            }
            Err(e) => {
                log_activity(&mut log, LogLevel::Error, &format!("Error fetching blogs: {e}"));
            }
        }
    }

    /// Send an editor submission; the store changes only once the backend answers.
    pub async fn submit(self, submission: Submission) {
        let mut log = self.log;
        let Some(service) = self.service() else {
            return;
        };
        let (verb, title) = match &submission {
            Submission::Create(post) => ("Created", post.title.clone()),
            Submission::Update(post) => ("Saved", post.title.clone()),
        };
        match service.submit(&submission).await {
            Ok(change) => {
                self.apply(change);
                log_activity(&mut log, LogLevel::Success, &format!("{verb} \"{title}\""));
            }
            Err(e) => {
                let action = if submission.id().is_some() { "updating" } else { "adding" };
                log_activity(&mut log, LogLevel::Error, &format!("Error {action} blog: {e}"));
            }
        }
    }

    pub async fn delete(self, id: PostId) {
        let mut log = self.log;
        let Some(service) = self.service() else {
            return;
        };
        match service.delete(&id).await {
            Ok(change) => {
                self.apply(change);
                log_activity(&mut log, LogLevel::Success, &format!("Deleted post {id}"));
            }
            Err(e) => {
                log_activity(&mut log, LogLevel::Error, &format!("Error deleting blog: {e}"));
            }
        }
    }

    /// A handle on the shared service; clones reuse its HTTP client.
    fn service(self) -> Option<BlogService<HttpBackend>> {
        let mut log = self.log;
        let service = self.service.peek().clone();
        match service {
            Ok(service) => Some(service),
            Err(e) => {
                tracing::error!("Backend unavailable: {}", e);
                log_activity(&mut log, LogLevel::Error, &format!("Backend unavailable: {e}"));
                None
            }
        }
    }

    fn apply(self, change: Change) {
        let mut store = self.store;
        let mut modal = self.modal;
        store.write().apply(change);
        modal.write().close_if_missing(&store.peek());
    }
}

/// Provider component that owns the store and loads it on mount.
///
/// Expects a `Signal<ActivityLog>` in context (provided by the platform `App`).
#[component]
pub fn BlogProvider(children: Element) -> Element {
    let config = use_signal(load_config);
    let service = use_signal(|| make_service(&config.peek()));
    let store = use_signal(BlogStore::new);
    let modal = use_signal(Modal::default);
    let log = use_activity_log();

    let blog = use_context_provider(|| Blog {
        store,
        modal,
        config,
        service,
        log,
    });

    // Fetch the collection once on mount
    let _loader = use_resource(move || async move {
        blog.load().await;
    });

    rsx! {
        {children}
    }
}
