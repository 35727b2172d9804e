use std::sync::{Arc, Mutex};

use crate::models::{NewPost, Post, PostId};
use crate::repo::{BackendError, BlogBackend};

/// In-memory BlogBackend for testing. Assigns sequential numeric ids.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    posts: Arc<Mutex<Vec<Post>>>,
    next_id: Arc<Mutex<u64>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with existing records.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next = posts
            .iter()
            .filter_map(|p| match p.id {
                PostId::Number(n) => Some(n),
                PostId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            posts: Arc::new(Mutex::new(posts)),
            next_id: Arc::new(Mutex::new(next)),
        }
    }

    /// Snapshot of what the backend currently holds.
    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }
}

impl BlogBackend for MemoryBackend {
    async fn list(&self) -> Result<Vec<Post>, BackendError> {
        Ok(self.posts())
    }

    async fn create(&self, post: &NewPost) -> Result<Post, BackendError> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            PostId::Number(*next)
        };
        let saved = post.clone().with_id(id);
        self.posts.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, id: &PostId, post: &Post) -> Result<Post, BackendError> {
        let mut posts = self.posts.lock().unwrap();
        let slot = posts
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| BackendError::NotFound(id.clone()))?;
        *slot = Post {
            id: id.clone(),
            ..post.clone()
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: &PostId) -> Result<(), BackendError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| &p.id != id);
        if posts.len() == before {
            return Err(BackendError::NotFound(id.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog_store::{BlogStore, Change};
    use crate::draft::{PostDraft, Submission};
    use crate::modal::Modal;
    use crate::repo::BlogService;

    fn seeded() -> Post {
        Post {
            id: PostId::Number(1),
            title: "A".into(),
            content: "hello".into(),
            tags: ["x"].into_iter().collect(),
            code_sections: Default::default(),
            date: "1/1/24".into(),
        }
    }

    /// Backend whose every call fails with a server error.
    struct BrokenBackend;

    impl BlogBackend for BrokenBackend {
        async fn list(&self) -> Result<Vec<Post>, BackendError> {
            Err(BackendError::Transport("connection refused".into()))
        }

        async fn create(&self, _post: &NewPost) -> Result<Post, BackendError> {
            Err(BackendError::Status { status: 500, body: String::new() })
        }

        async fn update(&self, _id: &PostId, _post: &Post) -> Result<Post, BackendError> {
            Err(BackendError::Status { status: 500, body: String::new() })
        }

        async fn delete(&self, _id: &PostId) -> Result<(), BackendError> {
            Err(BackendError::Status { status: 500, body: String::new() })
        }
    }

    async fn loaded_store(service: &BlogService<MemoryBackend>) -> BlogStore {
        let mut store = BlogStore::new();
        store.apply(service.load().await.unwrap());
        store
    }

    #[tokio::test]
    async fn test_create_appends_backend_record() {
        let service = BlogService::new(MemoryBackend::with_posts(vec![seeded()]));
        let mut store = loaded_store(&service).await;

        let mut draft = PostDraft::new();
        draft.title = "B".into();
        draft.content = "c".into();
        draft.tags.insert("rust");
        draft.code_sections.push_empty();
        let submission = draft.submit(None, "6/1/2024").unwrap();

        let change = service.submit(&submission).await.unwrap();
        let Change::Created(ref saved) = change else {
            panic!("expected a create");
        };
        assert_eq!(saved.id, PostId::Number(2));
        let saved = saved.clone();
        store.apply(change);

        assert_eq!(store.len(), 2);
        assert_eq!(store.posts()[0], seeded());
        assert_eq!(store.posts()[1], saved);
        assert_eq!(saved.tags.iter().collect::<Vec<_>>(), vec!["rust"]);
        assert_eq!(saved.code_sections.len(), 1);
        assert_eq!(saved.date, "6/1/2024");
    }

    #[tokio::test]
    async fn test_edit_preserves_id_and_date() {
        let service = BlogService::new(MemoryBackend::with_posts(vec![seeded()]));
        let mut store = loaded_store(&service).await;

        let original = store.get(&PostId::Number(1)).unwrap().clone();
        let mut draft = PostDraft::from_post(&original);
        draft.content = "hello again".into();
        draft.tags.insert("y");
        let submission = draft.submit(Some(&original), "12/12/2030").unwrap();

        store.apply(service.submit(&submission).await.unwrap());

        let edited = store.get(&PostId::Number(1)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(edited.date, "1/1/24");
        assert_eq!(edited.content, "hello again");
        assert_eq!(edited.tags.iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[tokio::test]
    async fn test_delete_after_confirmation() {
        let backend = MemoryBackend::with_posts(vec![seeded()]);
        let service = BlogService::new(backend.clone());
        let mut store = loaded_store(&service).await;
        let mut modal = Modal::Idle;

        modal.open_post(PostId::Number(1));
        modal.request_delete();
        // The first click only asks for confirmation.
        assert_eq!(store.len(), 1);

        let id = modal.confirm_delete().unwrap();
        store.apply(service.delete(&id).await.unwrap());

        assert!(store.is_empty());
        assert!(backend.posts().is_empty());
        assert_eq!(modal, Modal::Idle);
        assert_eq!(modal.selected(), None);
    }

    #[tokio::test]
    async fn test_cancelled_delete_keeps_post() {
        let service = BlogService::new(MemoryBackend::with_posts(vec![seeded()]));
        let store = loaded_store(&service).await;
        let mut modal = Modal::Idle;

        modal.open_post(PostId::Number(1));
        modal.request_delete();
        modal.cancel_delete();

        assert_eq!(modal, Modal::Viewing(PostId::Number(1)));
        assert_eq!(store.posts(), &[seeded()]);
    }

    #[tokio::test]
    async fn test_failures_leave_store_unchanged() {
        let service = BlogService::new(BrokenBackend);
        let mut store = BlogStore::new();
        store.append(seeded());

        assert!(service.load().await.is_err());
        let create = Submission::Create(NewPost {
            title: "B".into(),
            content: "c".into(),
            ..NewPost::default()
        });
        assert!(service.submit(&create).await.is_err());
        assert!(service.update(&seeded()).await.is_err());
        assert_eq!(
            service.delete(&PostId::Number(1)).await,
            Err(BackendError::Status { status: 500, body: String::new() })
        );

        assert_eq!(store.posts(), &[seeded()]);
    }

    #[tokio::test]
    async fn test_cloned_service_shares_backend() {
        let service = BlogService::new(MemoryBackend::with_posts(vec![seeded()]));
        let handle = service.clone();

        let create = Submission::Create(NewPost {
            title: "B".into(),
            content: "c".into(),
            ..NewPost::default()
        });
        handle.submit(&create).await.unwrap();
        handle.delete(&PostId::Number(1)).await.unwrap();

        let store = loaded_store(&service).await;
        assert_eq!(store.len(), 1);
        assert_eq!(store.posts()[0].id, PostId::Number(2));
    }

    #[tokio::test]
    async fn test_memory_backend_rejects_unknown_ids() {
        let backend = MemoryBackend::new();
        assert_eq!(
            backend.delete(&PostId::Number(4)).await,
            Err(BackendError::NotFound(PostId::Number(4)))
        );
        assert!(backend.update(&PostId::Number(4), &seeded()).await.is_err());
    }
}
