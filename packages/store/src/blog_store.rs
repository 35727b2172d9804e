//! Client-side cache of the backend's post collection.

use crate::models::{Post, PostId};

/// A backend-acknowledged mutation to apply to the [`BlogStore`].
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    /// Full collection fetched; replaces local state.
    Loaded(Vec<Post>),
    /// New record returned by the backend, appended.
    Created(Post),
    /// Saved record returned by the backend, replacing the record with the requested id.
    Updated(PostId, Post),
    /// Record removed on the backend.
    Deleted(PostId),
}

/// Ordered in-memory list of posts mirroring the backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogStore {
    posts: Vec<Post>,
}

impl BlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, change: Change) {
        match change {
            Change::Loaded(posts) => self.replace_all(posts),
            Change::Created(post) => self.append(post),
            Change::Updated(id, post) => {
                self.replace(&id, post);
            }
            Change::Deleted(id) => {
                self.remove(&id);
            }
        }
    }

    pub fn replace_all(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn append(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Replace the record with the given id, keeping its position.
    pub fn replace(&mut self, id: &PostId, post: Post) -> bool {
        match self.posts.iter_mut().find(|p| &p.id == id) {
            Some(slot) => {
                *slot = post;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &PostId) -> Option<Post> {
        let index = self.posts.iter().position(|p| &p.id == id)?;
        Some(self.posts.remove(index))
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
