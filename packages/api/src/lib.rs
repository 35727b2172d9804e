//! # API crate: REST access to the blog backend
//!
//! The blog backend is an external JSON server exposing a single collection:
//!
//! | Request | Body | Response |
//! |---------|------|----------|
//! | `GET /blogs` | (none) | array of posts |
//! | `POST /blogs` | post without `id` | created post with its assigned `id` |
//! | `PUT /blogs/{id}` | full post | saved post |
//! | `DELETE /blogs/{id}` | (none) | ignored |
//!
//! [`HttpBackend`] implements [`store::BlogBackend`] for that contract with
//! `reqwest`, which compiles to `fetch` on WASM and to a native client on desktop.
//! Every non-2xx status is reported as [`store::BackendError::Status`]; bodies that
//! do not parse are reported as [`store::BackendError::Decode`].

mod client;
pub use client::HttpBackend;

pub use store::{BackendError, BlogBackend, BlogConfig, NewPost, Post, PostId};
