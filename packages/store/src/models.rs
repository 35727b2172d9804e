//! # Domain models for blog posts
//!
//! Defines the records exchanged with the blog backend and held in the
//! client-side [`crate::BlogStore`]. Every type is `Serialize + Deserialize` and
//! matches the backend's JSON shape:
//!
//! ```json
//! { "id": 1, "title": "A", "content": "hello", "tags": ["x"], "codeSections": [], "date": "1/1/2024" }
//! ```
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Post`] | A persisted post. Always carries the backend-assigned [`PostId`]. |
//! | [`NewPost`] | A post body that has not been persisted yet (no `id`). Sent on create. |
//! | [`PostId`] | Backend identifier. JSON servers hand out either numbers or strings, so both are accepted. |
//! | [`Tags`] | Insertion-ordered set of tag strings. Typed tags are trimmed and deduplicated; tags from the backend are kept verbatim, minus exact duplicates. |
//! | [`CodeSections`] | Ordered code blocks with stack discipline: append at the end, remove from the end. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of content characters shown on a gallery card.
pub const EXCERPT_CHARS: usize = 100;

/// Identifier assigned by the backend on creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{n}"),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PostId {
    fn from(n: u64) -> Self {
        PostId::Number(n)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        PostId::Text(s.to_string())
    }
}

/// A blog post as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub code_sections: CodeSections,
    /// Display date, set once at creation.
    #[serde(default)]
    pub date: String,
}

impl Post {
    /// First `max_chars` characters of the content, with an ellipsis when cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self.content.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.content[..cut]),
            None => self.content.clone(),
        }
    }
}

/// A post body without an identifier, sent to the backend on create.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub code_sections: CodeSections,
    #[serde(default)]
    pub date: String,
}

impl NewPost {
    /// Attach a backend-assigned identifier.
    pub fn with_id(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            code_sections: self.code_sections,
            date: self.date,
        }
    }
}

/// Insertion-ordered, duplicate-free list of tags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Vec<String>")]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag after trimming it. Returns `false` for blank or already present tags.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Remove a tag. Removing an absent tag is a no-op and returns `false`.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Tags::new();
        for tag in iter {
            tags.insert(tag.as_ref());
        }
        tags
    }
}

/// Backend records keep their tags verbatim; only exact duplicates are dropped.
impl From<Option<Vec<String>>> for Tags {
    fn from(raw: Option<Vec<String>>) -> Self {
        let mut tags = Tags::new();
        for tag in raw.unwrap_or_default() {
            if !tags.contains(&tag) {
                tags.0.push(tag);
            }
        }
        tags
    }
}

impl From<Tags> for Vec<String> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}

/// Code blocks attached to a post. Only the most recently added block can be removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Vec<String>")]
pub struct CodeSections(Vec<String>);

impl CodeSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty section.
    pub fn push_empty(&mut self) {
        self.0.push(String::new());
    }

    /// Drop the last section. No-op when there are none.
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Append when empty, otherwise drop the last section.
    pub fn toggle(&mut self) {
        if self.0.is_empty() {
            self.push_empty();
        } else {
            self.pop();
        }
    }

    /// Replace the text of an existing section. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, code: String) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = code;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for CodeSections {
    fn from(sections: Vec<String>) -> Self {
        Self(sections)
    }
}

impl From<Option<Vec<String>>> for CodeSections {
    fn from(raw: Option<Vec<String>>) -> Self {
        Self(raw.unwrap_or_default())
    }
}

impl From<CodeSections> for Vec<String> {
    fn from(sections: CodeSections) -> Self {
        sections.0
    }
}

/// Today's date in the `M/D/YYYY` display format used for new posts.
pub fn today_display() -> String {
    chrono::Local::now().format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post {
            id: PostId::Number(1),
            title: "A".into(),
            content: "hello".into(),
            tags: ["x"].into_iter().collect(),
            code_sections: CodeSections::new(),
            date: "1/1/24".into(),
        }
    }

    #[test]
    fn test_post_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "A",
                "content": "hello",
                "tags": ["x"],
                "codeSections": [],
                "date": "1/1/24",
            })
        );
    }

    #[test]
    fn test_new_post_has_no_id() {
        let body = NewPost {
            title: "B".into(),
            content: "c".into(),
            ..NewPost::default()
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["codeSections"], serde_json::json!([]));
    }

    #[test]
    fn test_string_ids_and_missing_fields() {
        let post: Post =
            serde_json::from_str(r#"{"id":"a1b2","title":"T","content":"C","tags":null}"#).unwrap();
        assert_eq!(post.id, PostId::Text("a1b2".into()));
        assert_eq!(post.id.to_string(), "a1b2");
        assert!(post.tags.is_empty());
        assert!(post.code_sections.is_empty());
        assert_eq!(post.date, "");
    }

    #[test]
    fn test_duplicate_tags_from_backend_are_dropped() {
        let post: Post = serde_json::from_str(
            r#"{"id":3,"title":"T","content":"C","tags":["rust","web","rust"],"codeSections":["fn main() {}"],"date":"2/2/2024"}"#,
        )
        .unwrap();
        assert_eq!(post.tags.iter().collect::<Vec<_>>(), vec!["rust", "web"]);
        assert_eq!(post.code_sections.get(0), Some("fn main() {}"));
    }

    #[test]
    fn test_backend_tags_survive_round_trip() {
        let post: Post = serde_json::from_str(
            r#"{"id":4,"title":"T","content":"C","tags":[" spaced ","","x"," spaced "],"codeSections":[],"date":"2/2/2024"}"#,
        )
        .unwrap();
        assert_eq!(post.tags.iter().collect::<Vec<_>>(), vec![" spaced ", "", "x"]);

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["tags"], serde_json::json!([" spaced ", "", "x"]));
    }

    #[test]
    fn test_tags_dedup_and_remove() {
        let mut tags = Tags::new();
        assert!(tags.insert("rust"));
        assert!(!tags.insert("rust"));
        assert!(!tags.insert("  rust "));
        assert!(!tags.insert("   "));
        assert!(tags.insert("web"));
        assert_eq!(tags.len(), 2);

        assert!(!tags.remove("missing"));
        assert_eq!(tags.len(), 2);
        assert!(tags.remove("rust"));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["web"]);
    }

    #[test]
    fn test_code_sections_stack() {
        let mut sections = CodeSections::new();
        assert_eq!(sections.pop(), None);

        for _ in 0..3 {
            sections.push_empty();
        }
        assert!(sections.set(2, "last".into()));
        assert!(!sections.set(5, "nowhere".into()));
        assert_eq!(sections.pop().as_deref(), Some("last"));
        sections.pop();
        sections.pop();
        assert!(sections.is_empty());
        assert_eq!(sections.pop(), None);
    }

    #[test]
    fn test_code_sections_toggle() {
        let mut sections = CodeSections::new();
        sections.toggle();
        assert_eq!(sections.len(), 1);
        sections.toggle();
        assert!(sections.is_empty());
    }

    #[test]
    fn test_excerpt() {
        let mut post = sample();
        assert_eq!(post.excerpt(EXCERPT_CHARS), "hello");

        post.content = "é".repeat(150);
        let excerpt = post.excerpt(EXCERPT_CHARS);
        assert_eq!(excerpt.chars().count(), EXCERPT_CHARS + 3);
        assert!(excerpt.ends_with("..."));

        post.content = "x".repeat(EXCERPT_CHARS);
        assert_eq!(post.excerpt(EXCERPT_CHARS), post.content);
    }

    #[test]
    fn test_today_display_format() {
        let today = today_display();
        let parts: Vec<_> = today.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 4);
        assert!(!parts[0].starts_with('0'));
    }
}
