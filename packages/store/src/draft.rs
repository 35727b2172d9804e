//! Editor draft: the in-progress fields of a post before it is sent to the backend.

use thiserror::Error;

use crate::models::{CodeSections, NewPost, Post, PostId, Tags};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,
    #[error("content is required")]
    MissingContent,
}

/// Form state bound to the post editor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub tags: Tags,
    pub code_sections: CodeSections,
}

/// A validated draft, ready for the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(NewPost),
    Update(Post),
}

impl Submission {
    /// Identifier of the post being updated, `None` for a create.
    pub fn id(&self) -> Option<&PostId> {
        match self {
            Submission::Create(_) => None,
            Submission::Update(post) => Some(&post.id),
        }
    }
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate every field from an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            tags: post.tags.clone(),
            code_sections: post.code_sections.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.content.trim().is_empty() {
            return Err(DraftError::MissingContent);
        }
        Ok(())
    }

    /// Commit the whole tag input, wherever the cursor was when Enter or `,` was pressed.
    pub fn commit_tag(&mut self, input: &str) -> bool {
        self.tags.insert(input)
    }

    /// Commit every complete comma-separated piece of pasted text.
    ///
    /// Returns the trailing remainder, which stays in the input box.
    pub fn absorb_tag_input<'a>(&mut self, raw: &'a str) -> &'a str {
        let (complete, rest) = split_tag_input(raw);
        for tag in complete {
            self.tags.insert(tag);
        }
        rest
    }

    /// Merge the draft with the record being edited, if any.
    ///
    /// Editing keeps the existing `id` and `date`; creating stamps `today`.
    pub fn submit(self, existing: Option<&Post>, today: &str) -> Result<Submission, DraftError> {
        self.validate()?;
        let submission = match existing {
            Some(post) => Submission::Update(Post {
                id: post.id.clone(),
                title: self.title,
                content: self.content,
                tags: self.tags,
                code_sections: self.code_sections,
                date: post.date.clone(),
            }),
            None => Submission::Create(NewPost {
                title: self.title,
                content: self.content,
                tags: self.tags,
                code_sections: self.code_sections,
                date: today.to_string(),
            }),
        };
        Ok(submission)
    }
}

/// Split raw tag-input text on commas.
///
/// Returns the complete pieces (everything before the last comma) and the
/// remainder that should stay in the input box.
pub fn split_tag_input(raw: &str) -> (Vec<&str>, &str) {
    match raw.rsplit_once(',') {
        Some((complete, rest)) => (complete.split(',').collect(), rest),
        None => (Vec::new(), raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Post {
        Post {
            id: PostId::Number(7),
            title: "Old".into(),
            content: "old body".into(),
            tags: ["a", "b"].into_iter().collect(),
            code_sections: vec!["let x = 1;".to_string()].into(),
            date: "3/4/2023".into(),
        }
    }

    #[test]
    fn test_blank_title_or_content_rejected() {
        let mut draft = PostDraft::new();
        draft.content = "body".into();
        assert_eq!(draft.validate(), Err(DraftError::MissingTitle));

        draft.title = "  ".into();
        assert_eq!(draft.validate(), Err(DraftError::MissingTitle));

        draft.title = "T".into();
        draft.content = "\n".into();
        assert_eq!(draft.clone().submit(None, "1/1/2024"), Err(DraftError::MissingContent));
    }

    #[test]
    fn test_create_stamps_today() {
        let mut draft = PostDraft::new();
        draft.title = "B".into();
        draft.content = "c".into();
        draft.tags.insert("rust");
        draft.code_sections.push_empty();

        let Submission::Create(body) = draft.submit(None, "5/6/2024").unwrap() else {
            panic!("expected a create");
        };
        assert_eq!(body.date, "5/6/2024");
        assert_eq!(body.tags.iter().collect::<Vec<_>>(), vec!["rust"]);
        assert_eq!(body.code_sections.len(), 1);
    }

    #[test]
    fn test_edit_preserves_id_and_date() {
        let post = existing();
        let mut draft = PostDraft::from_post(&post);
        assert_eq!(draft.title, "Old");
        assert_eq!(draft.tags, post.tags);
        assert_eq!(draft.code_sections, post.code_sections);

        draft.title = "New".into();
        draft.tags.remove("a");
        let submission = draft.submit(Some(&post), "9/9/2099").unwrap();
        assert_eq!(submission.id(), Some(&PostId::Number(7)));

        let Submission::Update(updated) = submission else {
            panic!("expected an update");
        };
        assert_eq!(updated.date, "3/4/2023");
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "old body");
        assert_eq!(updated.tags.iter().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_comma_commits_whole_input() {
        // "ru|st" with the cursor mid-word: the comma key commits all of it.
        let mut draft = PostDraft::new();
        assert!(draft.commit_tag(" rust "));
        assert!(!draft.commit_tag("rust"));
        assert!(!draft.commit_tag(""));
        assert_eq!(draft.tags.iter().collect::<Vec<_>>(), vec!["rust"]);
    }

    #[test]
    fn test_pasted_tags_keep_remainder() {
        let mut draft = PostDraft::new();
        assert_eq!(draft.absorb_tag_input("web, rust,,web,dio"), "dio");
        assert_eq!(draft.tags.iter().collect::<Vec<_>>(), vec!["web", "rust"]);
        assert_eq!(draft.absorb_tag_input("plain"), "plain");
        assert_eq!(draft.tags.len(), 2);
    }

    #[test]
    fn test_split_tag_input() {
        assert_eq!(split_tag_input("rust"), (vec![], "rust"));
        assert_eq!(split_tag_input("rust,"), (vec!["rust"], ""));
        assert_eq!(split_tag_input("a, b,c"), (vec!["a", " b"], "c"));
        assert_eq!(split_tag_input(","), (vec![""], ""));
    }
}
