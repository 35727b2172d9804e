//! Which overlay is open, and for which post.
//!
//! ```text
//! Idle ──open_post──▶ Viewing ──start_edit──▶ Editing ──finish_edit──▶ Viewing
//!  │                    │  ▲                     └──────close─────────▶ Idle
//!  │                    │  └──cancel_delete──┐
//!  │                    └──request_delete──▶ ConfirmingDelete ──confirm_delete──▶ Idle
//!  └──start_create──▶ Creating ──close──▶ Idle
//! ```
//!
//! Every transition returns whether it applied. Requests from the wrong state are ignored.

use crate::blog_store::BlogStore;
use crate::models::PostId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Idle,
    Viewing(PostId),
    Editing(PostId),
    Creating,
    ConfirmingDelete(PostId),
}

impl Modal {
    pub fn open_post(&mut self, id: PostId) -> bool {
        self.transition(|state| matches!(state, Modal::Idle).then_some(Modal::Viewing(id)))
    }

    pub fn start_create(&mut self) -> bool {
        self.transition(|state| matches!(state, Modal::Idle).then_some(Modal::Creating))
    }

    pub fn start_edit(&mut self) -> bool {
        self.transition(|state| match state {
            Modal::Viewing(id) => Some(Modal::Editing(id.clone())),
            _ => None,
        })
    }

    /// Leave the editor (saved or cancelled) and return to the viewer.
    pub fn finish_edit(&mut self) -> bool {
        self.transition(|state| match state {
            Modal::Editing(id) => Some(Modal::Viewing(id.clone())),
            _ => None,
        })
    }

    pub fn request_delete(&mut self) -> bool {
        self.transition(|state| match state {
            Modal::Viewing(id) => Some(Modal::ConfirmingDelete(id.clone())),
            _ => None,
        })
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.transition(|state| match state {
            Modal::ConfirmingDelete(id) => Some(Modal::Viewing(id.clone())),
            _ => None,
        })
    }

    /// Close the confirmation and the viewer. Returns the post to delete.
    pub fn confirm_delete(&mut self) -> Option<PostId> {
        match std::mem::take(self) {
            Modal::ConfirmingDelete(id) => Some(id),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Close whatever is open.
    pub fn close(&mut self) -> bool {
        !matches!(std::mem::take(self), Modal::Idle)
    }

    /// Close the overlays when their post is no longer in `store`.
    pub fn close_if_missing(&mut self, store: &BlogStore) -> bool {
        let missing = self.selected().is_some_and(|id| store.get(id).is_none());
        missing && self.close()
    }

    /// The post the open overlay refers to, if any.
    pub fn selected(&self) -> Option<&PostId> {
        match self {
            Modal::Viewing(id) | Modal::Editing(id) | Modal::ConfirmingDelete(id) => Some(id),
            Modal::Idle | Modal::Creating => None,
        }
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, Modal::Creating)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Modal::Editing(_))
    }

    pub fn is_confirming_delete(&self) -> bool {
        matches!(self, Modal::ConfirmingDelete(_))
    }

    fn transition(&mut self, next: impl FnOnce(&Modal) -> Option<Modal>) -> bool {
        match next(self) {
            Some(state) => {
                *self = state;
                true
            }
            None => false,
        }
    }
}
