mod modal_overlay;
pub use modal_overlay::{CloseButton, ModalOverlay};

mod home;
pub use home::HomeView;
