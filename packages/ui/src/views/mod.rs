mod modal_overlay;
pub use modal_overlay::{AcknowledgeDialog, ModalOverlay};

mod login;
pub use login::LoginPageView;

mod home;
pub use home::HomeView;
