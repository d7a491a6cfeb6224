//! This crate contains all shared UI for the workspace.

mod repo;
pub use repo::{load_config, make_profiles, make_store};

pub mod views;

mod auth;
pub use auth::{use_stored_profile, ProfileState, SignOutButton};

mod login_form;
pub use login_form::LoginForm;

mod profile_card;
pub use profile_card::ProfileCard;
