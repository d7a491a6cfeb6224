//! Signed-in profile state and hooks for the UI.

use dioxus::prelude::*;
use store::UserProfile;

use crate::repo::make_profiles;

/// The stored profile as seen by a page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub loading: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile: None,
            loading: true,
        }
    }
}

impl ProfileState {
    /// The read finished and found no profile.
    pub fn is_signed_out(&self) -> bool {
        !self.loading && self.profile.is_none()
    }
}

/// Load the stored profile once on mount.
/// Returns a signal that flips `loading` off when the read completes.
pub fn use_stored_profile() -> Signal<ProfileState> {
    let mut state = use_signal(ProfileState::default);

    let _ = use_resource(move || async move {
        let profile = make_profiles().load().await;
        state.set(ProfileState {
            profile,
            loading: false,
        });
    });

    state
}

/// Button that forgets the stored profile.
#[component]
pub fn SignOutButton(
    on_signed_out: EventHandler<()>,
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let onclick = move |_| async move {
        make_profiles().clear().await;
        tracing::info!("Signed out");
        on_signed_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_is_not_signed_out() {
        let state = ProfileState::default();
        assert!(state.loading);
        assert!(!state.is_signed_out());
    }

    #[test]
    fn test_missing_profile_is_signed_out() {
        let state = ProfileState {
            profile: None,
            loading: false,
        };
        assert!(state.is_signed_out());
    }

    #[test]
    fn test_stored_profile_is_signed_in() {
        let state = ProfileState {
            profile: Some(UserProfile::demo()),
            loading: false,
        };
        assert!(!state.is_signed_out());
    }
}
