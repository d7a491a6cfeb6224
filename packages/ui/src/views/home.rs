//! Home page: the signed-in student's profile.

use dioxus::prelude::*;

use crate::{use_stored_profile, ProfileCard, SignOutButton};

/// Home page shared by every platform.
///
/// Reads the profile written at sign-in. Without one there is nobody to
/// show, so `on_signed_out` fires as soon as the read completes.
#[component]
pub fn HomeView(on_signed_out: EventHandler<()>) -> Element {
    let state = use_stored_profile();

    use_effect(move || {
        if state().is_signed_out() {
            tracing::info!("No stored profile, returning to login");
            on_signed_out.call(());
        }
    });

    if state().loading {
        return rsx! {
            p {
                style: "padding: 2rem; color: #787774;",
                "Loading..."
            }
        };
    }

    // Shown for the one frame before the redirect lands
    let Some(profile) = state().profile else {
        return rsx! {
            p {
                style: "padding: 2rem; color: #787774;",
                "You are not signed in."
            }
        };
    };

    let first_name = profile.first_name().to_string();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 1.5rem; padding: 2rem;",

            h1 {
                style: "color: #37352f; font-weight: 700; font-size: 1.5rem;",
                "Hi, {first_name}!"
            }

            ProfileCard { profile: profile }

            SignOutButton {
                class: "login-btn",
                on_signed_out: on_signed_out,
            }
        }
    }
}
