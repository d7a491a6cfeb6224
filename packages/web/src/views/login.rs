//! Login page view.

use dioxus::prelude::*;
use ui::views::LoginPageView;

use crate::use_config;

/// Login page component.
///
/// A successful sign-in leaves the app with a full page load, the way a
/// plain form would, so the home page reads the profile from storage.
#[component]
pub fn Login() -> Element {
    let config = use_config();

    let on_navigate = move |destination: String| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&destination) {
                    tracing::error!("Failed to navigate to {}: {:?}", destination, e);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!("Page navigation to {} needs a browser", destination);
        }
    };

    rsx! {
        LoginPageView {
            config: config.login,
            on_navigate: on_navigate,
        }
    }
}
