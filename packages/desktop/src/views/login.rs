//! Login page view for desktop.

use dioxus::prelude::*;
use ui::views::LoginPageView;

use crate::{route_for, use_config};

/// Login page component for desktop.
#[component]
pub fn Login() -> Element {
    let config = use_config();
    let nav = use_navigator();

    let on_navigate = move |destination: String| match route_for(&destination) {
        Some(route) => {
            nav.replace(route);
        }
        None => tracing::error!("No page for destination {:?}", destination),
    };

    rsx! {
        LoginPageView {
            config: config.login,
            on_navigate: on_navigate,
        }
    }
}
