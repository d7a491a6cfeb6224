//! Home page view.

use dioxus::prelude::*;
use ui::views::HomeView;

use crate::Route;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
