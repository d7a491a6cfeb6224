use dioxus::prelude::*;

use store::SweAppConfig;
use views::{Home, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/home.html")]
    Home {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ui::load_config);

    rsx! {
        Router::<Route> {}
    }
}

/// App configuration provided by [`App`].
fn use_config() -> SweAppConfig {
    use_context::<SweAppConfig>()
}

/// Map a page path such as `"home.html"` onto an app route.
fn route_for(destination: &str) -> Option<Route> {
    format!("/{}", destination.trim_start_matches('/'))
        .parse::<Route>()
        .ok()
}
