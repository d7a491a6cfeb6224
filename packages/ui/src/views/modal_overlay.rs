use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            style: "position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.3); z-index: 2000;",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                style: "background: #ffffff; border-radius: 8px; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15); max-width: 28rem; width: 100%; margin: 0 1rem; padding: 1.5rem;",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Modal stand-in for `window.alert`: a message and an OK button.
#[component]
pub fn AcknowledgeDialog(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_close,
            p {
                style: "margin: 0 0 1.25rem; color: #37352f; font-size: 0.9375rem;",
                "{message}"
            }
            div {
                style: "display: flex; justify-content: flex-end;",
                button {
                    class: "login-btn",
                    autofocus: true,
                    onclick: move |_| on_close.call(()),
                    "OK"
                }
            }
        }
    }
}
