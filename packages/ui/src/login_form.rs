use std::rc::Rc;

use dioxus::prelude::*;
use login::{Host, LoginHandler, LoginView};
use store::LoginConfig;

use crate::repo::make_store;
use crate::views::AcknowledgeDialog;

/// Error region and submit button, backed by component signals.
#[derive(Clone, Copy)]
struct FormSignals {
    error: Signal<Option<String>>,
    submitting: Signal<bool>,
}

impl LoginView for FormSignals {
    fn clear_error(&mut self) {
        self.error.set(None);
    }

    fn show_error(&mut self, message: &str) {
        self.error.set(Some(message.to_string()));
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.submitting.set(submitting);
    }
}

/// Acknowledgment and navigation for the form.
///
/// The browser gets a real `window.alert`; native builds show the message
/// in an [`AcknowledgeDialog`] instead.
#[derive(Clone, Copy)]
struct FormHost {
    acknowledgment: Signal<Option<String>>,
    on_navigate: EventHandler<String>,
}

impl Host for FormHost {
    fn acknowledge(&mut self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
                return;
            }
        }
        self.acknowledgment.set(Some(message.to_string()));
    }

    fn navigate(&mut self, destination: &str) {
        self.on_navigate.call(destination.to_string());
    }
}

/// Email/password login form.
///
/// Validation, the simulated delay and the terminal action are all handled
/// by [`LoginHandler`]; this component only wires its inputs and outputs to
/// the page. `on_navigate` receives the configured destination page.
#[component]
pub fn LoginForm(config: LoginConfig, on_navigate: EventHandler<String>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| Option::<String>::None);
    let submitting = use_signal(|| false);
    let mut acknowledgment = use_signal(|| Option::<String>::None);

    let handler = use_hook(|| Rc::new(LoginHandler::new(config.clone(), make_store())));
    let password_hint = format!("Password (min {} characters)", config.min_password_len);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let handler = handler.clone();
        spawn(async move {
            let mut view = FormSignals { error, submitting };
            let mut host = FormHost {
                acknowledgment,
                on_navigate,
            };
            handler
                .submit(&mut view, &mut host, &email(), &password())
                .await;
        });
    };

    rsx! {
        form {
            id: "loginForm",
            class: "login-form",
            onsubmit: handle_submit,

            input {
                class: "login-input",
                id: "email",
                name: "email",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            input {
                class: "login-input",
                id: "password",
                name: "password",
                r#type: "password",
                placeholder: "{password_hint}",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            if let Some(err) = error() {
                div {
                    id: "error",
                    class: "login-error",
                    "{err}"
                }
            }

            button {
                id: "loginBtn",
                class: "login-btn",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Signing in..." } else { "Sign in" }
            }
        }

        if let Some(message) = acknowledgment() {
            AcknowledgeDialog {
                message: message,
                on_close: move |_| acknowledgment.set(None),
            }
        }
    }
}
