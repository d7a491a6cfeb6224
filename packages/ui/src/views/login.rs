//! Login page: heading, the login form, and its styles.

use dioxus::prelude::*;
use store::LoginConfig;

use crate::LoginForm;

/// Login page shared by every platform.
#[component]
pub fn LoginPageView(config: LoginConfig, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "login-container",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; background: #ffffff;",

            h1 {
                style: "margin-bottom: 0.5rem; color: #37352f; font-weight: 700; font-size: 1.75rem;",
                "Welcome back"
            }

            p {
                style: "margin-bottom: 2rem; color: #787774; font-size: 0.9375rem;",
                "Sign in with your campus email"
            }

            LoginForm {
                config: config,
                on_navigate: on_navigate,
            }
        }

        style {
            r#"
            .login-form {{
                display: flex;
                flex-direction: column;
                gap: 0.75rem;
                width: 100%;
                max-width: 320px;
            }}

            .login-input {{
                padding: 0.625rem 0.75rem;
                border: 1px solid #d3d1cb;
                border-radius: 4px;
                font-size: 0.9375rem;
            }}

            .login-error {{
                padding: 0.625rem;
                background: #fdebec;
                border: 1px solid #f5c2c7;
                border-radius: 4px;
                color: #d44c47;
                font-size: 0.8125rem;
            }}

            .login-btn {{
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 0.625rem 1.25rem;
                border: none;
                border-radius: 4px;
                font-size: 0.9375rem;
                font-weight: 500;
                cursor: pointer;
                background-color: #2383e2;
                color: white;
                transition: background-color 0.15s;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
            }}

            .login-btn:hover:not(:disabled) {{
                background-color: #0b6bcb;
            }}

            .login-btn:disabled {{
                opacity: 0.5;
                cursor: not-allowed;
            }}
            "#
        }
    }
}
