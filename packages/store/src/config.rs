//! # App configuration — `sweapp.toml`
//!
//! Defines the TOML configuration file read at startup (filename:
//! [`SweAppConfig::filename`] = `"sweapp.toml"`). It selects what a successful
//! login does and carries the constants of the simulated sign-in.
//!
//! ## Structure
//!
//! ```toml
//! [login]
//! terminal_action = "persist_and_navigate"   # or "acknowledge"
//! delay_ms = 600                             # simulated server delay
//! min_password_len = 8
//! destination = "home.html"                  # page opened after sign-in
//! acknowledgment = "It Works!"               # message for "acknowledge"
//! ```
//!
//! ## Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`SweAppConfig`] | Top-level config. Provides builder helpers, TOML (de)serialisation, and the canonical filename. |
//! | [`LoginConfig`] | Login section — every field has a serde default. |
//! | [`TerminalAction`] | What happens once the simulated delay elapses. |
//!
//! All structs implement `Default` with the production values, so a missing
//! or empty config file is equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `sweapp.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SweAppConfig {
    #[serde(default)]
    pub login: LoginConfig,
}

/// What the login form does after a valid submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalAction {
    /// Show a blocking acknowledgment and stay on the form.
    Acknowledge,
    /// Store the demo profile and navigate to the destination page.
    #[default]
    PersistAndNavigate,
}

/// Login form configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub terminal_action: TerminalAction,
    /// Simulated server delay in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
    /// Relative page opened after a persisted sign-in.
    #[serde(default = "default_destination")]
    pub destination: String,
    /// Message shown by [`TerminalAction::Acknowledge`].
    #[serde(default = "default_acknowledgment")]
    pub acknowledgment: String,
}

fn default_delay_ms() -> u64 {
    600
}

fn default_min_password_len() -> usize {
    8
}

fn default_destination() -> String {
    "home.html".to_string()
}

fn default_acknowledgment() -> String {
    "It Works!".to_string()
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            terminal_action: TerminalAction::default(),
            delay_ms: default_delay_ms(),
            min_password_len: default_min_password_len(),
            destination: default_destination(),
            acknowledgment: default_acknowledgment(),
        }
    }
}

impl LoginConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl SweAppConfig {
    /// Builder method to choose the terminal action.
    pub fn with_terminal_action(mut self, action: TerminalAction) -> Self {
        self.login.terminal_action = action;
        self
    }

    /// Builder method to set the simulated delay.
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.login.delay_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "sweapp.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
