//! # Login form submission handler
//!
//! [`LoginHandler`] owns everything that happens between "the user pressed
//! Sign in" and the form either showing an error or leaving the page. The
//! page itself is injected through two small traits so the flow runs the
//! same against Dioxus signals, a browser, or a test recorder:
//!
//! | Trait | Supplies |
//! |-------|----------|
//! | [`LoginView`] | The form's error region and submit button. |
//! | [`Host`] | The environment around the form: a blocking acknowledgment and page navigation. |
//!
//! ## Flow
//!
//! 1. Hide the error region.
//! 2. Validate ([`LoginAttempt::validate`]). On failure show the message and stop.
//! 3. Disable the submit button and wait out the simulated server delay.
//! 4. Run the configured [`TerminalAction`]:
//!    - `Acknowledge` shows the acknowledgment and returns to idle.
//!    - `PersistAndNavigate` stores [`UserProfile::demo`] under `"user"` and
//!      navigates to the destination page. The handler is then finished for
//!      good; a browser would have unloaded the page.
//! 5. Re-enable the submit button.
//!
//! Submits that arrive while a previous one is still waiting, or after the
//! handler navigated away, are ignored.

use std::cell::Cell;

use store::{KeyValueStore, LoginConfig, ProfileRepository, TerminalAction, UserProfile};

use crate::attempt::LoginAttempt;
use crate::error::ValidationError;
use crate::timer::sleep;

/// The form controls the handler drives.
pub trait LoginView {
    fn clear_error(&mut self);
    fn show_error(&mut self, message: &str);
    fn set_submitting(&mut self, submitting: bool);
}

/// The environment hosting the form.
pub trait Host {
    /// Show a message and return once the user dismissed it.
    fn acknowledge(&mut self, message: &str);
    /// Leave the login page for `destination`.
    fn navigate(&mut self, destination: &str);
}

/// Where the handler is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Navigated,
}

/// Result of a single submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the message is on screen.
    Rejected(ValidationError),
    /// A submit was already in flight, or the page is gone.
    Ignored,
    Acknowledged,
    Navigated { destination: String },
}

/// Handles login form submissions.
///
/// Methods take `&self` so one handler can be shared with every spawned
/// submit task; the lifecycle lives in a [`Cell`], which keeps the handler
/// on a single thread, same as the UI it serves.
pub struct LoginHandler<S: KeyValueStore> {
    config: LoginConfig,
    profiles: ProfileRepository<S>,
    state: Cell<SubmitState>,
}

impl<S: KeyValueStore> LoginHandler<S> {
    pub fn new(config: LoginConfig, store: S) -> Self {
        Self {
            config,
            profiles: ProfileRepository::new(store),
            state: Cell::new(SubmitState::Idle),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    /// Process one form submission.
    pub async fn submit<V: LoginView, H: Host>(
        &self,
        view: &mut V,
        host: &mut H,
        email: &str,
        password: &str,
    ) -> SubmitOutcome {
        if self.state.get() != SubmitState::Idle {
            tracing::debug!(state = ?self.state.get(), "Ignoring login submit");
            return SubmitOutcome::Ignored;
        }

        view.clear_error();

        let attempt = LoginAttempt::from_fields(email, password);
        if let Err(err) = attempt.validate(self.config.min_password_len) {
            tracing::warn!("Login rejected: {}", err);
            view.show_error(&err.to_string());
            return SubmitOutcome::Rejected(err);
        }

        view.set_submitting(true);
        self.state.set(SubmitState::Submitting);
        tracing::debug!(delay_ms = self.config.delay_ms, "Simulating server delay");

        sleep(self.config.delay()).await;

        let outcome = match self.config.terminal_action {
            TerminalAction::Acknowledge => {
                host.acknowledge(&self.config.acknowledgment);
                self.state.set(SubmitState::Idle);
                SubmitOutcome::Acknowledged
            }
            TerminalAction::PersistAndNavigate => {
                if let Err(e) = self.profiles.save(&UserProfile::demo()).await {
                    tracing::error!("Failed to store user profile: {}", e);
                }
                host.navigate(&self.config.destination);
                self.state.set(SubmitState::Navigated);
                SubmitOutcome::Navigated {
                    destination: self.config.destination.clone(),
                }
            }
        };

        // Runs after navigation too; in a browser the page is gone by now.
        view.set_submitting(false);

        tracing::info!(outcome = ?outcome, "Login submitted");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use store::{MemoryStore, SweAppConfig, USER_KEY};
    use tokio::time::Instant;

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        ClearError,
        ShowError(String),
        Submitting(bool),
        Acknowledge(String),
        Navigate(String),
    }

    /// Records every call made by the handler, in order.
    #[derive(Clone, Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        fn push(&self, event: Event) {
            self.events.borrow_mut().push(event);
        }
    }

    impl LoginView for Recorder {
        fn clear_error(&mut self) {
            self.push(Event::ClearError);
        }

        fn show_error(&mut self, message: &str) {
            self.push(Event::ShowError(message.to_string()));
        }

        fn set_submitting(&mut self, submitting: bool) {
            self.push(Event::Submitting(submitting));
        }
    }

    impl Host for Recorder {
        fn acknowledge(&mut self, message: &str) {
            self.push(Event::Acknowledge(message.to_string()));
        }

        fn navigate(&mut self, destination: &str) {
            self.push(Event::Navigate(destination.to_string()));
        }
    }

    fn handler(action: TerminalAction, store: MemoryStore) -> LoginHandler<MemoryStore> {
        let config = SweAppConfig::default().with_terminal_action(action);
        LoginHandler::new(config.login, store)
    }

    async fn submit(
        handler: &LoginHandler<MemoryStore>,
        recorder: &Recorder,
        email: &str,
        password: &str,
    ) -> SubmitOutcome {
        let mut view = recorder.clone();
        let mut host = recorder.clone();
        handler.submit(&mut view, &mut host, email, password).await
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_fields_show_error() {
        let store = MemoryStore::new();
        let handler = handler(TerminalAction::PersistAndNavigate, store.clone());
        let recorder = Recorder::default();
        let start = Instant::now();

        let outcome = submit(&handler, &recorder, "", "").await;

        assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::MissingCredentials));
        assert_eq!(
            recorder.events(),
            vec![
                Event::ClearError,
                Event::ShowError("Please enter email and password.".to_string()),
            ]
        );
        // No delay, no storage
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert!(store.is_empty());
        assert_eq!(handler.state(), SubmitState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_password_shows_error() {
        let store = MemoryStore::new();
        let handler = handler(TerminalAction::PersistAndNavigate, store.clone());
        let recorder = Recorder::default();

        let outcome = submit(&handler, &recorder, "a@b.com", "short").await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::PasswordTooShort { min: 8 })
        );
        assert_eq!(
            recorder.events(),
            vec![
                Event::ClearError,
                Event::ShowError("Password must be at least 8 characters.".to_string()),
            ]
        );
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_invalid_submits_never_touch_storage() {
        let store = MemoryStore::new();
        let handler = handler(TerminalAction::PersistAndNavigate, store.clone());
        let recorder = Recorder::default();

        for (email, password) in [("", ""), ("a@b.com", ""), ("  ", "longenough"), ("a@b.com", "1234567")] {
            let outcome = submit(&handler, &recorder, email, password).await;
            assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        }

        assert!(store.is_empty());
        assert_eq!(handler.state(), SubmitState::Idle);
        assert!(!recorder.events().contains(&Event::Submitting(true)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_persist_and_navigate() {
        let store = MemoryStore::new();
        let handler = handler(TerminalAction::PersistAndNavigate, store.clone());
        let recorder = Recorder::default();
        let start = Instant::now();

        let outcome = submit(&handler, &recorder, "a@b.com", "longenough").await;

        assert_eq!(
            outcome,
            SubmitOutcome::Navigated {
                destination: "home.html".to_string()
            }
        );
        assert!(start.elapsed() >= Duration::from_millis(600));

        // Navigation happens before the button is re-enabled
        assert_eq!(
            recorder.events(),
            vec![
                Event::ClearError,
                Event::Submitting(true),
                Event::Navigate("home.html".to_string()),
                Event::Submitting(false),
            ]
        );

        let raw = store.get_item(USER_KEY).await.unwrap();
        let stored: UserProfile = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, UserProfile::demo());
        assert_eq!(handler.state(), SubmitState::Navigated);
    }

    #[tokio::test(start_paused = true)]
    async fn test_acknowledge() {
        let store = MemoryStore::new();
        let handler = handler(TerminalAction::Acknowledge, store.clone());
        let recorder = Recorder::default();
        let start = Instant::now();

        let outcome = submit(&handler, &recorder, "a@b.com", "longenough").await;

        assert_eq!(outcome, SubmitOutcome::Acknowledged);
        assert!(start.elapsed() >= Duration::from_millis(600));
        assert_eq!(
            recorder.events(),
            vec![
                Event::ClearError,
                Event::Submitting(true),
                Event::Acknowledge("It Works!".to_string()),
                Event::Submitting(false),
            ]
        );
        assert!(store.is_empty());

        // Back to idle: the form can be submitted again
        assert_eq!(handler.state(), SubmitState::Idle);
        let again = submit(&handler, &recorder, "a@b.com", "longenough").await;
        assert_eq!(again, SubmitOutcome::Acknowledged);
    }

    #[tokio::test(start_paused = true)]
    async fn test_button_disabled_during_delay() {
        let store = MemoryStore::new();
        let handler = handler(TerminalAction::PersistAndNavigate, store.clone());
        let recorder = Recorder::default();

        let pending = submit(&handler, &recorder, "a@b.com", "longenough");
        tokio::pin!(pending);

        // Still waiting just before the delay elapses
        let early = tokio::time::timeout(Duration::from_millis(599), &mut pending).await;
        assert!(early.is_err());
        assert_eq!(handler.state(), SubmitState::Submitting);
        assert_eq!(
            recorder.events(),
            vec![Event::ClearError, Event::Submitting(true)]
        );
        assert!(store.is_empty());

        pending.await;
        assert!(store.get_item(USER_KEY).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_submitting_is_ignored() {
        let store = MemoryStore::new();
        let handler = handler(TerminalAction::Acknowledge, store.clone());
        let first = Recorder::default();
        let second = Recorder::default();

        let (a, b) = tokio::join!(
            submit(&handler, &first, "a@b.com", "longenough"),
            submit(&handler, &second, "a@b.com", "longenough"),
        );

        assert_eq!(a, SubmitOutcome::Acknowledged);
        assert_eq!(b, SubmitOutcome::Ignored);
        assert!(second.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_after_navigation_is_ignored() {
        let store = MemoryStore::new();
        let handler = handler(TerminalAction::PersistAndNavigate, store.clone());
        let recorder = Recorder::default();

        submit(&handler, &recorder, "a@b.com", "longenough").await;
        let before = recorder.events().len();

        let outcome = submit(&handler, &recorder, "", "").await;
        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(recorder.events().len(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_delay_and_destination() {
        let store = MemoryStore::new();
        let mut config = SweAppConfig::default().with_delay_ms(50).login;
        config.destination = "profile.html".to_string();
        let handler = LoginHandler::new(config, store);
        let recorder = Recorder::default();
        let start = Instant::now();

        let outcome = submit(&handler, &recorder, "a@b.com", "longenough").await;

        assert_eq!(
            outcome,
            SubmitOutcome::Navigated {
                destination: "profile.html".to_string()
            }
        );
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_millis(600));
    }
}
