//! Login form logic shared by every platform: field validation, the
//! simulated sign-in, and what happens once it completes.

mod attempt;
mod error;
mod handler;
mod timer;

pub use attempt::LoginAttempt;
pub use error::ValidationError;
pub use handler::{Host, LoginHandler, LoginView, SubmitOutcome, SubmitState};
pub use timer::sleep;
