use thiserror::Error;

/// Why a login attempt was rejected before anything was submitted.
///
/// The `Display` text is the exact message shown in the form's error region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter email and password.")]
    MissingCredentials,

    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
}
