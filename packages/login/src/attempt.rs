use crate::error::ValidationError;

/// Credentials as read from the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    email: String,
    password: String,
}

impl LoginAttempt {
    /// Build an attempt from raw field values. The email is trimmed, the
    /// password is taken verbatim.
    pub fn from_fields(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password length as the browser counts it (UTF-16 code units).
    pub fn password_len(&self) -> usize {
        self.password.encode_utf16().count()
    }

    /// Check presence, then length. The first failing rule wins.
    pub fn validate(&self, min_password_len: usize) -> Result<(), ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if self.password_len() < min_password_len {
            return Err(ValidationError::PasswordTooShort {
                min: min_password_len,
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
