use crate::error::{Result, ValidationError};
use crate::validation::validate_new_password;

/// Password assigned when a customer registers without one.
pub const DEFAULT_PASSWORD: &str = "password";

/// Plaintext password attached to a customer.
///
/// Comparison is plain string equality. There is no hashing, history or
/// rate limiting.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    password: String,
}

impl Credentials {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Returns true if `candidate` is the stored password.
    pub fn verify(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Replaces the password.
    ///
    /// `old` must equal the stored password; that is checked before the
    /// length of `new`. Nothing changes on failure.
    pub fn change_password(&mut self, old: &str, new: &str) -> Result<PasswordChanged> {
        if !self.verify(old) {
            return Err(ValidationError::PasswordMismatch);
        }
        validate_new_password(new)?;

        self.password = new.to_string();
        Ok(PasswordChanged)
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Confirmation returned by a successful password change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChanged;

impl std::fmt::Display for PasswordChanged {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password changed successfully.")
    }
}
