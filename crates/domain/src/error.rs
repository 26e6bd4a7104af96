//! Domain error types.

use thiserror::Error;

/// Reasons an entity could not be constructed or mutated.
///
/// Every variant is raised before any field is assigned or any side effect
/// runs, so a failed call leaves no partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email is empty or not shaped like `local@domain.tld`.
    #[error("Invalid email format: {email:?}")]
    InvalidEmail { email: String },

    /// Phone is not 10-15 digits with an optional leading `+`.
    #[error("Invalid phone format: {phone:?} (expected 10-15 digits, optionally prefixed with '+')")]
    InvalidPhone { phone: String },

    /// Date of birth is not shaped like `YYYY-MM-DD`.
    #[error("Invalid date of birth format: {value:?} (expected YYYY-MM-DD)")]
    InvalidDateOfBirth { value: String },

    /// The old password given to a password change is not the stored one.
    #[error("Old password does not match the current password")]
    PasswordMismatch,

    /// The new password given to a password change is too short.
    #[error("New password must be at least {min} characters long (got {length})")]
    PasswordTooShort { length: usize, min: usize },
}

impl ValidationError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail { .. } => "email",
            ValidationError::InvalidPhone { .. } => "phone",
            ValidationError::InvalidDateOfBirth { .. } => "date_of_birth",
            ValidationError::PasswordMismatch => "old_password",
            ValidationError::PasswordTooShort { .. } => "new_password",
        }
    }
}

/// Result type for fallible domain operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        let email = ValidationError::InvalidEmail {
            email: "abc".to_string(),
        };
        assert_eq!(email.field(), "email");
        assert_eq!(ValidationError::PasswordMismatch.field(), "old_password");
        assert_eq!(
            ValidationError::PasswordTooShort { length: 5, min: 8 }.field(),
            "new_password"
        );
    }

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = ValidationError::InvalidPhone {
            phone: "123".to_string(),
        };
        assert!(err.to_string().contains("\"123\""));

        let err = ValidationError::PasswordTooShort { length: 5, min: 8 };
        assert_eq!(
            err.to_string(),
            "New password must be at least 8 characters long (got 5)"
        );
    }
}
