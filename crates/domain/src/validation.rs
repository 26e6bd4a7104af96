//! Field validation rules.
//!
//! These are shape checks only. A date of birth of `2024-13-45` passes
//! because nothing here parses it as a calendar date.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ValidationError};

/// Minimum length of a password set through a password change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+@.+\..+").expect("Invalid regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("Invalid regex"));
static DATE_OF_BIRTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid regex"));

/// Checks that an email contains a `local@domain.tld`-shaped substring.
///
/// Email is mandatory, so an empty value is rejected.
pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail {
            email: email.to_string(),
        })
    }
}

/// Checks an optional phone number. Absent or empty is valid.
pub fn validate_phone(phone: Option<&str>) -> Result<()> {
    match phone {
        Some(phone) if !phone.is_empty() && !PHONE_RE.is_match(phone) => {
            Err(ValidationError::InvalidPhone {
                phone: phone.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Checks an optional date of birth against `YYYY-MM-DD`. Absent or empty is valid.
pub fn validate_date_of_birth(value: Option<&str>) -> Result<()> {
    match value {
        Some(value) if !value.is_empty() && !DATE_OF_BIRTH_RE.is_match(value) => {
            Err(ValidationError::InvalidDateOfBirth {
                value: value.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Checks that a new password is at least [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_new_password(password: &str) -> Result<()> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            length,
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Treats an empty string the same as an absent value.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.co", "oleksandr.tkach@gmail.com", "first.last@mail.example.org"] {
            assert!(validate_email(email).is_ok(), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["", "abc", "a@b", "@b.co", "a@.co", "a@b."] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::InvalidEmail {
                    email: email.to_string()
                }),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_phone_length_bounds() {
        assert!(validate_phone(Some("0631234567")).is_ok());
        assert!(validate_phone(Some("+380631234567")).is_ok());
        assert!(validate_phone(Some("123456789012345")).is_ok());

        assert!(validate_phone(Some("123")).is_err());
        assert!(validate_phone(Some("063123456")).is_err());
        assert!(validate_phone(Some("1234567890123456")).is_err());
        assert!(validate_phone(Some("12345678901234567")).is_err());
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        assert!(validate_phone(Some("063-123-4567")).is_err());
        assert!(validate_phone(Some("++380631234567")).is_err());
        assert!(validate_phone(Some("38063123456+")).is_err());
        assert!(validate_phone(Some("٠٦٣١٢٣٤٥٦٧")).is_err());
    }

    #[test]
    fn test_absent_phone_is_valid() {
        assert!(validate_phone(None).is_ok());
        assert!(validate_phone(Some("")).is_ok());
    }

    #[test]
    fn test_date_of_birth_is_a_shape_check() {
        assert!(validate_date_of_birth(Some("1990-04-05")).is_ok());
        assert!(validate_date_of_birth(Some("2024-13-45")).is_ok());
        assert!(validate_date_of_birth(None).is_ok());
        assert!(validate_date_of_birth(Some("")).is_ok());

        assert!(validate_date_of_birth(Some("05-04-1990")).is_err());
        assert!(validate_date_of_birth(Some("1990/04/05")).is_err());
        assert!(validate_date_of_birth(Some("1990-4-5")).is_err());
    }

    #[test]
    fn test_new_password_length() {
        assert!(validate_new_password("12345678").is_ok());
        assert_eq!(
            validate_new_password("short"),
            Err(ValidationError::PasswordTooShort { length: 5, min: 8 })
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    }
}
