//! People the bakery deals with: customers and suppliers.

mod credentials;
mod customer;
mod supplier;

pub use credentials::{Credentials, DEFAULT_PASSWORD, PasswordChanged};
pub use customer::{Customer, NewCustomer};
pub use supplier::{NewSupplier, Supplier};

use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::validation::{non_empty, validate_email, validate_phone};

/// Name and contact details shared by every kind of person.
///
/// Deserialization runs the same checks as [`Identity::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IdentityFields")]
pub struct Identity {
    first_name: String,
    last_name: String,
    phone: Option<String>,
    email: String,
}

impl Identity {
    /// Validates the contact details and builds an identity.
    ///
    /// An empty phone is stored as absent.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: Option<String>,
        email: impl Into<String>,
    ) -> Result<Self> {
        let email = email.into();
        let phone = non_empty(phone);

        validate_email(&email)?;
        validate_phone(phone.as_deref())?;

        Ok(Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone,
            email,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns first and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Deserialize)]
struct IdentityFields {
    first_name: String,
    last_name: String,
    #[serde(default)]
    phone: Option<String>,
    email: String,
}

impl TryFrom<IdentityFields> for Identity {
    type Error = ValidationError;

    fn try_from(fields: IdentityFields) -> Result<Self> {
        Identity::new(fields.first_name, fields.last_name, fields.phone, fields.email)
    }
}

/// Capabilities every person variant supports.
///
/// Callers hold `&dyn Person` and render summaries without knowing whether
/// they have a customer or a supplier.
pub trait Person {
    /// Returns the entity identifier.
    fn id(&self) -> EntityId;

    /// Returns the name and contact details.
    fn identity(&self) -> &Identity;

    /// Renders a multi-line summary of the collection this person owns.
    fn show_info(&self) -> String;

    /// Returns first and last name joined by a space.
    fn full_name(&self) -> String {
        self.identity().full_name()
    }
}
