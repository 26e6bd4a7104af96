use common::{EntityId, IdSequence};
use serde::Serialize;

use super::{Credentials, Identity, PasswordChanged, Person};
use crate::error::Result;
use crate::order::PlacedOrder;
use crate::validation::{non_empty, validate_date_of_birth};

/// Input for [`Customer::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    /// Falls back to [`DEFAULT_PASSWORD`](super::DEFAULT_PASSWORD) when absent.
    pub password: Option<String>,
}

impl NewCustomer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            date_of_birth: None,
            password: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = Some(date_of_birth.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// A person who places orders.
///
/// The order list is only appended to by [`Order::place`](crate::Order::place).
/// The password is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    id: EntityId,
    #[serde(flatten)]
    identity: Identity,
    date_of_birth: Option<String>,
    #[serde(skip)]
    credentials: Credentials,
    orders: Vec<PlacedOrder>,
}

impl Customer {
    /// Validates the input and allocates an id.
    ///
    /// Checks run in order date of birth, email, phone. No id is consumed
    /// when a check fails.
    pub fn register(ids: &IdSequence, input: NewCustomer) -> Result<Self> {
        let NewCustomer {
            first_name,
            last_name,
            email,
            phone,
            date_of_birth,
            password,
        } = input;

        let date_of_birth = non_empty(date_of_birth);
        let identity = validate_date_of_birth(date_of_birth.as_deref())
            .and_then(|()| Identity::new(first_name, last_name, phone, email))
            .inspect_err(|e| {
                tracing::warn!(field = e.field(), "customer registration rejected");
            })?;

        let credentials = password.map(Credentials::new).unwrap_or_default();
        let id = ids.next_id();
        tracing::debug!(customer_id = %id, "customer registered");

        Ok(Self {
            id,
            identity,
            date_of_birth,
            credentials,
            orders: Vec::new(),
        })
    }

    pub fn date_of_birth(&self) -> Option<&str> {
        self.date_of_birth.as_deref()
    }

    /// Orders placed by this customer, oldest first.
    pub fn orders(&self) -> &[PlacedOrder] {
        &self.orders
    }

    /// Returns true if `password` is the current password.
    pub fn authenticate(&self, password: &str) -> bool {
        self.credentials.verify(password)
    }

    /// Replaces the password after checking the old one.
    pub fn change_password(&mut self, old: &str, new: &str) -> Result<PasswordChanged> {
        self.credentials
            .change_password(old, new)
            .inspect(|_| tracing::debug!(customer_id = %self.id, "password changed"))
            .inspect_err(|e| {
                tracing::warn!(customer_id = %self.id, field = e.field(), "password change rejected");
            })
    }

    pub(crate) fn record_order(&mut self, order: PlacedOrder) {
        tracing::debug!(customer_id = %self.id, order_id = %order.order_id, "order recorded");
        self.orders.push(order);
    }
}

impl Person for Customer {
    fn id(&self) -> EntityId {
        self.id
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn show_info(&self) -> String {
        let name = self.identity.full_name();
        if self.orders.is_empty() {
            return format!("{name} has no orders.");
        }

        let lines: Vec<String> = self
            .orders
            .iter()
            .map(|order| {
                format!(
                    "Order ID: {}, Date: {}, Total: {}",
                    order.order_id,
                    order.order_date.format("%Y-%m-%d %H:%M:%S"),
                    order.total_amount
                )
            })
            .collect();
        format!("Orders for {name}:\n{}", lines.join("\n"))
    }
}
