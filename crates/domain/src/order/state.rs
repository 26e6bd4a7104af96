//! Payment and delivery statuses.

use serde::{Deserialize, Serialize};

/// How an order is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    CreditCard,
    Cash,
    PayPal,
}

impl PaymentType {
    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::CreditCard => "Card",
            PaymentType::Cash => "Cash",
            PaymentType::PayPal => "PayPal",
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the payment for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a delivery is in its lifecycle.
///
/// ```text
/// Pending ──► Shipped ──► Delivered ──► Returned
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeliveryStatus {
    /// Awaiting shipment.
    #[default]
    Pending,
    Shipped,
    Delivered,
    Returned,
}

impl DeliveryStatus {
    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Awaiting shipment",
            DeliveryStatus::Shipped => "Shipped",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Returned => "Returned",
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
