//! Orders, their line items and deliveries.

mod delivery;
mod details;
mod entity;
mod state;

pub use delivery::Delivery;
pub use details::OrderDetails;
pub use entity::{NewOrder, Order, PlacedOrder};
pub use state::{DeliveryStatus, PaymentStatus, PaymentType};
