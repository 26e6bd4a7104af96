use chrono::{DateTime, Utc};
use common::{EntityId, IdSequence};
use serde::{Deserialize, Serialize};

use super::{PaymentStatus, PaymentType};
use crate::person::{Customer, Person};
use crate::value_objects::Money;

/// Input for [`Order::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrder {
    pub payment_type: PaymentType,
    pub payment_status: PaymentStatus,
    pub total_amount: Money,
    pub points_used: u32,
}

impl NewOrder {
    /// Creates an order input that spends no loyalty points.
    pub fn new(payment_type: PaymentType, payment_status: PaymentStatus, total_amount: Money) -> Self {
        Self {
            payment_type,
            payment_status,
            total_amount,
            points_used: 0,
        }
    }

    pub fn with_points_used(mut self, points_used: u32) -> Self {
        self.points_used = points_used;
        self
    }
}

/// A customer's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: EntityId,
    customer_id: EntityId,
    order_date: DateTime<Utc>,
    payment_type: PaymentType,
    payment_status: PaymentStatus,
    total_amount: Money,
    points_used: u32,
}

impl Order {
    /// Creates an order stamped with the current time and appends it to the
    /// customer's order list.
    pub fn place(ids: &IdSequence, customer: &mut Customer, input: NewOrder) -> Self {
        let order = Self {
            id: ids.next_id(),
            customer_id: customer.id(),
            order_date: Utc::now(),
            payment_type: input.payment_type,
            payment_status: input.payment_status,
            total_amount: input.total_amount,
            points_used: input.points_used,
        };
        tracing::debug!(
            order_id = %order.id,
            customer_id = %order.customer_id,
            total = %order.total_amount,
            "order placed"
        );
        customer.record_order(PlacedOrder::from(&order));
        order
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn customer_id(&self) -> EntityId {
        self.customer_id
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Loyalty points spent on this order.
    pub fn points_used(&self) -> u32 {
        self.points_used
    }
}

/// Entry in a customer's order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_id: EntityId,
    pub order_date: DateTime<Utc>,
    pub total_amount: Money,
}

impl From<&Order> for PlacedOrder {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            order_date: order.order_date,
            total_amount: order.total_amount,
        }
    }
}
