//! Loyalty points earned and spent per order.

use common::{EntityId, IdSequence};
use serde::{Deserialize, Serialize};

use crate::order::Order;
use crate::person::{Customer, Person};

/// Points a customer earned on an order, and how many they intend to spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyProgram {
    id: EntityId,
    customer_id: EntityId,
    order_id: EntityId,
    points_earned: u32,
    points_to_use: u32,
}

impl LoyaltyProgram {
    pub fn new(
        ids: &IdSequence,
        customer: &Customer,
        order: &Order,
        points_earned: u32,
        points_to_use: u32,
    ) -> Self {
        Self {
            id: ids.next_id(),
            customer_id: customer.id(),
            order_id: order.id(),
            points_earned,
            points_to_use,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn customer_id(&self) -> EntityId {
        self.customer_id
    }

    pub fn order_id(&self) -> EntityId {
        self.order_id
    }

    pub fn points_earned(&self) -> u32 {
        self.points_earned
    }

    pub fn points_to_use(&self) -> u32 {
        self.points_to_use
    }
}
