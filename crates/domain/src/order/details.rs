use common::EntityId;
use serde::{Deserialize, Serialize};

use super::Order;
use crate::catalog::Product;
use crate::value_objects::Money;

/// A line item: which product, in which order, how many and for how much.
///
/// `price` is the amount charged for the whole line, as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    product_id: EntityId,
    order_id: EntityId,
    quantity: u32,
    price: Money,
}

impl OrderDetails {
    pub fn new(product: &Product, order: &Order, quantity: u32, price: Money) -> Self {
        Self {
            product_id: product.id(),
            order_id: order.id(),
            quantity,
            price,
        }
    }

    pub fn product_id(&self) -> EntityId {
        self.product_id
    }

    pub fn order_id(&self) -> EntityId {
        self.order_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Money {
        self.price
    }
}
