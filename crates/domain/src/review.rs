//! Customer reviews of products.

use common::{EntityId, IdSequence};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::person::{Customer, Person};

/// A customer's rating of a product, with an optional comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    id: EntityId,
    customer_id: EntityId,
    product_id: EntityId,
    rating: u8,
    comment: Option<String>,
}

impl Review {
    pub fn new(
        ids: &IdSequence,
        customer: &Customer,
        product: &Product,
        rating: u8,
        comment: Option<String>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            customer_id: customer.id(),
            product_id: product.id(),
            rating,
            comment,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn customer_id(&self) -> EntityId {
        self.customer_id
    }

    pub fn product_id(&self) -> EntityId {
        self.product_id
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
