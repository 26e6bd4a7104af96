//! Promotions and the products they apply to.

use chrono::NaiveDate;
use common::{EntityId, IdSequence};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A discount campaign running between two dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    id: EntityId,
    name: String,
    discount_percentage: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Promotion {
    pub fn new(
        ids: &IdSequence,
        name: impl Into<String>,
        discount_percentage: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            discount_percentage,
            start_date,
            end_date,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn discount_percentage(&self) -> f64 {
        self.discount_percentage
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }
}

/// A product taking part in a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionProduct {
    promotion_id: EntityId,
    product_id: EntityId,
    quantity: u32,
}

impl PromotionProduct {
    pub fn new(promotion: &Promotion, product: &Product, quantity: u32) -> Self {
        Self {
            promotion_id: promotion.id,
            product_id: product.id(),
            quantity,
        }
    }

    pub fn promotion_id(&self) -> EntityId {
        self.promotion_id
    }

    pub fn product_id(&self) -> EntityId {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::value_objects::Money;

    fn summer(ids: &IdSequence) -> Promotion {
        Promotion::new(
            ids,
            "Summer Discount",
            10.0,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
        )
    }

    #[test]
    fn test_promotion_roundtrip() {
        let ids = IdSequence::new();
        let promotion = summer(&ids);

        assert_eq!(promotion.id(), EntityId::from_u64(1));
        assert_eq!(promotion.name(), "Summer Discount");
        assert_eq!(promotion.discount_percentage(), 10.0);
        assert_eq!(
            promotion.start_date(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(
            promotion.end_date(),
            NaiveDate::from_ymd_opt(2024, 8, 31).unwrap()
        );
    }

    #[test]
    fn test_promotion_product_links_ids() {
        let ids = IdSequence::new();
        let promotion = summer(&ids);
        let category = Category::new(&ids, "Cupcakes");
        let product = Product::new(&ids, &category, "Lemon Cupcake", Money::from_major(75), "");

        let link = PromotionProduct::new(&promotion, &product, 6);

        assert_eq!(link.promotion_id(), promotion.id());
        assert_eq!(link.product_id(), product.id());
        assert_eq!(link.quantity(), 6);
    }
}
