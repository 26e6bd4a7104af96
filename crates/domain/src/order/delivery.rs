use chrono::NaiveDate;
use common::EntityId;
use serde::{Deserialize, Serialize};

use super::{DeliveryStatus, Order};

/// Shipment of an order to an address.
///
/// Deliveries have no id of their own; they are identified by their order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    order_id: EntityId,
    delivery_date: NaiveDate,
    delivery_address: String,
    delivery_status: DeliveryStatus,
}

impl Delivery {
    pub fn new(
        order: &Order,
        delivery_date: NaiveDate,
        delivery_address: impl Into<String>,
        delivery_status: DeliveryStatus,
    ) -> Self {
        Self {
            order_id: order.id(),
            delivery_date,
            delivery_address: delivery_address.into(),
            delivery_status,
        }
    }

    pub fn order_id(&self) -> EntityId {
        self.order_id
    }

    pub fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn delivery_status(&self) -> DeliveryStatus {
        self.delivery_status
    }
}

#[cfg(test)]
mod tests {
    use common::IdSequence;

    use super::*;
    use crate::order::{NewOrder, PaymentStatus, PaymentType};
    use crate::person::{Customer, NewCustomer};
    use crate::value_objects::Money;

    #[test]
    fn test_delivery_does_not_consume_an_id() {
        let ids = IdSequence::new();
        let mut customer =
            Customer::register(&ids, NewCustomer::new("Maria", "Yakovleva", "maria3849@gmail.com"))
                .unwrap();
        let order = Order::place(
            &ids,
            &mut customer,
            NewOrder::new(PaymentType::PayPal, PaymentStatus::Completed, Money::from_major(150)),
        );
        let next = ids.peek();

        let date = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
        let delivery = Delivery::new(&order, date, "456 Maple Ave, Lviv", DeliveryStatus::Shipped);

        assert_eq!(ids.peek(), next);
        assert_eq!(delivery.order_id(), order.id());
        assert_eq!(delivery.delivery_date(), date);
        assert_eq!(delivery.delivery_address(), "456 Maple Ave, Lviv");
        assert_eq!(delivery.delivery_status(), DeliveryStatus::Shipped);
    }
}
