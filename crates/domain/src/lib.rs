//! Domain model for a bakery's order management.
//!
//! This crate provides:
//! - Customers and suppliers behind a common `Person` capability
//! - The product catalog, ingredients and their links
//! - Orders, line items and deliveries
//! - Promotions, reviews and loyalty points
//!
//! Identifier-bearing entities draw ids from a shared [`IdSequence`].
//! Cross-references are stored as [`EntityId`]s; keeping registries of
//! entities is left to the caller.

pub mod catalog;
pub mod error;
pub mod loyalty;
pub mod order;
pub mod person;
pub mod promotion;
pub mod review;
pub mod validation;
pub mod value_objects;

pub use catalog::{Category, Ingredient, Product, ProductIngredient, SuppliedIngredient};
pub use common::{EntityId, IdSequence};
pub use error::{Result, ValidationError};
pub use loyalty::LoyaltyProgram;
pub use order::{
    Delivery, DeliveryStatus, NewOrder, Order, OrderDetails, PaymentStatus, PaymentType,
    PlacedOrder,
};
pub use person::{
    Credentials, Customer, DEFAULT_PASSWORD, Identity, NewCustomer, NewSupplier, PasswordChanged,
    Person, Supplier,
};
pub use promotion::{Promotion, PromotionProduct};
pub use review::Review;
pub use value_objects::Money;
