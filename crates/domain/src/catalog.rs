//! Product catalog: categories, products and the ingredients they are made from.

use common::{EntityId, IdSequence};
use serde::{Deserialize, Serialize};

use crate::person::{Person, Supplier};
use crate::value_objects::Money;

/// A product category such as "Cakes" or "Cookies".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: EntityId,
    name: String,
}

impl Category {
    pub fn new(ids: &IdSequence, name: impl Into<String>) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Something the bakery sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: EntityId,
    category_id: EntityId,
    name: String,
    price: Money,
    description: String,
}

impl Product {
    pub fn new(
        ids: &IdSequence,
        category: &Category,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            category_id: category.id,
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn category_id(&self) -> EntityId {
        self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A raw material bought from a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    id: EntityId,
    name: String,
    supplier_id: EntityId,
    price_per_kg: Money,
}

impl Ingredient {
    /// Creates the ingredient and appends it to the supplier's list.
    pub fn new(
        ids: &IdSequence,
        name: impl Into<String>,
        supplier: &mut Supplier,
        price_per_kg: Money,
    ) -> Self {
        let ingredient = Self {
            id: ids.next_id(),
            name: name.into(),
            supplier_id: supplier.id(),
            price_per_kg,
        };
        supplier.record_ingredient(SuppliedIngredient::from(&ingredient));
        ingredient
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supplier_id(&self) -> EntityId {
        self.supplier_id
    }

    pub fn price_per_kg(&self) -> Money {
        self.price_per_kg
    }
}

/// Entry in a supplier's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppliedIngredient {
    pub ingredient_id: EntityId,
    pub name: String,
    pub price_per_kg: Money,
}

impl From<&Ingredient> for SuppliedIngredient {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            ingredient_id: ingredient.id,
            name: ingredient.name.clone(),
            price_per_kg: ingredient.price_per_kg,
        }
    }
}

/// How much of an ingredient goes into a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIngredient {
    product_id: EntityId,
    ingredient_id: EntityId,
    quantity_in_grams: u32,
}

impl ProductIngredient {
    pub fn new(product: &Product, ingredient: &Ingredient, quantity_in_grams: u32) -> Self {
        Self {
            product_id: product.id,
            ingredient_id: ingredient.id,
            quantity_in_grams,
        }
    }

    pub fn product_id(&self) -> EntityId {
        self.product_id
    }

    pub fn ingredient_id(&self) -> EntityId {
        self.ingredient_id
    }

    pub fn quantity_in_grams(&self) -> u32 {
        self.quantity_in_grams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::NewSupplier;

    fn supplier(ids: &IdSequence) -> Supplier {
        Supplier::register(
            ids,
            NewSupplier::new("Best Ingredients", "John", "Doe", "bestingredients@gmail.com"),
        )
        .unwrap()
    }

    #[test]
    fn test_category_roundtrip() {
        let ids = IdSequence::new();
        let category = Category::new(&ids, "Cakes");
        assert_eq!(category.id(), EntityId::from_u64(1));
        assert_eq!(category.name(), "Cakes");
    }

    #[test]
    fn test_product_roundtrip() {
        let ids = IdSequence::new();
        let category = Category::new(&ids, "Cakes");
        let product = Product::new(
            &ids,
            &category,
            "Fruit Cake",
            Money::from_major(350),
            "Cake with assorted fruits and light cream.",
        );

        assert_eq!(product.id(), EntityId::from_u64(2));
        assert_eq!(product.category_id(), category.id());
        assert_eq!(product.name(), "Fruit Cake");
        assert_eq!(product.price(), Money::from_major(350));
        assert_eq!(
            product.description(),
            "Cake with assorted fruits and light cream."
        );
    }

    #[test]
    fn test_ingredient_appends_to_supplier() {
        let ids = IdSequence::new();
        let mut supplier = supplier(&ids);

        let flour = Ingredient::new(&ids, "Flour", &mut supplier, Money::from_major(12));

        assert_eq!(flour.supplier_id(), supplier.id());
        assert_eq!(supplier.ingredients().len(), 1);
        assert_eq!(supplier.ingredients()[0].ingredient_id, flour.id());
        assert_eq!(supplier.ingredients()[0].name, "Flour");
    }

    #[test]
    fn test_supplier_show_info_lists_ingredients() {
        let ids = IdSequence::new();
        let mut supplier = supplier(&ids);
        Ingredient::new(&ids, "Flour", &mut supplier, Money::from_major(12));
        Ingredient::new(&ids, "Sugar", &mut supplier, Money::from_minor(2550));

        assert_eq!(
            supplier.show_info(),
            "Ingredients supplied by Best Ingredients:\n\
             Ingredient Name: Flour, Price per kg: 12.00\n\
             Ingredient Name: Sugar, Price per kg: 25.50"
        );
    }

    #[test]
    fn test_product_ingredient_links_ids() {
        let ids = IdSequence::new();
        let mut supplier = supplier(&ids);
        let category = Category::new(&ids, "Cakes");
        let product = Product::new(&ids, &category, "Fruit Cake", Money::from_major(350), "");
        let flour = Ingredient::new(&ids, "Flour", &mut supplier, Money::from_major(12));

        let link = ProductIngredient::new(&product, &flour, 200);

        assert_eq!(link.product_id(), product.id());
        assert_eq!(link.ingredient_id(), flour.id());
        assert_eq!(link.quantity_in_grams(), 200);
    }
}
