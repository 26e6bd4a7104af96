//! In-memory registries for the sample bakery.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use common::{EntityId, IdSequence};
use domain::{
    Category, Customer, Delivery, DeliveryStatus, Ingredient, Money, NewCustomer, NewOrder,
    NewSupplier, Order, OrderDetails, PaymentStatus, PaymentType, Person, Product,
    ProductIngredient, Promotion, PromotionProduct, Supplier,
};

use crate::error::{DemoError, Result};

/// Every entity of the sample bakery, keyed by id where it has one.
///
/// Maps are ordered by id, which is also construction order.
#[derive(Debug, Default)]
pub struct Bakery {
    pub customers: BTreeMap<EntityId, Customer>,
    pub suppliers: BTreeMap<EntityId, Supplier>,
    pub categories: BTreeMap<EntityId, Category>,
    pub products: BTreeMap<EntityId, Product>,
    pub ingredients: BTreeMap<EntityId, Ingredient>,
    pub promotions: BTreeMap<EntityId, Promotion>,
    pub orders: BTreeMap<EntityId, Order>,
    pub product_ingredients: Vec<ProductIngredient>,
    pub promotion_products: Vec<PromotionProduct>,
    pub order_details: Vec<OrderDetails>,
    pub deliveries: Vec<Delivery>,
}

fn lookup<'a, T>(map: &'a BTreeMap<EntityId, T>, kind: &'static str, id: EntityId) -> Result<&'a T> {
    map.get(&id).ok_or(DemoError::NotFound { kind, id })
}

fn lookup_mut<'a, T>(
    map: &'a mut BTreeMap<EntityId, T>,
    kind: &'static str,
    id: EntityId,
) -> Result<&'a mut T> {
    map.get_mut(&id).ok_or(DemoError::NotFound { kind, id })
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
}

impl Bakery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_customer(&mut self, ids: &IdSequence, input: NewCustomer) -> Result<EntityId> {
        let customer = Customer::register(ids, input)?;
        let id = customer.id();
        self.customers.insert(id, customer);
        Ok(id)
    }

    pub fn register_supplier(&mut self, ids: &IdSequence, input: NewSupplier) -> Result<EntityId> {
        let supplier = Supplier::register(ids, input)?;
        let id = supplier.id();
        self.suppliers.insert(id, supplier);
        Ok(id)
    }

    pub fn add_category(&mut self, ids: &IdSequence, name: &str) -> EntityId {
        let category = Category::new(ids, name);
        let id = category.id();
        self.categories.insert(id, category);
        id
    }

    pub fn add_product(
        &mut self,
        ids: &IdSequence,
        category_id: EntityId,
        name: &str,
        price: Money,
        description: &str,
    ) -> Result<EntityId> {
        let category = lookup(&self.categories, "category", category_id)?;
        let product = Product::new(ids, category, name, price, description);
        let id = product.id();
        self.products.insert(id, product);
        Ok(id)
    }

    pub fn add_ingredient(
        &mut self,
        ids: &IdSequence,
        name: &str,
        supplier_id: EntityId,
        price_per_kg: Money,
    ) -> Result<EntityId> {
        let supplier = lookup_mut(&mut self.suppliers, "supplier", supplier_id)?;
        let ingredient = Ingredient::new(ids, name, supplier, price_per_kg);
        let id = ingredient.id();
        self.ingredients.insert(id, ingredient);
        Ok(id)
    }

    pub fn link_ingredient(
        &mut self,
        product_id: EntityId,
        ingredient_id: EntityId,
        quantity_in_grams: u32,
    ) -> Result<()> {
        let product = lookup(&self.products, "product", product_id)?;
        let ingredient = lookup(&self.ingredients, "ingredient", ingredient_id)?;
        self.product_ingredients
            .push(ProductIngredient::new(product, ingredient, quantity_in_grams));
        Ok(())
    }

    pub fn add_promotion(
        &mut self,
        ids: &IdSequence,
        name: &str,
        discount_percentage: f64,
        start_date: &str,
        end_date: &str,
    ) -> Result<EntityId> {
        let promotion = Promotion::new(
            ids,
            name,
            discount_percentage,
            parse_date(start_date)?,
            parse_date(end_date)?,
        );
        let id = promotion.id();
        self.promotions.insert(id, promotion);
        Ok(id)
    }

    pub fn promote(&mut self, promotion_id: EntityId, product_id: EntityId, quantity: u32) -> Result<()> {
        let promotion = lookup(&self.promotions, "promotion", promotion_id)?;
        let product = lookup(&self.products, "product", product_id)?;
        self.promotion_products
            .push(PromotionProduct::new(promotion, product, quantity));
        Ok(())
    }

    pub fn place_order(
        &mut self,
        ids: &IdSequence,
        customer_id: EntityId,
        input: NewOrder,
    ) -> Result<EntityId> {
        let customer = lookup_mut(&mut self.customers, "customer", customer_id)?;
        let order = Order::place(ids, customer, input);
        let id = order.id();
        self.orders.insert(id, order);
        Ok(id)
    }

    pub fn add_line(
        &mut self,
        order_id: EntityId,
        product_id: EntityId,
        quantity: u32,
        price: Money,
    ) -> Result<()> {
        let product = lookup(&self.products, "product", product_id)?;
        let order = lookup(&self.orders, "order", order_id)?;
        self.order_details
            .push(OrderDetails::new(product, order, quantity, price));
        Ok(())
    }

    pub fn schedule_delivery(
        &mut self,
        order_id: EntityId,
        delivery_date: &str,
        delivery_address: &str,
        delivery_status: DeliveryStatus,
    ) -> Result<()> {
        let order = lookup(&self.orders, "order", order_id)?;
        self.deliveries.push(Delivery::new(
            order,
            parse_date(delivery_date)?,
            delivery_address,
            delivery_status,
        ));
        Ok(())
    }

    /// Changes a customer's password and returns the confirmation text.
    pub fn change_password(&mut self, customer_id: EntityId, old: &str, new: &str) -> Result<String> {
        let customer = lookup_mut(&mut self.customers, "customer", customer_id)?;
        Ok(customer.change_password(old, new)?.to_string())
    }

    /// Every customer and supplier, customers first, each in id order.
    pub fn people(&self) -> Vec<&dyn Person> {
        self.customers
            .values()
            .map(|c| c as &dyn Person)
            .chain(self.suppliers.values().map(|s| s as &dyn Person))
            .collect()
    }
}

/// Ids of the sample entities the report refers to.
#[derive(Debug, Clone, Copy)]
pub struct Highlights {
    pub customer_id: EntityId,
    pub supplier_id: EntityId,
}

/// Builds the sample bakery.
pub fn seed(ids: &IdSequence) -> Result<(Bakery, Highlights)> {
    let mut bakery = Bakery::new();

    let olexandr = bakery.register_customer(
        ids,
        NewCustomer::new("Olexandr", "Tkach", "oleksandr.tkach@gmail.com")
            .with_phone("0631234567")
            .with_date_of_birth("1990-04-05")
            .with_password("secure_pass1"),
    )?;
    let maria = bakery.register_customer(
        ids,
        NewCustomer::new("Maria", "Yakovleva", "maria3849@gmail.com")
            .with_phone("0672345678")
            .with_date_of_birth("1988-06-10")
            .with_password("secure_pass2"),
    )?;
    bakery.register_customer(
        ids,
        NewCustomer::new("Anna", "Sydorchuk", "anna.sydorenko@gmail.com")
            .with_phone("0953456789")
            .with_date_of_birth("1992-03-12")
            .with_password("secure_pass3"),
    )?;

    let cakes = bakery.add_category(ids, "Cakes");
    let cupcakes = bakery.add_category(ids, "Cupcakes");
    for name in ["Mousse Cakes", "Cookies", "Cheesecakes"] {
        bakery.add_category(ids, name);
    }

    let fruit_cake = bakery.add_product(
        ids,
        cakes,
        "Fruit Cake",
        Money::from_major(350),
        "Cake with assorted fruits and light cream.",
    )?;
    let napoleon = bakery.add_product(
        ids,
        cakes,
        "Napoleon Cake",
        Money::from_major(280),
        "Traditional cake made with puff pastry.",
    )?;
    let lemon_cupcake = bakery.add_product(
        ids,
        cupcakes,
        "Lemon Cupcake",
        Money::from_major(75),
        "Refreshing cupcake with lemon cream.",
    )?;

    let best_ingredients = bakery.register_supplier(
        ids,
        NewSupplier::new("Best Ingredients", "John", "Doe", "bestingredients@gmail.com")
            .with_phone("+380631234567"),
    )?;
    let flour = bakery.add_ingredient(ids, "Flour", best_ingredients, Money::from_major(12))?;
    bakery.link_ingredient(fruit_cake, flour, 200)?;

    let summer = bakery.add_promotion(ids, "Summer Discount", 10.0, "2024-06-01", "2024-08-31")?;
    bakery.promote(summer, fruit_cake, 1)?;
    bakery.promote(summer, lemon_cupcake, 6)?;

    let first_order = bakery.place_order(
        ids,
        olexandr,
        NewOrder::new(
            PaymentType::CreditCard,
            PaymentStatus::Completed,
            Money::from_major(700),
        ),
    )?;
    bakery.add_line(first_order, fruit_cake, 1, Money::from_major(350))?;
    bakery.add_line(first_order, napoleon, 1, Money::from_major(280))?;
    bakery.add_line(first_order, lemon_cupcake, 1, Money::from_major(75))?;

    let second_order = bakery.place_order(
        ids,
        maria,
        NewOrder::new(
            PaymentType::PayPal,
            PaymentStatus::Completed,
            Money::from_major(150),
        ),
    )?;
    bakery.add_line(second_order, lemon_cupcake, 2, Money::from_major(150))?;

    bakery.schedule_delivery(
        first_order,
        "2024-12-01",
        "123 Main St, Kyiv",
        DeliveryStatus::Pending,
    )?;
    bakery.schedule_delivery(
        second_order,
        "2024-11-15",
        "456 Maple Ave, Lviv",
        DeliveryStatus::Shipped,
    )?;

    tracing::info!(
        customers = bakery.customers.len(),
        products = bakery.products.len(),
        orders = bakery.orders.len(),
        "sample bakery seeded"
    );

    Ok((
        bakery,
        Highlights {
            customer_id: olexandr,
            supplier_id: best_ingredients,
        },
    ))
}

/// Renders the demo output: the highlighted customer's name, the customer
/// and supplier summaries, and a password change confirmation.
pub fn report(bakery: &mut Bakery, highlights: Highlights) -> Result<Vec<String>> {
    let customer = lookup(&bakery.customers, "customer", highlights.customer_id)?;
    let supplier = lookup(&bakery.suppliers, "supplier", highlights.supplier_id)?;

    let mut lines = vec![customer.full_name()];
    let people: [&dyn Person; 2] = [customer, supplier];
    lines.extend(people.iter().map(|person| person.show_info()));

    lines.push(bakery.change_password(
        highlights.customer_id,
        "secure_pass1",
        "new_secure_pass1",
    )?);
    Ok(lines)
}
