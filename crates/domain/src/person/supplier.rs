use common::{EntityId, IdSequence};
use serde::Serialize;

use super::{Identity, Person};
use crate::catalog::SuppliedIngredient;
use crate::error::Result;

/// Input for [`Supplier::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupplier {
    pub supplier_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
}

impl NewSupplier {
    pub fn new(
        supplier_name: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            supplier_name: supplier_name.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
            email: email.into(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// A business supplying ingredients, represented by a contact person.
///
/// Only [`Supplier::register`] builds one, so there is no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supplier {
    id: EntityId,
    supplier_name: String,
    #[serde(flatten)]
    identity: Identity,
    ingredients: Vec<SuppliedIngredient>,
}

impl Supplier {
    /// Validates the contact details and allocates an id.
    pub fn register(ids: &IdSequence, input: NewSupplier) -> Result<Self> {
        let identity = Identity::new(input.first_name, input.last_name, input.phone, input.email)
            .inspect_err(|e| {
                tracing::warn!(field = e.field(), "supplier registration rejected");
            })?;

        let id = ids.next_id();
        tracing::debug!(supplier_id = %id, supplier_name = %input.supplier_name, "supplier registered");

        Ok(Self {
            id,
            supplier_name: input.supplier_name,
            identity,
            ingredients: Vec::new(),
        })
    }

    pub fn supplier_name(&self) -> &str {
        &self.supplier_name
    }

    /// Ingredients this supplier provides, in creation order.
    pub fn ingredients(&self) -> &[SuppliedIngredient] {
        &self.ingredients
    }

    pub(crate) fn record_ingredient(&mut self, ingredient: SuppliedIngredient) {
        tracing::debug!(
            supplier_id = %self.id,
            ingredient_id = %ingredient.ingredient_id,
            "ingredient recorded"
        );
        self.ingredients.push(ingredient);
    }
}

impl Person for Supplier {
    fn id(&self) -> EntityId {
        self.id
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn show_info(&self) -> String {
        if self.ingredients.is_empty() {
            return format!("{} has no ingredients.", self.supplier_name);
        }

        let lines: Vec<String> = self
            .ingredients
            .iter()
            .map(|ingredient| {
                format!(
                    "Ingredient Name: {}, Price per kg: {}",
                    ingredient.name, ingredient.price_per_kg
                )
            })
            .collect();
        format!(
            "Ingredients supplied by {}:\n{}",
            self.supplier_name,
            lines.join("\n")
        )
    }
}
