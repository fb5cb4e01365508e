use serde::{Deserialize, Serialize};

use fulfilment_core::{DomainError, DomainResult, Entity};

/// Product identifier, assigned by the repository on insert.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product fields before an id exists (create) or as a full replacement (update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<u64>, // smallest currency unit (e.g. cents)
    pub stock: u32,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            price: None,
            stock: 0,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::unprocessable(
                "Product Name was not set on request.",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub stock: u32,
}

impl Product {
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
        }
    }

    /// Overwrite every field but the id. Absent optionals clear the stored value.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.stock = draft.stock;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
