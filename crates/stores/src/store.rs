use serde::{Deserialize, Serialize};

use fulfilment_core::{DomainError, DomainResult, Entity};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(pub u64);

impl core::fmt::Display for StoreId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Full store payload: create or wholesale replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDraft {
    pub name: String,
    pub quantity_products_in_stock: u32,
}

impl StoreDraft {
    pub fn new(name: impl Into<String>, quantity_products_in_stock: u32) -> Self {
        Self {
            name: name.into(),
            quantity_products_in_stock,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        check_name(&self.name)
    }
}

/// Partial update: only the fields that are present are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePatch {
    pub name: Option<String>,
    pub quantity_products_in_stock: Option<u32>,
}

impl StorePatch {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.is_none() && self.quantity_products_in_stock.is_none() {
            return Err(DomainError::unprocessable("Store patch carries no fields."));
        }
        match &self.name {
            Some(name) => check_name(name),
            None => Ok(()),
        }
    }
}

fn check_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::unprocessable("Store Name was not set on request."));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub quantity_products_in_stock: u32,
}

impl Store {
    pub fn from_draft(id: StoreId, draft: StoreDraft) -> Self {
        Self {
            id,
            name: draft.name,
            quantity_products_in_stock: draft.quantity_products_in_stock,
        }
    }

    pub fn replace(&mut self, draft: StoreDraft) {
        self.name = draft.name;
        self.quantity_products_in_stock = draft.quantity_products_in_stock;
    }

    pub fn patch(&mut self, patch: StorePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity_products_in_stock {
            self.quantity_products_in_stock = quantity;
        }
    }
}

impl Entity for Store {
    type Id = StoreId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
