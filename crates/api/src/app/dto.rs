use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fulfilment_core::{BusinessUnitCode, DomainError, DomainResult, LocationId};
use fulfilment_products::{Product, ProductDraft};
use fulfilment_stores::{Store, StoreDraft, StorePatch};
use fulfilment_warehouses::Warehouse;

// -------------------------
// Request DTOs
// -------------------------

/// Warehouse descriptor as sent by clients. Timestamps are never accepted from
/// the wire; the rules own them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseRequest {
    /// Required on create; overridden by the path on replace.
    pub business_unit_code: Option<String>,
    pub location: String,
    pub capacity: u32,
    pub stock: u32,
}

impl WarehouseRequest {
    pub fn into_domain(self) -> DomainResult<Warehouse> {
        let Self {
            business_unit_code,
            location,
            capacity,
            stock,
        } = self;
        let code = business_unit_code
            .ok_or_else(|| DomainError::validation("businessUnitCode is required"))?;
        build(BusinessUnitCode::new(code)?, location, capacity, stock)
    }

    /// Build with `code` taking precedence over any code in the body.
    pub fn into_domain_with_code(self, code: BusinessUnitCode) -> DomainResult<Warehouse> {
        build(code, self.location, self.capacity, self.stock)
    }
}

fn build(
    code: BusinessUnitCode,
    location: String,
    capacity: u32,
    stock: u32,
) -> DomainResult<Warehouse> {
    Ok(Warehouse::new(code, LocationId::new(location)?, capacity, stock))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Assigned server-side; a create that carries one is rejected.
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    #[serde(default)]
    pub stock: u32,
}

impl ProductRequest {
    pub fn into_new_draft(self) -> DomainResult<ProductDraft> {
        if self.id.is_some() {
            return Err(DomainError::unprocessable("Id was invalidly set on request."));
        }
        self.into_draft()
    }

    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        let Self {
            name,
            description,
            price,
            stock,
            ..
        } = self;
        let name =
            name.ok_or_else(|| DomainError::unprocessable("Product Name was not set on request."))?;
        Ok(ProductDraft {
            name,
            description,
            price,
            stock,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequest {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub quantity_products_in_stock: Option<u32>,
}

impl StoreRequest {
    pub fn into_new_draft(self) -> DomainResult<StoreDraft> {
        if self.id.is_some() {
            return Err(DomainError::unprocessable("Id was invalidly set on request."));
        }
        self.into_draft()
    }

    /// Full payload; a missing quantity means zero.
    pub fn into_draft(self) -> DomainResult<StoreDraft> {
        let name = self
            .name
            .ok_or_else(|| DomainError::unprocessable("Store Name was not set on request."))?;
        Ok(StoreDraft::new(
            name,
            self.quantity_products_in_stock.unwrap_or_default(),
        ))
    }

    pub fn into_patch(self) -> StorePatch {
        StorePatch {
            name: self.name,
            quantity_products_in_stock: self.quantity_products_in_stock,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseResponse {
    pub business_unit_code: String,
    pub location: String,
    pub capacity: u32,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
}

impl From<Warehouse> for WarehouseResponse {
    fn from(w: Warehouse) -> Self {
        Self {
            business_unit_code: w.business_unit_code.into(),
            location: w.location.into(),
            capacity: w.capacity,
            stock: w.stock,
            created_at: w.created_at,
            archived_at: w.archived_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub stock: u32,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.0,
            name: p.name,
            description: p.description,
            price: p.price,
            stock: p.stock,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    pub id: u64,
    pub name: String,
    pub quantity_products_in_stock: u32,
}

impl From<Store> for StoreResponse {
    fn from(s: Store) -> Self {
        Self {
            id: s.id.0,
            name: s.name,
            quantity_products_in_stock: s.quantity_products_in_stock,
        }
    }
}
