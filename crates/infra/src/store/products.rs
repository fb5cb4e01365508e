use fulfilment_core::{DomainError, DomainResult};
use fulfilment_products::{Product, ProductDraft, ProductId, ProductRepository};

use super::sequenced::SequencedTable;

/// In-memory product repository (tests/dev).
#[derive(Debug)]
pub struct InMemoryProductRepository {
    table: SequencedTable<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            table: SequencedTable::new("product"),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list(&self) -> DomainResult<Vec<Product>> {
        self.table.list()
    }

    fn find(&self, id: ProductId) -> DomainResult<Option<Product>> {
        self.table.find(id.0)
    }

    fn insert(&self, draft: &ProductDraft) -> DomainResult<Product> {
        self.table
            .insert_with(|id| Product::from_draft(ProductId(id), draft.clone()))
    }

    fn save(&self, product: &Product) -> DomainResult<()> {
        if !self.table.replace(product.id.0, product.clone())? {
            return Err(DomainError::not_found(format!(
                "product {} not stored",
                product.id
            )));
        }
        Ok(())
    }

    fn delete(&self, id: ProductId) -> DomainResult<bool> {
        self.table.remove(id.0)
    }
}
