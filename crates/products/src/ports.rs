use std::sync::Arc;

use fulfilment_core::DomainResult;

use crate::product::{Product, ProductDraft, ProductId};

/// Persistent storage of products.
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Ordered by id.
    fn list(&self) -> DomainResult<Vec<Product>>;
    fn find(&self, id: ProductId) -> DomainResult<Option<Product>>;
    /// Stores the draft under a fresh id.
    fn insert(&self, draft: &ProductDraft) -> DomainResult<Product>;
    /// Overwrites an existing row; `NotFound` when the id is not stored.
    fn save(&self, product: &Product) -> DomainResult<()>;
    /// Returns whether a row was removed.
    fn delete(&self, id: ProductId) -> DomainResult<bool>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn list(&self) -> DomainResult<Vec<Product>> {
        (**self).list()
    }

    fn find(&self, id: ProductId) -> DomainResult<Option<Product>> {
        (**self).find(id)
    }

    fn insert(&self, draft: &ProductDraft) -> DomainResult<Product> {
        (**self).insert(draft)
    }

    fn save(&self, product: &Product) -> DomainResult<()> {
        (**self).save(product)
    }

    fn delete(&self, id: ProductId) -> DomainResult<bool> {
        (**self).delete(id)
    }
}
