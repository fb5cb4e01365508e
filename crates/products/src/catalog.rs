use tracing::info;

use fulfilment_core::{DomainError, DomainResult};

use crate::ports::ProductRepository;
use crate::product::{Product, ProductDraft, ProductId};

/// CRUD over the product repository with existence and name checks.
pub struct ProductCatalog<R> {
    repository: R,
}

impl<R> ProductCatalog<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> DomainResult<Vec<Product>> {
        self.repository.list()
    }

    pub fn get(&self, id: ProductId) -> DomainResult<Product> {
        self.repository.find(id)?.ok_or_else(|| missing(id))
    }

    #[tracing::instrument(name = "product.create", skip_all, fields(name = %draft.name))]
    pub fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        draft.validate()?;
        let product = self.repository.insert(&draft)?;
        info!(id = %product.id, "product created");
        Ok(product)
    }

    /// Full replacement of an existing product. The name is checked before the id.
    #[tracing::instrument(name = "product.update", skip_all, fields(id = %id))]
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        draft.validate()?;
        let mut product = self.get(id)?;
        product.apply(draft);
        self.repository.save(&product)?;
        info!("product updated");
        Ok(product)
    }

    #[tracing::instrument(name = "product.delete", skip_all, fields(id = %id))]
    pub fn delete(&self, id: ProductId) -> DomainResult<()> {
        if !self.repository.delete(id)? {
            return Err(missing(id));
        }
        info!("product deleted");
        Ok(())
    }
}

fn missing(id: ProductId) -> DomainError {
    DomainError::not_found(format!("Product with id of {id} does not exist."))
}
