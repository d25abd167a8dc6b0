//! Delete Product Use Case

use std::sync::Arc;

use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::parse_product_id;
use crate::error::ProductResult;

/// Delete product use case
pub struct DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Idempotent: unknown and malformed ids succeed without touching the store
    pub async fn execute(&self, raw_id: &str) -> ProductResult<()> {
        let Some(product_id) = parse_product_id(raw_id) else {
            return Ok(());
        };

        self.repo.delete(&product_id).await?;

        tracing::info!(product_id = %product_id, "Product deleted");

        Ok(())
    }
}
