//! View Product Use Case

use std::sync::Arc;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::parse_product_id;
use crate::error::{ProductError, ProductResult};

/// Look up a single product by the id from the URL
pub struct ViewProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> ViewProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Absent and malformed ids both yield `None`
    pub async fn execute(&self, raw_id: &str) -> ProductResult<Option<Product>> {
        match parse_product_id(raw_id) {
            Some(product_id) => self.repo.find_by_id(&product_id).await,
            None => Ok(None),
        }
    }

    /// Like [`execute`](Self::execute), but absence is an error
    pub async fn require(&self, raw_id: &str) -> ProductResult<Product> {
        self.execute(raw_id)
            .await?
            .ok_or(ProductError::ProductNotFound)
    }
}
