//! Edit Product Use Case

use std::sync::Arc;

use crate::application::product_input::ProductInput;
use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::parse_product_id;
use crate::error::{ProductError, ProductResult};

/// Edit product use case
pub struct EditProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> EditProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Name uniqueness is checked against every other product, so renaming a
    /// product to its own name in a different case is allowed.
    pub async fn execute(&self, raw_id: &str, input: ProductInput) -> ProductResult<Product> {
        let (name, patch) = input.validate_patch()?;
        let product_id = parse_product_id(raw_id);

        if let Some(existing) = self.repo.find_by_name_case_insensitive(&name).await? {
            if Some(existing.product_id) != product_id {
                return Err(ProductError::NameTaken);
            }
        }

        let product_id = product_id.ok_or(ProductError::ProductNotFound)?;

        let product = match self.repo.update(&product_id, &patch).await {
            Err(ProductError::DuplicateKey) => return Err(ProductError::NameTaken),
            result => result?,
        };

        tracing::info!(
            product_id = %product.product_id,
            name = %product.name,
            "Product updated"
        );

        Ok(product)
    }
}
