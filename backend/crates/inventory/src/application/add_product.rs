//! Add Product Use Case

use std::sync::Arc;

use crate::application::product_input::ProductInput;
use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{ProductError, ProductResult};

/// Add product use case
pub struct AddProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> AddProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ProductInput) -> ProductResult<Product> {
        let fields = input.validate_new()?;

        if self
            .repo
            .find_by_name_case_insensitive(&fields.name)
            .await?
            .is_some()
        {
            return Err(ProductError::NameTaken);
        }

        let product = Product::new(fields.name, fields.category, fields.stock, fields.price);

        // The unique index on lower(name) decides when two adds race
        match self.repo.create(&product).await {
            Err(ProductError::DuplicateKey) => return Err(ProductError::NameTaken),
            result => result?,
        }

        tracing::info!(
            product_id = %product.product_id,
            name = %product.name,
            "Product added"
        );

        Ok(product)
    }
}
