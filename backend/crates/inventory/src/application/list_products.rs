//! List Products Use Case (dashboard)

use std::sync::Arc;

use crate::application::config::InventoryConfig;
use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::page::{PageNumber, page_count};
use crate::error::ProductResult;

/// One dashboard page
pub struct ProductListing {
    pub products: Vec<Product>,
    /// Number of products in the store
    pub total: u64,
    pub current: PageNumber,
    /// `ceil(total / page_size)`
    pub pages: u64,
}

/// Paginated product listing
pub struct ListProductsUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
    config: Arc<InventoryConfig>,
}

impl<R> ListProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<InventoryConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, page: PageNumber) -> ProductResult<ProductListing> {
        let page_size = self.config.page_size;
        let (products, total) = self.repo.page(page, page_size).await?;

        Ok(ProductListing {
            products,
            total,
            current: page,
            pages: page_count(total, page_size),
        })
    }
}
