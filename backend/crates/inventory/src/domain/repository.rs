//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::value_object::{
    page::PageNumber, product_id::ProductId, product_name::ProductName, search_term::SearchTerm,
};
use crate::error::ProductResult;

/// Product store
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Persist a new product
    ///
    /// Callers check the name first; a lost race still fails with
    /// `ProductError::DuplicateKey`.
    async fn create(&self, product: &Product) -> ProductResult<()>;

    /// Find product by ID
    async fn find_by_id(&self, product_id: &ProductId) -> ProductResult<Option<Product>>;

    /// Find the product whose name equals `name` ignoring case
    async fn find_by_name_case_insensitive(
        &self,
        name: &ProductName,
    ) -> ProductResult<Option<Product>>;

    /// Merge `patch` into the stored product and refresh `updated_at`
    ///
    /// Fails with `ProductError::ProductNotFound` when the id is absent.
    async fn update(&self, product_id: &ProductId, patch: &ProductPatch)
    -> ProductResult<Product>;

    /// Delete a product; deleting an absent id is not an error
    async fn delete(&self, product_id: &ProductId) -> ProductResult<()>;

    /// One page of products, newest first, plus the total count
    async fn page(&self, page: PageNumber, page_size: u32) -> ProductResult<(Vec<Product>, u64)>;

    /// Products whose name or category contains the term, newest first
    async fn search(&self, term: &SearchTerm) -> ProductResult<Vec<Product>>;
}
