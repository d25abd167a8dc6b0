//! Search Products Use Case

use std::sync::Arc;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::search_term::SearchTerm;
use crate::error::ProductResult;

/// Search result
pub struct SearchOutput {
    /// The term after sanitizing
    pub term: SearchTerm,
    pub products: Vec<Product>,
}

/// Search products use case
pub struct SearchProductsUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> SearchProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_term: &str) -> ProductResult<SearchOutput> {
        let term = SearchTerm::sanitize(raw_term);
        let products = self.repo.search(&term).await?;

        tracing::debug!(term = %term, results = products.len(), "Product search");

        Ok(SearchOutput { term, products })
    }
}
