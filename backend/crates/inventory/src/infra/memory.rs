//! In-Memory Repository Implementation
//!
//! Same uniqueness semantics as the PostgreSQL store (names are unique
//! ignoring case). Used by tests and local experiments without a database.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{
    page::PageNumber, product_id::ProductId, product_name::ProductName, search_term::SearchTerm,
};
use crate::error::{ProductError, ProductResult};

/// Memory-backed product repository
///
/// Rows are kept in insertion order. Clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    rows: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Newest first; equal timestamps keep the later insert first
    async fn newest_first(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.rows.read().await.iter().rev().cloned().collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        products
    }
}

fn name_taken(rows: &[Product], name: &ProductName, except: Option<&ProductId>) -> bool {
    rows.iter()
        .any(|p| Some(&p.product_id) != except && p.name.eq_ignore_case(name))
}

impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> ProductResult<()> {
        let mut rows = self.rows.write().await;

        if name_taken(&rows, &product.name, None) {
            return Err(ProductError::DuplicateKey);
        }

        rows.push(product.clone());
        Ok(())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> ProductResult<Option<Product>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|p| &p.product_id == product_id)
            .cloned())
    }

    async fn find_by_name_case_insensitive(
        &self,
        name: &ProductName,
    ) -> ProductResult<Option<Product>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|p| p.name.eq_ignore_case(name))
            .cloned())
    }

    async fn update(&self, product_id: &ProductId, patch: &ProductPatch) -> ProductResult<Product> {
        let mut rows = self.rows.write().await;

        if let Some(name) = &patch.name {
            if name_taken(&rows, name, Some(product_id)) {
                return Err(ProductError::DuplicateKey);
            }
        }

        let product = rows
            .iter_mut()
            .find(|p| &p.product_id == product_id)
            .ok_or(ProductError::ProductNotFound)?;

        product.apply(patch, Utc::now());
        Ok(product.clone())
    }

    async fn delete(&self, product_id: &ProductId) -> ProductResult<()> {
        self.rows
            .write()
            .await
            .retain(|p| &p.product_id != product_id);
        Ok(())
    }

    async fn page(&self, page: PageNumber, page_size: u32) -> ProductResult<(Vec<Product>, u64)> {
        let products = self.newest_first().await;
        let total = products.len() as u64;
        let skip = usize::try_from(page.offset(page_size)).unwrap_or(usize::MAX);

        let items = products
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect();

        Ok((items, total))
    }

    async fn search(&self, term: &SearchTerm) -> ProductResult<Vec<Product>> {
        Ok(self
            .newest_first()
            .await
            .into_iter()
            .filter(|p| term.matches(p.name.as_str()) || term.matches(p.category.as_str()))
            .collect())
    }
}
