//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{
    category::Category, page::PageNumber, price::Price, product_id::ProductId,
    product_name::ProductName, search_term::SearchTerm, stock::Stock,
};
use crate::error::{ProductError, ProductResult};

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PRODUCT_COLUMNS: &str = r#"
    product_id,
    name,
    category,
    stock,
    price,
    created_at,
    updated_at
"#;

impl ProductRepository for PgProductRepository {
    async fn create(&self, product: &Product) -> ProductResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                name,
                category,
                stock,
                price,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(product.name.as_str())
        .bind(product.category.as_str())
        .bind(product.stock.value())
        .bind(product.price.value())
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> ProductResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn find_by_name_case_insensitive(
        &self,
        name: &ProductName,
    ) -> ProductResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE lower(name) = lower($1)"
        ))
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn update(&self, product_id: &ProductId, patch: &ProductPatch) -> ProductResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                stock = COALESCE($4, stock),
                price = COALESCE($5, price),
                updated_at = $6
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product_id.as_uuid())
        .bind(patch.name.as_ref().map(ProductName::as_str))
        .bind(patch.category.as_ref().map(Category::as_str))
        .bind(patch.stock.map(|s| s.value()))
        .bind(patch.price.map(|p| p.value()))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProductRow::into_product)
            .ok_or(ProductError::ProductNotFound)
    }

    async fn delete(&self, product_id: &ProductId) -> ProductResult<()> {
        sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn page(&self, page: PageNumber, page_size: u32) -> ProductResult<(Vec<Product>, u64)> {
        let offset = i64::try_from(page.offset(page_size))
            .map_err(|_| ProductError::Internal("Page offset out of range".into()))?;

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(i64::from(page_size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok((
            rows.into_iter().map(ProductRow::into_product).collect(),
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn search(&self, term: &SearchTerm) -> ProductResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE name ILIKE $1 OR category ILIKE $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(term.like_pattern())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    name: String,
    category: String,
    stock: i32,
    price: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            name: ProductName::from_db(self.name),
            category: Category::from_db(self.category),
            stock: Stock::from_db(self.stock),
            price: Price::from_db(self.price),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
