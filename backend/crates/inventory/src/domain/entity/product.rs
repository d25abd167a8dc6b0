//! Product Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    category::Category, price::Price, product_id::ProductId, product_name::ProductName,
    stock::Stock,
};

/// A product record
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: ProductId,
    pub name: ProductName,
    pub category: Category,
    pub stock: Stock,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a fresh id
    pub fn new(name: ProductName, category: Category, stock: Stock, price: Price) -> Self {
        let now = Utc::now();
        Self {
            product_id: ProductId::new(),
            name,
            category,
            stock,
            price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the provided fields and touch `updated_at`
    pub fn apply(&mut self, patch: &ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        self.updated_at = now;
    }
}

/// Fields of an edit; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<ProductName>,
    pub category: Option<Category>,
    pub stock: Option<Stock>,
    pub price: Option<Price>,
}
