//! Form and query DTOs
//!
//! Missing fields default to empty strings so that validation, not
//! extraction, reports them.

use serde::Deserialize;

use crate::application::ProductInput;

/// Add and edit product form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub stock: String,
    pub price: String,
}

impl From<ProductForm> for ProductInput {
    fn from(form: ProductForm) -> Self {
        Self {
            name: form.name,
            category: form.category,
            stock: form.stock,
            price: form.price,
        }
    }
}

/// Search form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Dashboard query string; `page` is parsed leniently by `PageNumber`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub page: Option<String>,
}
