//! Raw product fields as submitted by the add and edit forms

use kernel::error::app_error::AppResult;

use crate::domain::entity::product::ProductPatch;
use crate::domain::value_object::{
    category::Category, price::Price, product_name::ProductName, stock::Stock,
};

/// Product form input, unvalidated
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub stock: String,
    pub price: String,
}

/// Validated fields of a new product
pub(crate) struct NewProductFields {
    pub name: ProductName,
    pub category: Category,
    pub stock: Stock,
    pub price: Price,
}

impl ProductInput {
    /// Every field is required; the first failing field is reported
    pub(crate) fn validate_new(&self) -> AppResult<NewProductFields> {
        Ok(NewProductFields {
            name: ProductName::new(&self.name)?,
            category: Category::new(&self.category)?,
            stock: Stock::parse(&self.stock)?,
            price: Price::parse(&self.price)?,
        })
    }

    /// The name is required; blank optional fields leave the stored value as is
    pub(crate) fn validate_patch(&self) -> AppResult<(ProductName, ProductPatch)> {
        let name = ProductName::new(&self.name)?;
        let patch = ProductPatch {
            name: Some(name.clone()),
            category: non_blank(&self.category).map(Category::new).transpose()?,
            stock: non_blank(&self.stock).map(Stock::parse).transpose()?,
            price: non_blank(&self.price).map(Price::parse).transpose()?,
        };
        Ok((name, patch))
    }
}

fn non_blank(raw: &str) -> Option<&str> {
    Some(raw).filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, category: &str, stock: &str, price: &str) -> ProductInput {
        ProductInput {
            name: name.into(),
            category: category.into(),
            stock: stock.into(),
            price: price.into(),
        }
    }

    #[test]
    fn test_validate_new_reports_first_failure() {
        let err = input("Widget", "", "-1", "x").validate_new().err().unwrap();
        assert_eq!(err.message(), "Category is required.");
    }

    #[test]
    fn test_validate_patch_skips_blank_fields() {
        let (name, patch) = input("Widget", " ", "", "4.5").validate_patch().unwrap();
        assert_eq!(name.as_str(), "Widget");
        assert!(patch.category.is_none());
        assert!(patch.stock.is_none());
        assert_eq!(patch.price.unwrap().to_string(), "4.50");
    }

    #[test]
    fn test_validate_patch_requires_name() {
        let err = input("", "Tools", "1", "1").validate_patch().unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }
}
