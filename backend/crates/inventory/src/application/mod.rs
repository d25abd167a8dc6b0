//! Application Layer
//!
//! Use cases and application services.

pub mod add_product;
pub mod config;
pub mod delete_product;
pub mod edit_product;
pub mod list_products;
pub mod product_input;
pub mod search_products;
pub mod view_product;

// Re-exports
pub use add_product::AddProductUseCase;
pub use config::InventoryConfig;
pub use delete_product::DeleteProductUseCase;
pub use edit_product::EditProductUseCase;
pub use list_products::{ListProductsUseCase, ProductListing};
pub use product_input::ProductInput;
pub use search_products::{SearchOutput, SearchProductsUseCase};
pub use view_product::ViewProductUseCase;
