//! Inventory Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::InventoryConfig;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::ProductId;
use crate::presentation::handlers::{self, InventoryAppState};

pub use admin::presentation::router::{DASHBOARD_PATH, LOGIN_PATH};

pub const ADD_PRODUCT_PATH: &str = "/admin/addProduct";
pub const VIEW_PRODUCT_PATH: &str = "/admin/viewProduct/{id}";
pub const EDIT_PRODUCT_PATH: &str = "/admin/editProduct/{id}";
pub const DELETE_PRODUCT_PATH: &str = "/admin/deleteProduct/{id}";
pub const SEARCH_PRODUCT_PATH: &str = "/admin/searchProduct";

/// Concrete edit page URL for a product
pub fn edit_path(product_id: &ProductId) -> String {
    format!("/admin/editProduct/{}", product_id)
}

/// Create the Inventory router for any repository implementation
///
/// Handlers read `CurrentAdmin` from the request extensions, so the router
/// must be wrapped with `admin::presentation::protect`.
pub fn inventory_router<R>(repo: Arc<R>, config: Arc<InventoryConfig>) -> Router
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let state = InventoryAppState { repo, config };

    Router::new()
        .route(DASHBOARD_PATH, get(handlers::dashboard::<R>))
        .route(
            ADD_PRODUCT_PATH,
            get(handlers::add_product_page).post(handlers::add_product::<R>),
        )
        .route(VIEW_PRODUCT_PATH, get(handlers::view_product::<R>))
        .route(
            EDIT_PRODUCT_PATH,
            get(handlers::edit_product_page::<R>)
                .put(handlers::edit_product::<R>)
                .post(handlers::edit_product::<R>),
        )
        .route(DELETE_PRODUCT_PATH, post(handlers::delete_product::<R>))
        .route(SEARCH_PRODUCT_PATH, post(handlers::search_products::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_path() {
        let id = ProductId::new();
        assert_eq!(edit_path(&id), format!("/admin/editProduct/{}", id.as_uuid()));
    }
}
