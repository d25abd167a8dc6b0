//! HTTP Handlers
//!
//! GET pages render templates; POST/PUT workflows end in an [`Outcome`].
//! A form the extractor cannot read is reported like any other bad input.

use std::borrow::Cow;
use std::sync::Arc;

use admin::presentation::CurrentAdmin;
use admin::presentation::flash::{render_page, take_flash};
use axum::Form;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Extension, Path, Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::outcome::Outcome;

use crate::application::config::InventoryConfig;
use crate::application::{
    AddProductUseCase, DeleteProductUseCase, EditProductUseCase, ListProductsUseCase,
    SearchProductsUseCase, ViewProductUseCase,
};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{page::PageNumber, product_id::parse_product_id};
use crate::error::ProductError;
use crate::presentation::dto::{DashboardQuery, ProductForm, SearchForm};
use crate::presentation::router::{ADD_PRODUCT_PATH, DASHBOARD_PATH, LOGIN_PATH, edit_path};
use crate::presentation::views::{
    AddProductPage, DashboardPage, EditProductPage, SearchPage, ViewProductPage,
};

/// Shared state for inventory handlers
#[derive(Clone)]
pub struct InventoryAppState<R>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<InventoryConfig>,
}

// ============================================================================
// Dashboard
// ============================================================================

/// GET /admin/dashboard?page=N
pub async fn dashboard<R>(
    State(state): State<InventoryAppState<R>>,
    Extension(admin): Extension<CurrentAdmin>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Response
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    // e.g. `?page=1&page=2`
    let page = match query {
        Ok(Query(query)) => PageNumber::parse(query.page.as_deref()),
        Err(_) => PageNumber::FIRST,
    };
    let use_case = ListProductsUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.execute(page).await {
        Ok(listing) => {
            let flash = take_flash(&headers);
            render_page(flash.is_some(), DashboardPage::new(&admin, flash, listing))
        }
        Err(e) => e.into_outcome(LOGIN_PATH).into_response(),
    }
}

// ============================================================================
// Add Product
// ============================================================================

/// GET /admin/addProduct
pub async fn add_product_page(
    Extension(admin): Extension<CurrentAdmin>,
    headers: HeaderMap,
) -> Response {
    let flash = take_flash(&headers);
    render_page(flash.is_some(), AddProductPage::new(&admin, flash))
}

/// POST /admin/addProduct
pub async fn add_product<R>(
    State(state): State<InventoryAppState<R>>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Outcome
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => return rejected(rejection, ADD_PRODUCT_PATH),
    };
    let use_case = AddProductUseCase::new(state.repo.clone());

    match use_case.execute(form.into()).await {
        Ok(product) => Outcome::created(
            format!("{} added successfully.", product.name),
            DASHBOARD_PATH,
        ),
        Err(e) => e.into_outcome(ADD_PRODUCT_PATH),
    }
}

// ============================================================================
// View Product
// ============================================================================

/// GET /admin/viewProduct/{id}
pub async fn view_product<R>(
    State(state): State<InventoryAppState<R>>,
    Extension(admin): Extension<CurrentAdmin>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = ViewProductUseCase::new(state.repo.clone());

    match use_case.execute(&id).await {
        Ok(product) => {
            let flash = take_flash(&headers);
            render_page(flash.is_some(), ViewProductPage::new(&admin, flash, product))
        }
        Err(e) => e.into_outcome(DASHBOARD_PATH).into_response(),
    }
}

// ============================================================================
// Edit Product
// ============================================================================

/// GET /admin/editProduct/{id}
pub async fn edit_product_page<R>(
    State(state): State<InventoryAppState<R>>,
    Extension(admin): Extension<CurrentAdmin>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = ViewProductUseCase::new(state.repo.clone());

    match use_case.require(&id).await {
        Ok(product) => {
            let flash = take_flash(&headers);
            render_page(flash.is_some(), EditProductPage::new(&admin, flash, product))
        }
        Err(e) => e.into_outcome(DASHBOARD_PATH).into_response(),
    }
}

/// PUT /admin/editProduct/{id} (POST from HTML forms)
///
/// Input problems send the admin back to the edit form; everything else
/// lands on the dashboard.
pub async fn edit_product<R>(
    State(state): State<InventoryAppState<R>>,
    Path(id): Path<String>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Outcome
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            return match parse_product_id(&id) {
                Some(product_id) => rejected(rejection, edit_path(&product_id)),
                None => rejected(rejection, DASHBOARD_PATH),
            };
        }
    };
    let use_case = EditProductUseCase::new(state.repo.clone());

    match use_case.execute(&id, form.into()).await {
        Ok(_) => Outcome::ok("Product updated successfully.", DASHBOARD_PATH),
        Err(e) => {
            let back: Cow<'static, str> = match (&e, parse_product_id(&id)) {
                (ProductError::NameTaken | ProductError::Validation(_), Some(product_id)) => {
                    edit_path(&product_id).into()
                }
                _ => DASHBOARD_PATH.into(),
            };
            e.into_outcome(back)
        }
    }
}

// ============================================================================
// Delete Product
// ============================================================================

/// POST /admin/deleteProduct/{id}
pub async fn delete_product<R>(
    State(state): State<InventoryAppState<R>>,
    Path(id): Path<String>,
) -> Outcome
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteProductUseCase::new(state.repo.clone());

    match use_case.execute(&id).await {
        Ok(()) => Outcome::ok("Product deleted successfully.", DASHBOARD_PATH),
        Err(e) => e.into_outcome(DASHBOARD_PATH),
    }
}

// ============================================================================
// Search
// ============================================================================

/// POST /admin/searchProduct
pub async fn search_products<R>(
    State(state): State<InventoryAppState<R>>,
    Extension(admin): Extension<CurrentAdmin>,
    headers: HeaderMap,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Response
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => return rejected(rejection, DASHBOARD_PATH).into_response(),
    };
    let use_case = SearchProductsUseCase::new(state.repo.clone());

    match use_case.execute(&form.search_term).await {
        Ok(output) => {
            let flash = take_flash(&headers);
            render_page(flash.is_some(), SearchPage::new(&admin, flash, output))
        }
        Err(e) => e.into_outcome(DASHBOARD_PATH).into_response(),
    }
}

/// Outcome for a request body that never reached the use case
fn rejected(rejection: FormRejection, redirect_to: impl Into<Cow<'static, str>>) -> Outcome {
    ProductError::from(AppError::from(rejection)).into_outcome(redirect_to)
}
