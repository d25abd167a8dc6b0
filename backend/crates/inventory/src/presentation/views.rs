//! Page templates

use admin::presentation::CurrentAdmin;
use askama::Template;
use askama_web::WebTemplate;
use kernel::flash::FlashMessage;

use crate::application::{ProductListing, SearchOutput};
use crate::domain::entity::product::Product;

/// Dashboard with the paginated product table.
#[derive(Template, WebTemplate)]
#[template(path = "inventory/dashboard.html")]
pub struct DashboardPage {
    pub title: &'static str,
    pub flash: Option<FlashMessage>,
    pub admin_name: String,
    pub products: Vec<Product>,
    pub total: u64,
    pub current: u32,
    pub pages: u64,
    pub page_links: Vec<PageLink>,
}

/// One entry of the dashboard pager
pub struct PageLink {
    pub number: u64,
    pub is_current: bool,
}

impl DashboardPage {
    pub fn new(admin: &CurrentAdmin, flash: Option<FlashMessage>, listing: ProductListing) -> Self {
        Self {
            title: "Admin Dashboard | Inventory Management",
            flash,
            admin_name: admin.full_name(),
            products: listing.products,
            total: listing.total,
            current: listing.current.get(),
            pages: listing.pages,
            page_links: (1..=listing.pages)
                .map(|number| PageLink {
                    number,
                    is_current: number == u64::from(listing.current.get()),
                })
                .collect(),
        }
    }
}

/// Empty add product form.
#[derive(Template, WebTemplate)]
#[template(path = "inventory/add_product.html")]
pub struct AddProductPage {
    pub title: &'static str,
    pub flash: Option<FlashMessage>,
    pub admin_name: String,
}

impl AddProductPage {
    pub fn new(admin: &CurrentAdmin, flash: Option<FlashMessage>) -> Self {
        Self {
            title: "Add Product | Inventory Management",
            flash,
            admin_name: admin.full_name(),
        }
    }
}

/// Product detail; renders a not-found state when `product` is `None`.
#[derive(Template, WebTemplate)]
#[template(path = "inventory/view_product.html")]
pub struct ViewProductPage {
    pub title: &'static str,
    pub flash: Option<FlashMessage>,
    pub admin_name: String,
    pub product: Option<Product>,
}

impl ViewProductPage {
    pub fn new(admin: &CurrentAdmin, flash: Option<FlashMessage>, product: Option<Product>) -> Self {
        Self {
            title: "View Product | Inventory Management",
            flash,
            admin_name: admin.full_name(),
            product,
        }
    }
}

/// Edit form prefilled with the stored product.
#[derive(Template, WebTemplate)]
#[template(path = "inventory/edit_product.html")]
pub struct EditProductPage {
    pub title: &'static str,
    pub flash: Option<FlashMessage>,
    pub admin_name: String,
    pub product: Product,
}

impl EditProductPage {
    pub fn new(admin: &CurrentAdmin, flash: Option<FlashMessage>, product: Product) -> Self {
        Self {
            title: "Edit Product | Inventory Management",
            flash,
            admin_name: admin.full_name(),
            product,
        }
    }
}

/// Search results.
#[derive(Template, WebTemplate)]
#[template(path = "inventory/search.html")]
pub struct SearchPage {
    pub title: &'static str,
    pub flash: Option<FlashMessage>,
    pub admin_name: String,
    pub term: String,
    pub products: Vec<Product>,
}

impl SearchPage {
    pub fn new(admin: &CurrentAdmin, flash: Option<FlashMessage>, output: SearchOutput) -> Self {
        Self {
            title: "Search Product | Inventory Management",
            flash,
            admin_name: admin.full_name(),
            term: output.term.to_string(),
            products: output.products,
        }
    }
}
