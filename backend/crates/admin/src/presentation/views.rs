//! Page templates

use askama::Template;
use askama_web::WebTemplate;
use kernel::flash::FlashMessage;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginPage {
    pub title: &'static str,
    pub flash: Option<FlashMessage>,
}

impl LoginPage {
    pub fn new(flash: Option<FlashMessage>) -> Self {
        Self {
            title: "Admin Login | Inventory Management",
            flash,
        }
    }
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/signup.html")]
pub struct SignupPage {
    pub title: &'static str,
    pub flash: Option<FlashMessage>,
}

impl SignupPage {
    pub fn new(flash: Option<FlashMessage>) -> Self {
        Self {
            title: "Admin Signup | Inventory Management",
            flash,
        }
    }
}
