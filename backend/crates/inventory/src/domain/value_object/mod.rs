pub mod category;
pub mod page;
pub mod price;
pub mod product_id;
pub mod product_name;
pub mod search_term;
pub mod stock;

mod label;
