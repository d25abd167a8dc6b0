//! Value Object Module

pub mod admin_id;
pub mod admin_password;
pub mod email;
pub mod person_name;
