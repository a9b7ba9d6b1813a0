pub mod auth;
pub mod phones;
