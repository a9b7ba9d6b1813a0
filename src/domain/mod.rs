pub mod phone;
pub mod types;
pub mod user;
