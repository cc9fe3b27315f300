//! Catalog domain types.

pub mod product;
pub mod user;

pub use product::{Category, Product};
pub use user::CurrentUser;
