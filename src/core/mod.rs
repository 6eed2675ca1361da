pub mod cart;
pub mod catalog;

pub use crate::domain::model::{CartLine, Product, ProductId, ProductRef, ProductSpec};
pub use crate::utils::error::{CartError, Result};
