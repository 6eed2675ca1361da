pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::Session;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{cart::Cart, catalog::Catalog};
pub use domain::model::{Product, ProductId, ProductRef};
pub use utils::error::{AppError, CartError, Result};
