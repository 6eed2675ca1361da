use crate::core::catalog::Catalog;
use crate::domain::model::{ProductId, ProductSpec};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LOG_FILE: &str = "cart.log";

/// Startup configuration read from a TOML file. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogConfig>,
    pub cart: Option<CartConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub products: Vec<ProductSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartConfig {
    #[serde(default)]
    pub initial: Vec<SeedLine>,
}

/// A line added to the cart before the menu starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let pattern = r"\$\{([^}]+)\}";
        let re = Regex::new(pattern).map_err(|e| AppError::InvalidConfigValueError {
            field: "environment".to_string(),
            value: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn has_custom_catalog(&self) -> bool {
        self.catalog
            .as_ref()
            .is_some_and(|catalog| !catalog.products.is_empty())
    }

    /// The configured catalog, or Laptop/HeadPhone when none is configured.
    pub fn build_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(catalog) if !catalog.products.is_empty() => Catalog::from_specs(&catalog.products),
            _ => Ok(Catalog::default_products()),
        }
    }

    /// Lines to seed the cart with. Without a `[cart]` section the default
    /// catalog starts with two laptops and one headphone; a custom catalog
    /// starts empty.
    pub fn seed_lines(&self) -> Vec<SeedLine> {
        match &self.cart {
            Some(cart) => cart.initial.clone(),
            None if self.has_custom_catalog() => Vec::new(),
            None => vec![
                SeedLine {
                    product_id: 1,
                    quantity: 2,
                },
                SeedLine {
                    product_id: 2,
                    quantity: 1,
                },
            ],
        }
    }

    pub fn log_file(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.file.as_deref())
            .unwrap_or(DEFAULT_LOG_FILE)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            if catalog.products.is_empty() {
                return Err(AppError::MissingConfigError {
                    field: "catalog.products".to_string(),
                });
            }
            for product in &catalog.products {
                validation::validate_non_empty_string("catalog.products.name", &product.name)?;
            }
            validation::validate_unique_ids(
                "catalog.products.id",
                catalog.products.iter().map(|p| p.id),
            )?;
        }

        let catalog = self.build_catalog()?;
        for line in self.seed_lines() {
            let reason = match catalog.get(line.product_id) {
                Err(_) => Some("No product with this ID in the catalog"),
                Ok(product) if !product.is_available() => Some("Product is unavailable"),
                Ok(_) => None,
            };
            if let Some(reason) = reason {
                return Err(AppError::InvalidConfigValueError {
                    field: "cart.initial.product_id".to_string(),
                    value: line.product_id.to_string(),
                    reason: reason.to_string(),
                });
            }
            validation::validate_positive_number("cart.initial.quantity", line.quantity, 1)?;
        }

        validation::validate_path("logging.file", self.log_file())?;
        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
