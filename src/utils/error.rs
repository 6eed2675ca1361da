use thiserror::Error;

/// Failures raised by cart operations. Nothing is mutated when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Product {product} {reason}")]
    InvalidOperation { product: String, reason: String },

    #[error("Product {product} not found in the cart")]
    NotFound { product: String },
}

impl CartError {
    pub fn unavailable(product: &str) -> Self {
        CartError::InvalidOperation {
            product: product.to_string(),
            reason: "is unavailable".to_string(),
        }
    }

    pub fn invalid_quantity(product: &str, quantity: i64) -> Self {
        CartError::InvalidOperation {
            product: product.to_string(),
            reason: format!("has an invalid quantity: {}", quantity),
        }
    }

    pub fn not_found(product: &str) -> Self {
        CartError::NotFound {
            product: product.to_string(),
        }
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, CartError::InvalidOperation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CartError::NotFound { .. })
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cart operation failed: {0}")]
    CartError(#[from] CartError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unknown product ID: {id}")]
    UnknownProduct { id: i64 },

    #[error("Invalid catalog: {message}")]
    CatalogError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logging setup failed: {message}")]
    LoggingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Cart,
    Catalog,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::CartError(_) => ErrorCategory::Cart,
            AppError::UnknownProduct { .. } | AppError::CatalogError { .. } => {
                ErrorCategory::Catalog
            }
            AppError::TomlError(_)
            | AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AppError::IoError(_) | AppError::LoggingError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Cart => ErrorSeverity::Low,
            ErrorCategory::Catalog => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::CartError(CartError::InvalidOperation { .. }) => {
                "Check that the product is available and the quantity is positive"
            }
            AppError::CartError(CartError::NotFound { .. }) => {
                "Add the product to the cart before changing it"
            }
            AppError::UnknownProduct { .. } => "Use 'Display Products' to list valid IDs",
            AppError::CatalogError { .. } => "Make sure every product has a unique ID and a name",
            AppError::TomlError(_) => "Make sure the config file is valid TOML",
            AppError::MissingConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file"
            }
            AppError::IoError(_) => "Check file permissions and available disk space",
            AppError::LoggingError { .. } => "Pass --no-log-file or choose another --log-file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::CartError(e) => e.to_string(),
            AppError::UnknownProduct { .. } => "Invalid product ID.".to_string(),
            AppError::IoError(_) => {
                "An unexpected error occurred. Please check the log for details.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
