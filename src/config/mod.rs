pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cart-manager")]
#[command(about = "Interactive shopping cart manager")]
pub struct CliConfig {
    /// Path to a TOML file with the catalog, initial cart and logging settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file path, overrides the config file
    #[arg(long)]
    pub log_file: Option<String>,

    /// Only log to the console
    #[arg(long)]
    pub no_log_file: bool,

    /// Start with an empty cart instead of the configured initial lines
    #[arg(long)]
    pub empty_cart: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Log file to open, if any, after applying the command line overrides.
    pub fn resolved_log_file(&self, file_config: &toml_config::TomlConfig) -> Option<String> {
        if self.no_log_file {
            return None;
        }
        Some(
            self.log_file
                .clone()
                .unwrap_or_else(|| file_config.log_file().to_string()),
        )
    }
}
