use crate::utils::error::{AppError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter; `RUST_LOG` wins over `level` and `verbose`.
pub fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match (verbose, level) {
            (true, _) => "cart_manager=debug,info".to_string(),
            (false, Some(level)) => format!("cart_manager={}", level.to_ascii_lowercase()),
            (false, None) => "cart_manager=info".to_string(),
        };
        EnvFilter::new(directive)
    })
}

/// Opens the log file, truncating anything left from a previous session.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    Ok(file)
}

/// Console layer on stderr, plus a plain-text file layer when `log_file` is set.
pub fn build_subscriber(
    verbose: bool,
    level: Option<&str>,
    log_file: Option<&Path>,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let file_layer = match log_file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .with(file_layer))
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>, log_file: Option<&Path>) -> Result<()> {
    build_subscriber(verbose, level, log_file)?
        .try_init()
        .map_err(|e| AppError::LoggingError {
            message: e.to_string(),
        })
}
