use anyhow::Result;
use cart_manager::utils::logger;
use cart_manager::{Session, TomlConfig};
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_failed_add_is_written_to_log_file() -> Result<()> {
    let dir = TempDir::new()?;
    let log_path = dir.path().join("cart.log");
    let subscriber = logger::build_subscriber(false, Some("info"), Some(&log_path))?;

    tracing::subscriber::with_default(subscriber, || -> Result<()> {
        let mut session = Session::from_config(
            &TomlConfig::default(),
            true,
            Cursor::new(b"2\n1\n0\n7\n".to_vec()),
            Vec::new(),
        )?;
        session.run()?;
        Ok(())
    })?;

    let log = std::fs::read_to_string(&log_path)?;
    assert!(log.contains("WARN"));
    assert!(log.contains("Failed to add product to cart: Product Laptop has an invalid quantity: 0"));
    assert!(log.contains("Session ended, cart total: 0"));
    Ok(())
}

#[test]
fn test_successful_session_logs_no_warnings() -> Result<()> {
    let dir = TempDir::new()?;
    let log_path = dir.path().join("logs").join("cart.log");
    let subscriber = logger::build_subscriber(false, None, Some(&log_path))?;

    tracing::subscriber::with_default(subscriber, || -> Result<()> {
        let mut session = Session::from_config(
            &TomlConfig::default(),
            false,
            Cursor::new(b"6\n7\n".to_vec()),
            Vec::new(),
        )?;
        session.run()?;
        Ok(())
    })?;

    let log = std::fs::read_to_string(&log_path)?;
    assert!(!log.contains("WARN"));
    assert!(log.contains("Session ended, cart total: 2050"));
    Ok(())
}
