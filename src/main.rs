use cart_manager::utils::error::{AppError, ErrorSeverity};
use cart_manager::utils::{logger, validation::Validate};
use cart_manager::{CliConfig, Session, TomlConfig};
use clap::Parser;
use std::path::Path;

fn main() {
    let args = CliConfig::parse();

    let config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    let log_file = args.resolved_log_file(&config);
    if let Err(e) = logger::init_cli_logger(
        args.verbose,
        config.log_level(),
        log_file.as_deref().map(Path::new),
    ) {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    tracing::info!("Starting cart-manager");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = Session::from_config(&config, args.empty_cart, stdin.lock(), stdout.lock())
        .and_then(|mut session| session.run());

    if let Err(e) = result {
        tracing::error!(
            "An unexpected error occurred: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(e: &AppError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}
