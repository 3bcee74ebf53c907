//! File-based logging initialization

use super::config::DebugConfig;
use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up logging with:
/// - A console layer for development runs
/// - Daily log rotation for the file log
/// - Non-blocking writes to prevent UI lag
/// - Panic hook integration for crash logging
///
/// Logs are written to `logs/showroom.log` by default; the directory is
/// overridable with `SAMA_LOG_DIR` and the filter with `SAMA_LOG`.
pub fn init() {
    let config = DebugConfig::from_env();

    // Create logs directory if it doesn't exist
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return;
    }

    // Create file appender with daily rotation
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "showroom.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Configure log filter from environment
    let env_filter = EnvFilter::try_from_env("SAMA_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("showroom=info,warn"));

    let console_layer = fmt::layer().with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        log_file = %config.log_file.display(),
        log_level = %config.log_level,
        debug_ui = config.show_debug_ui,
        "Logging initialized"
    );

    setup_panic_hook();

    // Keep the appender guard alive for the lifetime of the program
    std::mem::forget(guard);
}

/// Set up panic hook to log panics with full context
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::force_capture();

        eprintln!("Panic at {}: {}", location, message);

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        // Call the default handler so the process still aborts normally
        default_panic(panic_info);
    }));
}
