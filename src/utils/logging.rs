//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the SportClub client.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, SportClubError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held for the
/// lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "sportclub.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| SportClubError::Config(format!("Failed to install subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(admin_id: i64, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log API errors with context, at the level given by the error's severity
///
/// Transport failures are errors; `success: false` answers are warnings.
pub fn log_api_error(endpoint: &str, err: &SportClubError, context: Option<&str>) {
    let severity = err.severity();
    match severity {
        ErrorSeverity::Info => info!(
            endpoint = endpoint,
            error = %err,
            context = context,
            "API request not sent"
        ),
        ErrorSeverity::Warning => warn!(
            endpoint = endpoint,
            error = %err,
            context = context,
            "API request rejected"
        ),
        ErrorSeverity::Error | ErrorSeverity::Critical => error!(
            endpoint = endpoint,
            error = %err,
            context = context,
            severity = %severity,
            "API transport error"
        ),
    }
}

/// Log a view being mounted into a container or modal
pub fn log_view_render(target: &str, items: usize) {
    debug!(target_id = target, items = items, "View rendered");
}
