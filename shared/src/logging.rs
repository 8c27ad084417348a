//! Shared logging utilities for consistent tracing across generation stages

use chrono::{DateTime, Local};
use std::fmt;
use tracing::{error, info};

/// Pipeline stage attached to every log event
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Country and language resolution
    Resolve,
    /// Fan-out coordination
    Generate,
    /// Per-country combination worker
    Worker(String),
    /// Output file writing
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Resolve => write!(f, "resolve"),
            Stage::Generate => write!(f, "generate"),
            Stage::Worker(country) => write!(f, "worker_{}", country.to_lowercase()),
            Stage::Output => write!(f, "output"),
        }
    }
}

/// Build the default filter directive for a base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("tgen={base_level},shared={base_level},reqwest=warn,hyper=warn")
}

/// Initialize the stderr tracing subscriber.
///
/// `RUST_LOG` overrides the computed directive when it is set.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Local> = Local::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for stage-aware info logging
#[macro_export]
macro_rules! stage_info {
    ($stage:expr, $($arg:tt)*) => {
        tracing::info!(
            stage = %$stage,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for stage-aware warning logging
#[macro_export]
macro_rules! stage_warn {
    ($stage:expr, $($arg:tt)*) => {
        tracing::warn!(
            stage = %$stage,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for stage-aware error logging
#[macro_export]
macro_rules! stage_error {
    ($stage:expr, $($arg:tt)*) => {
        tracing::error!(
            stage = %$stage,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for stage-aware debug logging
#[macro_export]
macro_rules! stage_debug {
    ($stage:expr, $($arg:tt)*) => {
        tracing::debug!(
            stage = %$stage,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(stage: &Stage, details: &str) {
    info!(
        stage = %stage,
        timestamp = format_timestamp(),
        "Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(stage: &Stage, context: &str, error: &dyn std::fmt::Display) {
    error!(
        stage = %stage,
        timestamp = format_timestamp(),
        error = %error,
        "{} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(stage: &Stage, message: &str) {
    info!(
        stage = %stage,
        timestamp = format_timestamp(),
        "{}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(stage: &Stage, action: &str, details: &str) {
    info!(
        stage = %stage,
        timestamp = format_timestamp(),
        "{}: {}",
        action,
        details
    );
}
