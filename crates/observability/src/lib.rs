//! Tracing/logging setup shared by binaries and test harnesses built on the model.

/// Logging configuration (format, default filter).
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogConfig, LogFormat};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&LogConfig::from_env());
}

/// Initialize process-wide tracing with an explicit configuration.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with(config: &LogConfig) -> bool {
    tracing::init_with(config)
}
