//! Tracing and logging (shared setup).

use serde::Deserialize;

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Logging options.
///
/// `RUST_LOG`, when set, takes precedence over `filter`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Fallback `EnvFilter` directive.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
        }
    }
}

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LogConfig) {
    tracing::init(config);
}
