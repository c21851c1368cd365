//! Startup validation errors
//!
//! The tick itself never fails. Everything that can go wrong happens while
//! loading tuning or sprite data, before the first tick runs.

use thiserror::Error;

/// Configuration and asset loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A sprite category has no entries to pick from
    #[error("Sprite set '{0}' is empty")]
    EmptySpriteSet(&'static str),

    /// A tuning value is outside its usable range
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        name: &'static str,
        reason: &'static str,
    },
}
