use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FILTER: &str = "yomi_core=info,yomi_app=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
    /// Used when `RUST_LOG` is not set
    pub filter: String,
}

impl LoggingConfig {
    pub fn new() -> Self {
        let json = env::var("YOMI_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self {
            json,
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}
