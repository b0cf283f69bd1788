use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the in-memory fixture source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Simulated latency per request in milliseconds (default: 1000).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Number of non-empty notification pages (default: 2).
    #[serde(default = "default_page_count")]
    pub page_count: u32,
}

/// Settings for the pagination controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Data source request timeout in milliseconds (default: 10000).
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_page_count() -> u32 {
    2
}

fn default_fetch_timeout_ms() -> u64 {
    10_000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            page_count: default_page_count(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
