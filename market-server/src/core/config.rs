//! Server configuration
//!
//! All settings load from environment variables with sensible defaults:
//!
//! | Variable           | Default                  | Meaning |
//! |--------------------|--------------------------|---------|
//! | WORK_DIR           | /var/lib/market/server   | data + log directory |
//! | HTTP_PORT          | 3000                     | HTTP API port |
//! | TIMEZONE           | UTC                      | business timezone for reports |
//! | STRICT_STATUS_FLOW | true                     | reject out-of-order transitions |
//! | ENVIRONMENT        | development              | development / staging / production |

use std::path::PathBuf;

use crate::orders::TransitionPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Business timezone — all report windows and buckets resolve here
    pub timezone: chrono_tz::Tz,
    /// Strict fulfillment state machine (forward jumps need an explicit
    /// override); false reproduces the legacy permissive behavior
    pub strict_status_flow: bool,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let timezone = std::env::var("TIMEZONE")
            .ok()
            .and_then(|tz| {
                tz.parse::<chrono_tz::Tz>()
                    .map_err(|_| tracing::warn!(timezone = %tz, "unknown TIMEZONE, falling back to UTC"))
                    .ok()
            })
            .unwrap_or(chrono_tz::UTC);

        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/market/server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone,
            strict_status_flow: std::env::var("STRICT_STATUS_FLOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Database directory under the working directory.
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Log directory under the working directory.
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Fulfillment-axis transition policy.
    pub fn transition_policy(&self) -> TransitionPolicy {
        if self.strict_status_flow {
            TransitionPolicy::strict()
        } else {
            TransitionPolicy::permissive()
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
