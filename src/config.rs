//! Logger configuration.
//!
//! All types derive Serde traits so services can embed the logging section
//! in their own configuration files.

use serde::{Deserialize, Serialize};

/// Output mode, fixed per logger instance at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One JSON object per record, for machine consumption.
    #[default]
    Json,
    /// Colorized, column-aligned lines for terminal viewing.
    Plain,
}

/// Construction options for a [`Logger`](crate::Logger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupOptions {
    /// Width of the `[service]` column in plain mode.
    pub column_width: usize,

    /// Suppress emission while the test environment marker is set.
    pub mute_in_test: bool,

    /// Plain or JSON output.
    pub output_mode: OutputMode,
}

impl Default for SetupOptions {
    fn default() -> Self {
        SetupOptions {
            column_width: 20,
            mute_in_test: false,
            output_mode: OutputMode::Json,
        }
    }
}

/// Process-wide test environment marker (`APP_ENV=test`).
///
/// The detection mechanism is a collaborator of the logger, not part of
/// it; this is the single place where the policy lives.
pub fn in_test_env() -> bool {
    std::env::var("APP_ENV").map(|v| v == "test").unwrap_or(false)
}
