//! Stream-level settings.
//!
//! ```
//! use ironstream::{Stream, StreamConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = StreamConfig::from_json_str(r#"{ "name": "orders", "debug_sample_limit": 3 }"#)?;
//! assert!(!cfg.print_metrics);
//!
//! let mut s = Stream::from_vec(vec![1, 2, 3]).with_config(cfg);
//! assert_eq!(s.explain().name, "orders");
//! assert_eq!(s.count()?, 3);
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, StreamError};
use serde::{Deserialize, Serialize};

/// Settings applied with [`Stream::with_config`](crate::Stream::with_config).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Label used in `explain()` output and metrics reports.
    pub name: String,
    /// Print the metrics report to stdout after the terminal operation.
    pub print_metrics: bool,
    /// Cap on per-element lines printed by `debug_inspect`.
    pub debug_sample_limit: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            name: "stream".to_string(),
            print_metrics: false,
            debug_sample_limit: 10,
        }
    }
}

impl StreamConfig {
    /// Default settings under a different name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`StreamError::InvalidConfiguration`] if the text is not a valid config object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| StreamError::invalid(format!("stream config: {e}")))
    }

    /// Builder-style toggle for [`print_metrics`](Self::print_metrics).
    #[must_use]
    pub fn with_print_metrics(mut self, on: bool) -> Self {
        self.print_metrics = on;
        self
    }

    /// Builder-style setter for [`debug_sample_limit`](Self::debug_sample_limit).
    #[must_use]
    pub fn with_debug_sample_limit(mut self, limit: usize) -> Self {
        self.debug_sample_limit = limit;
        self
    }
}
