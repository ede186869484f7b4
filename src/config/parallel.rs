//! Parallelism configuration for multi-file analysis.

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Controls whether files are scored on rayon's thread pool.
///
/// Reports are reassembled in listing order either way, so this setting
/// never changes the output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelConfig {
    /// Enable parallel processing (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Worker threads; 0 means one per available core.
    #[serde(default)]
    pub jobs: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            jobs: 0,
        }
    }
}
