use serde::{Deserialize, Serialize};

use super::parallel::ParallelConfig;
use super::rules::RulesConfig;

/// Root configuration structure, read from `.hintcheck.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HintcheckConfig {
    /// Rule selection and vocabulary
    #[serde(default)]
    pub rules: RulesConfig,

    /// File discovery settings
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Parallel scoring settings
    #[serde(default)]
    pub parallel: ParallelConfig,
}

pub fn default_ignore_dirs() -> Vec<String> {
    [
        "__pycache__",
        ".git",
        ".hg",
        ".svn",
        ".venv",
        "venv",
        ".tox",
        ".mypy_cache",
        ".pytest_cache",
        ".ruff_cache",
        "node_modules",
        "build",
        "dist",
        "site-packages",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Which directories and files discovery skips.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DiscoveryConfig {
    /// Replaces the built-in directory ignore-list when set
    #[serde(default)]
    pub ignore_dirs: Option<Vec<String>>,

    /// Directory names appended to the ignore-list
    #[serde(default)]
    pub extra_ignore_dirs: Vec<String>,

    /// Glob patterns matched against file paths
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default)]
    pub respect_gitignore: bool,
}

impl DiscoveryConfig {
    /// The effective directory ignore-list. `__pycache__` is always pruned.
    pub fn effective_ignore_dirs(&self) -> Vec<String> {
        let mut dirs = self.ignore_dirs.clone().unwrap_or_else(default_ignore_dirs);
        dirs.extend(self.extra_ignore_dirs.iter().cloned());
        if !dirs.iter().any(|d| d == "__pycache__") {
            dirs.push("__pycache__".to_string());
        }
        dirs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// `terminal` or `json`
    #[serde(default)]
    pub default_format: Option<String>,
}
