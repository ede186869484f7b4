use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::HintcheckConfig;
use crate::errors::AnalysisError;

pub const CONFIG_FILE_NAME: &str = ".hintcheck.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<HintcheckConfig, String> {
    toml::from_str::<HintcheckConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load a config file the user asked for explicitly. Any failure is fatal
/// for the run.
pub fn load_config_from(path: &Path) -> Result<HintcheckConfig, AnalysisError> {
    let contents = read_config_file(path).map_err(|e| AnalysisError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config = parse_config(&contents).map_err(|message| AnalysisError::Config {
        path: path.to_path_buf(),
        message,
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<HintcheckConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only actual errors are logged, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.hintcheck.toml`.
pub fn discover_config(start: &Path) -> HintcheckConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            HintcheckConfig::default()
        })
}

pub fn load_config() -> HintcheckConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            HintcheckConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[rules]\ngeneric_specificity = false\n",
        )
        .unwrap();
        let nested = temp.path().join("pkg").join("sub");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(&nested);
        assert!(!config.rules.generic_specificity);
    }

    #[test]
    fn test_broken_discovered_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[rules\n").unwrap();

        let config = discover_config(temp.path());
        assert!(config.rules.generic_specificity);
    }

    #[test]
    fn test_explicit_config_errors_are_reported() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(matches!(
            load_config_from(&missing),
            Err(AnalysisError::Config { .. })
        ));

        let broken = temp.path().join("broken.toml");
        fs::write(&broken, "rules = 3").unwrap();
        assert!(load_config_from(&broken).is_err());
    }
}
