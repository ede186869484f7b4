use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# hintcheck configuration

[rules]
completeness = true
default_optionality = true
generic_specificity = true
return_consistency = true
check_keyword_only = true
receiver_names = ["self", "cls"]
generic_containers = [
    "list", "dict", "set", "tuple", "frozenset",
    "List", "Dict", "Set", "Tuple", "FrozenSet",
]

[discovery]
# ignore_dirs = [".git", ".venv", "build"]   # replaces the built-in list
extra_ignore_dirs = []
ignore_patterns = []
respect_gitignore = false

[output]
default_format = "terminal"

[parallel]
enabled = true
jobs = 0
"#;

/// Write the default configuration into `dir`, returning its path.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    log::info!("Created {}", config_path.display());
    Ok(config_path)
}
