use crate::aggregation::analyze_groups;
use crate::cli;
use crate::config::{self, HintcheckConfig};
use crate::core::{RuleKind, RunSummary};
use crate::formatting::FormattingConfig;
use crate::io::{self, OutputFormat, RenderOptions};
use crate::scoring::FileScorer;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct CheckConfig {
    pub root: PathBuf,
    pub groups: Vec<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub verbosity: u8,
    pub formatting_config: FormattingConfig,
    pub no_parallel: bool,
    pub jobs: Option<usize>,
    pub config: Option<PathBuf>,
    pub disable_rules: Vec<String>,
}

/// Run a check and write its report. The returned summary tells the caller
/// whether every file passed.
pub fn handle_check(config: CheckConfig) -> Result<RunSummary> {
    if !config.root.is_dir() {
        anyhow::bail!(
            "Check root {} does not exist or is not a directory",
            config.root.display()
        );
    }
    let file_config = load_settings(&config)?;
    let settings = apply_overrides(file_config, &config)?;
    let format = resolve_format(config.format, &settings)?;

    if settings.parallel.enabled {
        cli::configure_thread_pool(settings.parallel.jobs);
    }

    let tasks = io::discover_groups(&config.root, &config.groups, &settings.discovery);
    log::debug!(
        "Discovered {} group(s) under {}",
        tasks.len(),
        config.root.display()
    );

    let scorer = FileScorer::python(settings.rules.clone());
    let summary = analyze_groups(&tasks, &scorer, settings.parallel.enabled);

    let options = RenderOptions {
        formatting: config.formatting_config,
        verbosity: config.verbosity,
        base: Some(config.root.clone()),
    };
    let out = io::open_output(config.output.as_deref())?;
    io::create_writer(format, options, out)
        .write_summary(&summary)
        .context("Failed to write report")?;

    Ok(summary)
}

fn load_settings(config: &CheckConfig) -> Result<HintcheckConfig> {
    match &config.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Invalid configuration file {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Command-line flags win over file settings.
pub fn apply_overrides(mut settings: HintcheckConfig, config: &CheckConfig) -> Result<HintcheckConfig> {
    for name in &config.disable_rules {
        let kind = RuleKind::parse(name)
            .filter(|kind| *kind != RuleKind::Parse)
            .with_context(|| format!("Unknown rule '{name}'"))?;
        settings.rules.disable(kind);
    }
    if config.no_parallel {
        settings.parallel.enabled = false;
    }
    if let Some(jobs) = config.jobs {
        settings.parallel.jobs = jobs;
    }
    Ok(settings)
}

pub fn resolve_format(flag: Option<OutputFormat>, settings: &HintcheckConfig) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match settings.output.default_format.as_deref() {
        None => Ok(OutputFormat::Terminal),
        Some(name) => OutputFormat::parse(name)
            .with_context(|| format!("Unknown output format '{name}' in configuration")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    fn check_config() -> CheckConfig {
        CheckConfig {
            root: PathBuf::from("."),
            groups: vec![],
            format: None,
            output: None,
            verbosity: 0,
            formatting_config: FormattingConfig::plain(),
            no_parallel: false,
            jobs: None,
            config: None,
            disable_rules: vec![],
        }
    }

    #[test]
    fn test_overrides_disable_rules_and_parallelism() {
        let config = CheckConfig {
            disable_rules: vec!["specificity".to_string(), "return_consistency".to_string()],
            no_parallel: true,
            jobs: Some(3),
            ..check_config()
        };
        let settings = apply_overrides(HintcheckConfig::default(), &config).unwrap();

        assert!(!settings.rules.generic_specificity);
        assert!(!settings.rules.return_consistency);
        assert!(settings.rules.completeness);
        assert!(!settings.parallel.enabled);
        assert_eq!(settings.parallel.jobs, 3);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = CheckConfig {
            root: temp.path().join("typo"),
            ..check_config()
        };
        let err = handle_check(config).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_unknown_rule_is_an_error() {
        let config = CheckConfig {
            disable_rules: vec!["naming".to_string()],
            ..check_config()
        };
        assert!(apply_overrides(HintcheckConfig::default(), &config).is_err());
    }

    #[test]
    fn test_format_resolution() {
        let mut settings = HintcheckConfig::default();
        assert_eq!(resolve_format(None, &settings).unwrap(), OutputFormat::Terminal);

        settings.output = OutputConfig {
            default_format: Some("json".to_string()),
        };
        assert_eq!(resolve_format(None, &settings).unwrap(), OutputFormat::Json);
        assert_eq!(
            resolve_format(Some(OutputFormat::Terminal), &settings).unwrap(),
            OutputFormat::Terminal
        );

        settings.output.default_format = Some("html".to_string());
        assert!(resolve_format(None, &settings).is_err());
    }
}
