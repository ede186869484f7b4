// Export modules for library usage
pub mod aggregation;
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod evaluator;
pub mod formatting;
pub mod io;
pub mod rules;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    FileReport, FunctionSignature, FunctionVerdict, GroupReport, GroupStatus, Issue, Language,
    ParameterKind, ParameterSignature, RuleKind, RunSummary, Severity,
};

pub use crate::aggregation::{aggregate_group, analyze_groups, GroupTask};
pub use crate::analyzers::{Analyzer, PythonAnalyzer};
pub use crate::config::{HintcheckConfig, RulesConfig};
pub use crate::errors::AnalysisError;
pub use crate::evaluator::evaluate_function;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::walker::discover_groups;
pub use crate::scoring::{completeness_score, FileScorer, Grade};
