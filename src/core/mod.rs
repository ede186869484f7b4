pub mod report;
pub mod signature;

use serde::{Deserialize, Serialize};

pub use report::{FileReport, GroupReport, GroupStatus, RunSummary};
pub use signature::{
    FunctionSignature, LiteralKind, ParameterKind, ParameterSignature, ReturnLiteral, TypeExpr,
    ValueExpr,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Python,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[(&["py"], Language::Python)];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unknown)
    }

    pub fn from_path(path: &std::path::Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Python => write!(f, "Python"),
            Language::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The check that produced an issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    AnnotationCompleteness,
    DefaultOptionality,
    GenericSpecificity,
    ReturnConsistency,
    /// The file could not be read or parsed at all.
    Parse,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::AnnotationCompleteness => "annotation-completeness",
            RuleKind::DefaultOptionality => "default-optionality",
            RuleKind::GenericSpecificity => "generic-specificity",
            RuleKind::ReturnConsistency => "return-consistency",
            RuleKind::Parse => "parse",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "annotation-completeness" | "completeness" => Some(Self::AnnotationCompleteness),
            "default-optionality" | "optionality" => Some(Self::DefaultOptionality),
            "generic-specificity" | "specificity" => Some(Self::GenericSpecificity),
            "return-consistency" | "consistency" => Some(Self::ReturnConsistency),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub line: usize,
    pub message: String,
    pub rule: RuleKind,
}

impl Issue {
    pub fn error(rule: RuleKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            line,
            message: message.into(),
            rule,
        }
    }

    pub fn warning(rule: RuleKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            line,
            message: message.into(),
            rule,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FunctionVerdict {
    pub name: String,
    pub line: usize,
    pub ok: bool,
    pub issues: Vec<Issue>,
}

impl FunctionVerdict {
    pub fn new(name: impl Into<String>, line: usize, issues: Vec<Issue>) -> Self {
        Self {
            name: name.into(),
            line,
            ok: issues.is_empty(),
            issues,
        }
    }
}
