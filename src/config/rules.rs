use crate::core::RuleKind;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

pub fn default_receiver_names() -> Vec<String> {
    ["self", "cls"].iter().map(|s| s.to_string()).collect()
}

pub fn default_generic_containers() -> Vec<String> {
    [
        "list",
        "dict",
        "set",
        "tuple",
        "frozenset",
        "List",
        "Dict",
        "Set",
        "Tuple",
        "FrozenSet",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Which annotation rules run, and the vocabulary they use.
///
/// Turning a rule off yields a narrower but still valid check; the remaining
/// rules keep their relative order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RulesConfig {
    #[serde(default = "default_true")]
    pub completeness: bool,

    #[serde(default = "default_true")]
    pub default_optionality: bool,

    #[serde(default = "default_true")]
    pub generic_specificity: bool,

    #[serde(default = "default_true")]
    pub return_consistency: bool,

    /// Apply the completeness rule to keyword-only parameters.
    #[serde(default = "default_true")]
    pub check_keyword_only: bool,

    /// Positional parameter names that never need an annotation.
    #[serde(default = "default_receiver_names")]
    pub receiver_names: Vec<String>,

    /// Container names that must be parameterised with element types.
    #[serde(default = "default_generic_containers")]
    pub generic_containers: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            completeness: true,
            default_optionality: true,
            generic_specificity: true,
            return_consistency: true,
            check_keyword_only: true,
            receiver_names: default_receiver_names(),
            generic_containers: default_generic_containers(),
        }
    }
}

impl RulesConfig {
    pub fn is_enabled(&self, kind: RuleKind) -> bool {
        match kind {
            RuleKind::AnnotationCompleteness => self.completeness,
            RuleKind::DefaultOptionality => self.default_optionality,
            RuleKind::GenericSpecificity => self.generic_specificity,
            RuleKind::ReturnConsistency => self.return_consistency,
            RuleKind::Parse => true,
        }
    }

    pub fn disable(&mut self, kind: RuleKind) {
        match kind {
            RuleKind::AnnotationCompleteness => self.completeness = false,
            RuleKind::DefaultOptionality => self.default_optionality = false,
            RuleKind::GenericSpecificity => self.generic_specificity = false,
            RuleKind::ReturnConsistency => self.return_consistency = false,
            RuleKind::Parse => {}
        }
    }

    pub fn is_receiver(&self, name: &str) -> bool {
        self.receiver_names.iter().any(|r| r == name)
    }

    pub fn is_generic_container(&self, name: &str) -> bool {
        self.generic_containers.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let config = RulesConfig::default();
        assert!(config.is_enabled(RuleKind::AnnotationCompleteness));
        assert!(config.is_enabled(RuleKind::DefaultOptionality));
        assert!(config.is_enabled(RuleKind::GenericSpecificity));
        assert!(config.is_enabled(RuleKind::ReturnConsistency));
        assert!(config.check_keyword_only);
        assert!(config.is_receiver("self"));
        assert!(config.is_generic_container("FrozenSet"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RulesConfig = toml::from_str("generic_specificity = false").unwrap();
        assert!(!config.generic_specificity);
        assert!(config.completeness);
        assert_eq!(config.generic_containers, default_generic_containers());
    }

    #[test]
    fn test_parse_rule_cannot_be_disabled() {
        let mut config = RulesConfig::default();
        config.disable(RuleKind::Parse);
        assert!(config.is_enabled(RuleKind::Parse));
    }
}
