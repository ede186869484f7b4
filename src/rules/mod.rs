//! Annotation-quality rules.
//!
//! Each rule is a pure function from one signature to the issues it finds.
//! `RULES` fixes the order in which they run; reports depend on that order.

pub mod completeness;
pub mod optionality;
pub mod return_consistency;
pub mod specificity;

use crate::config::RulesConfig;
use crate::core::{FunctionSignature, Issue, RuleKind};

pub type Rule = fn(&FunctionSignature, &RulesConfig) -> Vec<Issue>;

pub const RULES: [(RuleKind, Rule); 4] = [
    (RuleKind::AnnotationCompleteness, completeness::check),
    (RuleKind::DefaultOptionality, optionality::check),
    (RuleKind::GenericSpecificity, specificity::check),
    (RuleKind::ReturnConsistency, return_consistency::check),
];

/// Rules enabled by `config`, in evaluation order.
pub fn enabled_rules(config: &RulesConfig) -> impl Iterator<Item = &(RuleKind, Rule)> + '_ {
    RULES.iter().filter(move |(kind, _)| config.is_enabled(*kind))
}
