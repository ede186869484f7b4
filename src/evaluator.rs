//! Runs the rule table against one function.

use crate::config::RulesConfig;
use crate::core::{FunctionSignature, FunctionVerdict};
use crate::rules::enabled_rules;

/// Evaluate a signature with every enabled rule.
///
/// Issues come out grouped by rule, in the fixed order completeness,
/// optionality, specificity, consistency.
pub fn evaluate_function(sig: &FunctionSignature, config: &RulesConfig) -> FunctionVerdict {
    let issues = enabled_rules(config)
        .flat_map(|(_, rule)| rule(sig, config))
        .collect();
    FunctionVerdict::new(sig.name.clone(), sig.line, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LiteralKind, ParameterKind, ParameterSignature, RuleKind, ValueExpr};

    fn everything_wrong() -> FunctionSignature {
        FunctionSignature::new("messy", 1)
            .with_param(
                ParameterSignature::new("items", 1, ParameterKind::Positional).with_annotation("list"),
            )
            .with_param(ParameterSignature::new("extra", 1, ParameterKind::Positional))
            .with_param(
                ParameterSignature::new("limit", 1, ParameterKind::Positional)
                    .with_annotation("int")
                    .with_default(ValueExpr::Literal(LiteralKind::None)),
            )
    }

    #[test]
    fn test_clean_function_is_ok() {
        let sig = FunctionSignature::new("area", 1)
            .with_param(ParameterSignature::new("self", 1, ParameterKind::Positional))
            .with_param(
                ParameterSignature::new("scale", 1, ParameterKind::Positional).with_annotation("float"),
            )
            .with_returns("float")
            .with_return_literal(LiteralKind::Int, 2);

        let verdict = evaluate_function(&sig, &RulesConfig::default());
        assert!(verdict.ok);
        assert!(verdict.issues.is_empty());
        assert_eq!(verdict.name, "area");
    }

    #[test]
    fn test_issues_grouped_in_rule_order() {
        let sig = everything_wrong()
            .with_returns("str")
            .with_return_literal(LiteralKind::Int, 3);

        let verdict = evaluate_function(&sig, &RulesConfig::default());
        let rules: Vec<RuleKind> = verdict.issues.iter().map(|i| i.rule).collect();
        assert_eq!(
            rules,
            vec![
                RuleKind::AnnotationCompleteness,
                RuleKind::DefaultOptionality,
                RuleKind::GenericSpecificity,
                RuleKind::ReturnConsistency,
            ]
        );
        assert!(!verdict.ok);
    }

    #[test]
    fn test_disabled_rules_contribute_nothing() {
        let config = RulesConfig {
            completeness: false,
            generic_specificity: false,
            ..RulesConfig::default()
        };
        let verdict = evaluate_function(&everything_wrong(), &config);
        let rules: Vec<RuleKind> = verdict.issues.iter().map(|i| i.rule).collect();
        assert_eq!(rules, vec![RuleKind::DefaultOptionality]);
    }
}
