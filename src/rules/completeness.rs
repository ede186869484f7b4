use crate::config::RulesConfig;
use crate::core::{FunctionSignature, Issue, ParameterSignature, RuleKind};

/// Flags parameters and return positions that carry no annotation.
///
/// Receiver parameters (`self`, `cls` by default) are exempt, and so is the
/// return annotation of `__init__`.
pub fn check(sig: &FunctionSignature, config: &RulesConfig) -> Vec<Issue> {
    let positional = sig
        .positional_params()
        .filter(|param| !config.is_receiver(&param.name));

    let keyword_only = sig
        .keyword_only
        .iter()
        .filter(|_| config.check_keyword_only);

    let mut issues: Vec<Issue> = positional
        .chain(keyword_only)
        .chain(sig.variadics())
        .filter(|param| param.annotation.is_none())
        .map(missing_parameter_annotation)
        .collect();

    if sig.returns.is_none() && !sig.is_constructor() {
        issues.push(Issue::error(
            RuleKind::AnnotationCompleteness,
            sig.line,
            "missing return annotation",
        ));
    }

    issues
}

fn missing_parameter_annotation(param: &ParameterSignature) -> Issue {
    Issue::error(
        RuleKind::AnnotationCompleteness,
        param.line,
        format!("missing annotation for parameter '{}'", param.display_name()),
    )
}
