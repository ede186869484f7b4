use crate::config::RulesConfig;
use crate::core::{FunctionSignature, Issue, RuleKind};

/// Flags positional parameters annotated with a bare container name such as
/// `list` or `Dict`, where the element type is left unspecified.
pub fn check(sig: &FunctionSignature, config: &RulesConfig) -> Vec<Issue> {
    sig.positional_params()
        .filter_map(|param| {
            let annotation = param.annotation.as_ref()?;
            let name = annotation.bare_name()?;
            if !config.is_generic_container(name) {
                return None;
            }
            Some(Issue::warning(
                RuleKind::GenericSpecificity,
                param.line,
                format!(
                    "parameter '{}' uses unparameterized container type '{}'; specify its element type",
                    param.name, annotation
                ),
            ))
        })
        .collect()
}
