use crate::config::RulesConfig;
use crate::core::{FunctionSignature, Issue, RuleKind};

/// Flags positional parameters defaulting to `None` whose annotation does
/// not admit `None`.
///
/// Defaults are paired with parameters from the right: the last default
/// belongs to the last positional parameter. Pairs that fall outside the
/// parameter list are skipped.
pub fn check(sig: &FunctionSignature, _config: &RulesConfig) -> Vec<Issue> {
    let param_count = sig.positional_len();
    let default_count = sig.positional_defaults.len();

    sig.positional_defaults
        .iter()
        .enumerate()
        .filter(|(_, default)| default.is_none_literal())
        .filter_map(|(index, _)| {
            let from_end = default_count - index;
            let param_index = param_count.checked_sub(from_end)?;
            sig.positional_at(param_index)
        })
        .filter_map(|param| {
            let annotation = param.annotation.as_ref()?;
            if annotation.mentions_optional() {
                return None;
            }
            Some(Issue::warning(
                RuleKind::DefaultOptionality,
                param.line,
                format!(
                    "parameter '{}' defaults to None but type is '{}'; wrap it as Optional",
                    param.name, annotation
                ),
            ))
        })
        .collect()
}
