use crate::config::RulesConfig;
use crate::core::{FunctionSignature, Issue, LiteralKind, RuleKind};

/// Flags literal `return` values whose runtime type contradicts a declared
/// primitive return type (`int`, `str`, `bool`, `float`).
///
/// A `float` return accepts `int` literals. Non-literal return expressions
/// are never inspected.
pub fn check(sig: &FunctionSignature, _config: &RulesConfig) -> Vec<Issue> {
    let Some(expected) = sig
        .returns
        .as_ref()
        .and_then(|ty| ty.bare_name())
        .and_then(LiteralKind::from_primitive_name)
    else {
        return Vec::new();
    };

    sig.return_literals
        .iter()
        .filter(|literal| !accepts(expected, literal.kind))
        .map(|literal| {
            Issue::error(
                RuleKind::ReturnConsistency,
                literal.line,
                format!(
                    "function declares return type '{}' but returns a literal of type '{}'",
                    expected, literal.kind
                ),
            )
        })
        .collect()
}

fn accepts(expected: LiteralKind, actual: LiteralKind) -> bool {
    expected == actual || (expected == LiteralKind::Float && actual == LiteralKind::Int)
}
