//! End-to-end checks of the rule set on real Python sources.

use hintcheck::{FileScorer, RuleKind, RulesConfig};
use indoc::indoc;
use std::path::Path;

fn issues_of(source: &str) -> Vec<(RuleKind, String)> {
    let report = FileScorer::default().score_source(Path::new("sample.py"), source);
    report
        .functions
        .iter()
        .flat_map(|f| f.issues.iter().map(|i| (i.rule, i.message.clone())))
        .collect()
}

#[test]
fn test_fully_annotated_function_has_no_issues() {
    let source = indoc! {r#"
        class Account:
            def __init__(self, owner: str, balance: float = 0.0):
                self.owner = owner

            @classmethod
            def empty(cls, owner: str) -> "Account":
                return cls(owner)

            async def deposit(self, amount: float, *, note: Optional[str] = None) -> float:
                return 1
    "#};
    assert_eq!(issues_of(source), vec![]);
}

#[test]
fn test_float_accepts_int_but_str_does_not() {
    let source = indoc! {r#"
        def ratio() -> float:
            return 1

        def label() -> str:
            return 1
    "#};
    let issues = issues_of(source);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].0, RuleKind::ReturnConsistency);
    assert_eq!(
        issues[0].1,
        "function declares return type 'str' but returns a literal of type 'int'"
    );
}

#[test]
fn test_bare_container_is_flagged_once() {
    let bare = issues_of("def f(items: list) -> None:\n    pass\n");
    assert_eq!(bare.len(), 1);
    assert_eq!(bare[0].0, RuleKind::GenericSpecificity);

    assert_eq!(issues_of("def f(items: list[int]) -> None:\n    pass\n"), vec![]);
}

#[test]
fn test_none_default_requires_optional() {
    let bad = issues_of("def f(limit: int = None) -> None:\n    pass\n");
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0].0, RuleKind::DefaultOptionality);

    assert_eq!(
        issues_of("def f(limit: Optional[int] = None) -> None:\n    pass\n"),
        vec![]
    );
    assert_eq!(issues_of("def f(limit: int | None = None) -> None:\n    pass\n"), vec![]);
}

#[test]
fn test_nested_functions_are_scored() {
    let source = indoc! {r#"
        def outer(x: int) -> int:
            def inner(y):
                return y
            return inner(x)
    "#};
    let report = FileScorer::default().score_source(Path::new("nested.py"), source);
    assert_eq!(report.total_functions, 2);
    assert_eq!(report.ok_functions, 1);
    assert_eq!(report.score, 50.0);
}

#[test]
fn test_narrower_rule_set_changes_the_score() {
    let source = "def f(items: list) -> None:\n    pass\n";
    let rules = RulesConfig {
        generic_specificity: false,
        ..RulesConfig::default()
    };
    let report = FileScorer::python(rules).score_source(Path::new("m.py"), source);
    assert_eq!(report.score, 100.0);
    assert!(report.clean);
}
