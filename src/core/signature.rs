//! Structural view of a function signature as handed over by a parser.
//!
//! Nothing here knows about source text beyond the raw spelling of type
//! annotations; every value is immutable once the extractor has built it.

use serde::Serialize;

/// Which parameter list a parameter was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterKind {
    Positional,
    PositionalOnly,
    KeywordOnly,
    VariadicPositional,
    VariadicKeyword,
}

/// A declared type annotation, kept as source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeExpr {
    text: String,
}

impl TypeExpr {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The annotation with one layer of string-literal quoting removed, so
    /// forward references like `"List"` are inspected like `List`.
    fn unquoted(&self) -> &str {
        let text = self.text.as_str();
        for quote in ["\"\"\"", "'''", "\"", "'"] {
            if text.len() >= 2 * quote.len() && text.starts_with(quote) && text.ends_with(quote) {
                return text[quote.len()..text.len() - quote.len()].trim();
            }
        }
        text
    }

    /// Returns the name when the annotation is a plain (possibly dotted)
    /// name without type arguments, e.g. `list` or `typing.List` -> `List`.
    pub fn bare_name(&self) -> Option<&str> {
        let text = self.unquoted();
        if text.is_empty() {
            return None;
        }
        let is_dotted_name = text.split('.').all(is_identifier);
        if !is_dotted_name {
            return None;
        }
        text.rsplit('.').next()
    }

    /// Whether the annotation admits `None`: an `Optional[...]` wrapper, an
    /// explicit `None`, or a `|` union.
    pub fn mentions_optional(&self) -> bool {
        let text = self.unquoted();
        text.contains("Optional") || text.contains("None") || text.contains('|')
    }
}

impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Runtime kind of a literal, named the way the interpreter names its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LiteralKind {
    Int,
    Float,
    Complex,
    Str,
    Bytes,
    Bool,
    None,
    Ellipsis,
}

impl LiteralKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::Str => "str",
            Self::Bytes => "bytes",
            Self::Bool => "bool",
            Self::None => "NoneType",
            Self::Ellipsis => "ellipsis",
        }
    }

    /// Maps a declared primitive return annotation to the literal kind it
    /// expects. Only the four primitives participate in return checking.
    pub fn from_primitive_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Self::Int),
            "str" => Some(Self::Str),
            "bool" => Some(Self::Bool),
            "float" => Some(Self::Float),
            _ => None,
        }
    }
}

impl std::fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A default value or returned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueExpr {
    Literal(LiteralKind),
    Expression(String),
}

impl ValueExpr {
    pub fn is_none_literal(&self) -> bool {
        matches!(self, Self::Literal(LiteralKind::None))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSignature {
    pub name: String,
    pub line: usize,
    pub annotation: Option<TypeExpr>,
    pub default: Option<ValueExpr>,
    pub kind: ParameterKind,
}

impl ParameterSignature {
    pub fn new(name: impl Into<String>, line: usize, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            line,
            annotation: None,
            default: None,
            kind,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(TypeExpr::new(annotation));
        self
    }

    pub fn with_default(mut self, default: ValueExpr) -> Self {
        self.default = Some(default);
        self
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Name as written at the declaration site, with splat prefixes.
    pub fn display_name(&self) -> String {
        match self.kind {
            ParameterKind::VariadicPositional => format!("*{}", self.name),
            ParameterKind::VariadicKeyword => format!("**{}", self.name),
            _ => self.name.clone(),
        }
    }
}

/// A literal found directly in a `return` statement of the function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReturnLiteral {
    pub kind: LiteralKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    pub line: usize,
    pub positional_only: Vec<ParameterSignature>,
    pub positional: Vec<ParameterSignature>,
    /// Defaults of the combined positional-only + positional list, in
    /// declaration order. They belong to the trailing parameters.
    pub positional_defaults: Vec<ValueExpr>,
    pub keyword_only: Vec<ParameterSignature>,
    pub variadic: Option<ParameterSignature>,
    pub variadic_keyword: Option<ParameterSignature>,
    pub returns: Option<TypeExpr>,
    pub return_literals: Vec<ReturnLiteral>,
    pub is_async: bool,
}

const CONSTRUCTOR_NAME: &str = "__init__";

impl FunctionSignature {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            positional_only: Vec::new(),
            positional: Vec::new(),
            positional_defaults: Vec::new(),
            keyword_only: Vec::new(),
            variadic: None,
            variadic_keyword: None,
            returns: None,
            return_literals: Vec::new(),
            is_async: false,
        }
    }

    /// Appends a parameter to the list matching its kind. Defaults of
    /// positional parameters are mirrored into `positional_defaults`.
    pub fn push_param(&mut self, param: ParameterSignature) {
        match param.kind {
            ParameterKind::PositionalOnly | ParameterKind::Positional => {
                if let Some(default) = &param.default {
                    self.positional_defaults.push(default.clone());
                }
                if param.kind == ParameterKind::PositionalOnly {
                    self.positional_only.push(param);
                } else {
                    self.positional.push(param);
                }
            }
            ParameterKind::KeywordOnly => self.keyword_only.push(param),
            ParameterKind::VariadicPositional => self.variadic = Some(param),
            ParameterKind::VariadicKeyword => self.variadic_keyword = Some(param),
        }
    }

    pub fn with_param(mut self, param: ParameterSignature) -> Self {
        self.push_param(param);
        self
    }

    pub fn with_returns(mut self, annotation: impl Into<String>) -> Self {
        self.returns = Some(TypeExpr::new(annotation));
        self
    }

    pub fn with_return_literal(mut self, kind: LiteralKind, line: usize) -> Self {
        self.return_literals.push(ReturnLiteral { kind, line });
        self
    }

    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }

    /// Positional-only parameters followed by positional ones.
    pub fn positional_params(&self) -> impl Iterator<Item = &ParameterSignature> {
        self.positional_only.iter().chain(self.positional.iter())
    }

    pub fn positional_len(&self) -> usize {
        self.positional_only.len() + self.positional.len()
    }

    pub fn positional_at(&self, index: usize) -> Option<&ParameterSignature> {
        let split = self.positional_only.len();
        if index < split {
            self.positional_only.get(index)
        } else {
            self.positional.get(index - split)
        }
    }

    pub fn variadics(&self) -> impl Iterator<Item = &ParameterSignature> {
        self.variadic.iter().chain(self.variadic_keyword.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name_plain_and_dotted() {
        assert_eq!(TypeExpr::new("list").bare_name(), Some("list"));
        assert_eq!(TypeExpr::new("typing.List").bare_name(), Some("List"));
        assert_eq!(TypeExpr::new("'Dict'").bare_name(), Some("Dict"));
    }

    #[test]
    fn test_bare_name_rejects_parameterized() {
        assert_eq!(TypeExpr::new("list[int]").bare_name(), None);
        assert_eq!(TypeExpr::new("Dict[str, int]").bare_name(), None);
        assert_eq!(TypeExpr::new("int | None").bare_name(), None);
        assert_eq!(TypeExpr::new("").bare_name(), None);
    }

    #[test]
    fn test_mentions_optional() {
        assert!(TypeExpr::new("Optional[int]").mentions_optional());
        assert!(TypeExpr::new("Union[int, None]").mentions_optional());
        assert!(TypeExpr::new("int | None").mentions_optional());
        assert!(!TypeExpr::new("int").mentions_optional());
        assert!(!TypeExpr::new("Union[int, str]").mentions_optional());
    }

    #[test]
    fn test_positional_at_spans_both_lists() {
        let sig = FunctionSignature::new("f", 1)
            .with_param(ParameterSignature::new("a", 1, ParameterKind::PositionalOnly))
            .with_param(ParameterSignature::new("b", 1, ParameterKind::Positional));

        assert_eq!(sig.positional_len(), 2);
        assert_eq!(sig.positional_at(0).map(|p| p.name.as_str()), Some("a"));
        assert_eq!(sig.positional_at(1).map(|p| p.name.as_str()), Some("b"));
        assert!(sig.positional_at(2).is_none());
    }

    #[test]
    fn test_with_param_mirrors_positional_defaults() {
        let sig = FunctionSignature::new("f", 1)
            .with_param(ParameterSignature::new("a", 1, ParameterKind::Positional))
            .with_param(
                ParameterSignature::new("b", 1, ParameterKind::Positional)
                    .with_default(ValueExpr::Literal(LiteralKind::None)),
            )
            .with_param(
                ParameterSignature::new("c", 1, ParameterKind::KeywordOnly)
                    .with_default(ValueExpr::Literal(LiteralKind::Int)),
            );

        assert_eq!(sig.positional_defaults, vec![ValueExpr::Literal(LiteralKind::None)]);
        assert_eq!(sig.keyword_only.len(), 1);
    }

    #[test]
    fn test_display_name_for_variadics() {
        let args = ParameterSignature::new("args", 1, ParameterKind::VariadicPositional);
        let kwargs = ParameterSignature::new("kwargs", 1, ParameterKind::VariadicKeyword);
        assert_eq!(args.display_name(), "*args");
        assert_eq!(kwargs.display_name(), "**kwargs");
    }

    #[test]
    fn test_only_init_is_constructor() {
        assert!(FunctionSignature::new("__init__", 1).is_constructor());
        assert!(!FunctionSignature::new("__new__", 1).is_constructor());
    }
}
