use crate::analyzers::Analyzer;
use crate::core::{
    FunctionSignature, Language, LiteralKind, ParameterKind, ParameterSignature, ReturnLiteral,
    TypeExpr, ValueExpr,
};
use crate::errors::AnalysisError;
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Extracts function signatures from Python source with tree-sitter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonAnalyzer;

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn parse_tree(&self, source: &str) -> Result<Tree, AnalysisError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| AnalysisError::Language(e.to_string()))?;
        parser
            .parse(source, None)
            .ok_or_else(|| AnalysisError::Language("parser returned no tree".to_string()))
    }
}

impl Analyzer for PythonAnalyzer {
    fn extract(&self, source: &str, path: &Path) -> Result<Vec<FunctionSignature>, AnalysisError> {
        let tree = self.parse_tree(source)?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(syntax_error(root, path));
        }
        if let Some(err) = legacy_statement(root, path) {
            return Err(err);
        }

        let extractor = SignatureExtractor { source, path };
        function_nodes(root)
            .into_iter()
            .map(|node| extractor.function(node))
            .collect()
    }

    fn language(&self) -> Language {
        Language::Python
    }
}

fn line_of(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

/// Builds a parse failure pointing at the first `ERROR` or `MISSING` node.
fn syntax_error(root: Node<'_>, path: &Path) -> AnalysisError {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_missing() {
            return AnalysisError::parse(path, line_of(node), format!("missing '{}'", node.kind()));
        }
        if node.is_error() {
            return AnalysisError::parse(path, line_of(node), "invalid syntax");
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.children(&mut cursor).filter(|c| c.has_error()).collect();
        stack.extend(children.into_iter().rev());
    }
    AnalysisError::parse(path, line_of(root), "invalid syntax")
}

/// Python 2 statements the grammar still accepts but the language rejects.
fn legacy_statement(root: Node<'_>, path: &Path) -> Option<AnalysisError> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let keyword = match node.kind() {
            "print_statement" => "print",
            "exec_statement" => "exec",
            _ => {
                stack.extend(named_children(node).into_iter().rev());
                continue;
            }
        };
        return Some(AnalysisError::parse(
            path,
            line_of(node),
            format!("Missing parentheses in call to '{keyword}'"),
        ));
    }
    None
}

/// Every `function_definition` in the tree, in source order, at any depth.
fn function_nodes(root: Node<'_>) -> Vec<Node<'_>> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.kind() == "function_definition" {
            found.push(node);
        }
        stack.extend(named_children(node).into_iter().rev());
    }
    found
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ParamSection {
    Positional,
    KeywordOnly,
}

struct SignatureExtractor<'a> {
    source: &'a str,
    path: &'a Path,
}

impl<'a> SignatureExtractor<'a> {
    fn text(&self, node: Node<'_>) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    fn function(&self, node: Node<'_>) -> Result<FunctionSignature, AnalysisError> {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.text(n))
            .unwrap_or("<anonymous>");
        let mut sig = FunctionSignature::new(name, line_of(node));

        let mut cursor = node.walk();
        sig.is_async = node.children(&mut cursor).any(|c| c.kind() == "async");
        sig.returns = node
            .child_by_field_name("return_type")
            .map(|n| TypeExpr::new(self.text(n)));

        if let Some(params) = node.child_by_field_name("parameters") {
            self.parameters(params, &mut sig)?;
        }
        if let Some(body) = node.child_by_field_name("body") {
            sig.return_literals = self.return_literals(body);
        }
        Ok(sig)
    }

    fn parameters(&self, params: Node<'_>, sig: &mut FunctionSignature) -> Result<(), AnalysisError> {
        let mut section = ParamSection::Positional;
        let mut seen_default = false;
        // Line of a bare `*` still waiting for its first keyword-only parameter.
        let mut open_bare_star: Option<usize> = None;

        for child in named_children(params) {
            let line = line_of(child);
            let param = match child.kind() {
                "positional_separator" => {
                    let mut moved: Vec<ParameterSignature> = std::mem::take(&mut sig.positional);
                    for param in &mut moved {
                        param.kind = ParameterKind::PositionalOnly;
                    }
                    sig.positional_only.extend(moved);
                    continue;
                }
                "keyword_separator" => {
                    section = ParamSection::KeywordOnly;
                    open_bare_star = Some(line);
                    continue;
                }
                "identifier" => self.plain_param(self.text(child), line, section),
                "default_parameter" | "typed_default_parameter" => {
                    let name = child
                        .child_by_field_name("name")
                        .map(|n| self.text(n))
                        .unwrap_or_default();
                    let mut param = self.plain_param(name, line, section);
                    param.annotation = child
                        .child_by_field_name("type")
                        .map(|n| TypeExpr::new(self.text(n)));
                    param.default = child
                        .child_by_field_name("value")
                        .map(|n| self.value(n));
                    param
                }
                "typed_parameter" => {
                    let annotation = child.child_by_field_name("type");
                    let Some(target) = named_children(child)
                        .into_iter()
                        .find(|n| n.kind() != "type")
                    else {
                        continue;
                    };
                    let mut param = self.declared_target(target, line, section);
                    param.annotation = annotation.map(|n| TypeExpr::new(self.text(n)));
                    param
                }
                "list_splat_pattern" | "dictionary_splat_pattern" => {
                    self.declared_target(child, line, section)
                }
                _ => continue,
            };

            match param.kind {
                ParameterKind::KeywordOnly => open_bare_star = None,
                ParameterKind::VariadicPositional => section = ParamSection::KeywordOnly,
                ParameterKind::Positional => {
                    if param.has_default() {
                        seen_default = true;
                    } else if seen_default {
                        return Err(AnalysisError::parse(
                            self.path,
                            line,
                            "non-default argument follows default argument",
                        ));
                    }
                }
                _ => {}
            }
            sig.push_param(param);
        }

        match open_bare_star {
            Some(line) => Err(AnalysisError::parse(
                self.path,
                line,
                "named arguments must follow bare *",
            )),
            None => Ok(()),
        }
    }

    fn plain_param(&self, name: &str, line: usize, section: ParamSection) -> ParameterSignature {
        let kind = match section {
            ParamSection::Positional => ParameterKind::Positional,
            ParamSection::KeywordOnly => ParameterKind::KeywordOnly,
        };
        ParameterSignature::new(name, line, kind)
    }

    /// A parameter target that may be a splat pattern (`*args`, `**kwargs`).
    fn declared_target(&self, target: Node<'_>, line: usize, section: ParamSection) -> ParameterSignature {
        let kind = match target.kind() {
            "list_splat_pattern" => ParameterKind::VariadicPositional,
            "dictionary_splat_pattern" => ParameterKind::VariadicKeyword,
            _ => return self.plain_param(self.text(target), line, section),
        };
        let name = named_children(target)
            .into_iter()
            .next()
            .map(|n| self.text(n))
            .unwrap_or_else(|| self.text(target).trim_start_matches('*'));
        ParameterSignature::new(name, line, kind)
    }

    fn value(&self, node: Node<'_>) -> ValueExpr {
        match literal_kind(node, self.source) {
            Some(kind) => ValueExpr::Literal(kind),
            None => ValueExpr::Expression(self.text(node).to_string()),
        }
    }

    /// Literal values of `return` statements that belong to this function,
    /// leaving out nested function and class bodies.
    fn return_literals(&self, body: Node<'_>) -> Vec<ReturnLiteral> {
        let mut literals = Vec::new();
        let mut stack = vec![body];
        while let Some(node) = stack.pop() {
            match node.kind() {
                "function_definition" | "class_definition" | "decorated_definition" => continue,
                "return_statement" => {
                    let value = named_children(node).into_iter().next();
                    if let Some(kind) = value.and_then(|v| literal_kind(v, self.source)) {
                        literals.push(ReturnLiteral {
                            kind,
                            line: line_of(node),
                        });
                    }
                    continue;
                }
                _ => {}
            }
            stack.extend(named_children(node).into_iter().rev());
        }
        literals
    }
}

/// Runtime kind of a constant expression, or `None` when the node is not a
/// plain literal. f-strings are expressions, not constants.
fn literal_kind(node: Node<'_>, source: &str) -> Option<LiteralKind> {
    let node = strip_parentheses(node)?;
    let text = node.utf8_text(source.as_bytes()).unwrap_or_default();
    match node.kind() {
        "none" => Some(LiteralKind::None),
        "true" | "false" => Some(LiteralKind::Bool),
        "ellipsis" => Some(LiteralKind::Ellipsis),
        "integer" | "float" if text.ends_with(['j', 'J']) => Some(LiteralKind::Complex),
        "integer" => Some(LiteralKind::Int),
        "float" => Some(LiteralKind::Float),
        "string" => string_kind(text),
        "concatenated_string" => named_children(node)
            .into_iter()
            .map(|part| literal_kind(part, source))
            .reduce(|acc, kind| if acc == kind { acc } else { None })
            .flatten(),
        _ => None,
    }
}

/// `((x))` -> `x`. Iterative, since nesting depth is unbounded in the input.
fn strip_parentheses(mut node: Node<'_>) -> Option<Node<'_>> {
    while node.kind() == "parenthesized_expression" {
        match named_children(node).as_slice() {
            [only] => node = *only,
            _ => return None,
        }
    }
    Some(node)
}

fn string_kind(text: &str) -> Option<LiteralKind> {
    let prefix: String = text
        .chars()
        .take_while(|c| *c != '"' && *c != '\'')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if prefix.contains('f') || prefix.contains('t') {
        None
    } else if prefix.contains('b') {
        Some(LiteralKind::Bytes)
    } else {
        Some(LiteralKind::Str)
    }
}
