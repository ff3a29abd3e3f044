//! JavaScript/TypeScript function extractor using Tree-sitter.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use rag_core::{AnalysisError, Dialect, FunctionDescriptor, Location};
use tracing::{debug, trace};
use tree_sitter::{Language, Node, Parser, Tree};

use crate::extractor::LanguageExtractor;
use crate::syntax::{first_expression, NodeKind, SourceText};
use crate::walk::{walk, walk_scope, Visit};

/// Bare callees treated as network calls.
const NETWORK_CALLEES: &[&str] = &["fetch", "axios"];

/// Object whose members are all treated as network calls (`axios.get`, `axios?.post`).
const HTTP_CLIENT: &str = "axios";

/// Extracts function descriptors from JavaScript, JSX, TypeScript and TSX source.
pub struct JsExtractor {
    javascript: Language,
    typescript: Language,
    tsx: Language,
}

impl JsExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            javascript: tree_sitter_javascript::LANGUAGE.into(),
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    fn language(&self, dialect: Dialect) -> &Language {
        match dialect {
            Dialect::JavaScript | Dialect::Jsx => &self.javascript,
            Dialect::TypeScript => &self.typescript,
            Dialect::Tsx => &self.tsx,
        }
    }

    fn parse(&self, path: &Path, source: &str, dialect: Dialect) -> Result<Tree, AnalysisError> {
        let mut parser = Parser::new();
        parser
            .set_language(self.language(dialect))
            .map_err(|e| AnalysisError::Grammar {
                dialect,
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| AnalysisError::Grammar {
                dialect,
                message: "parser returned no tree".to_string(),
            })?;

        if let Some(error) = first_error(tree.root_node()) {
            let at = SourceText::new(source).location(error);
            let len = error.end_byte().saturating_sub(error.start_byte());
            debug!("{} does not parse as {dialect} at {at}", path.display());
            return Err(AnalysisError::Syntax {
                path: path.to_path_buf(),
                dialect,
                line: at.line,
                column: at.column,
                src: NamedSource::new(path.display().to_string(), source.to_string()),
                span: SourceSpan::from((error.start_byte(), len)),
            });
        }

        Ok(tree)
    }

    /// Builds a descriptor if `node` is a qualifying declaration.
    fn describe(node: Node<'_>, src: &SourceText<'_>) -> Option<FunctionDescriptor> {
        match NodeKind::of(node) {
            NodeKind::FunctionDeclaration => {
                let name = node.child_by_field_name("name")?;
                Some(Self::build(name, node.child_by_field_name("body"), src))
            }
            NodeKind::VariableDeclarator => {
                let name = node
                    .child_by_field_name("name")
                    .filter(|n| NodeKind::of(*n) == NodeKind::Identifier)?;
                let function = unwrap_function(node.child_by_field_name("value")?)?;
                Some(Self::build(name, function.child_by_field_name("body"), src))
            }
            _ => None,
        }
    }

    fn build(name: Node<'_>, body: Option<Node<'_>>, src: &SourceText<'_>) -> FunctionDescriptor {
        let descriptor = FunctionDescriptor::new(src.text(name), src.location(name));
        match body {
            Some(body) => descriptor
                .with_api_calls(find_api_calls(body, src))
                .with_jsx_returns(find_jsx_returns(body, src)),
            None => descriptor,
        }
    }
}

impl Default for JsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for JsExtractor {
    fn language_id(&self) -> &'static str {
        "javascript"
    }

    fn dialects(&self) -> &'static [Dialect] {
        &Dialect::ALL
    }

    fn extract(
        &self,
        path: &Path,
        source: &str,
        dialect: Dialect,
    ) -> Result<Vec<FunctionDescriptor>, AnalysisError> {
        let tree = self.parse(path, source, dialect)?;
        let src = SourceText::new(source);

        let mut functions = Vec::new();
        walk(tree.root_node(), |node| {
            if let Some(function) = Self::describe(node, &src) {
                trace!(
                    "{} `{}` at {}: {} api call(s), {} markup return(s)",
                    function.role,
                    function.name,
                    function.location,
                    function.api_calls.len(),
                    function.jsx_returns.len()
                );
                functions.push(function);
            }
            Visit::Continue
        });

        debug!(
            "Extracted {} function(s) from {} ({dialect})",
            functions.len(),
            path.display()
        );
        Ok(functions)
    }
}

/// Resolves an initializer to the function it binds, looking through
/// parentheses and wrapper calls such as `memo(...)` or `forwardRef(...)`.
///
/// When several arguments are functions, the first one wins.
fn unwrap_function(expr: Node<'_>) -> Option<Node<'_>> {
    match NodeKind::of(expr) {
        NodeKind::FunctionExpression | NodeKind::ArrowFunction => Some(expr),
        NodeKind::Parenthesized => first_expression(expr).and_then(unwrap_function),
        NodeKind::Call => {
            let args = expr.child_by_field_name("arguments")?;
            let mut cursor = args.walk();
            let found = args
                .named_children(&mut cursor)
                .find_map(unwrap_function);
            found
        }
        _ => None,
    }
}

fn find_api_calls(body: Node<'_>, src: &SourceText<'_>) -> Vec<Location> {
    let mut calls = Vec::new();
    walk_scope(body, |node| {
        if NodeKind::of(node) == NodeKind::Call {
            if let Some(callee) = network_callee(node, src) {
                calls.push(src.location(callee));
            }
        }
        Visit::Continue
    });
    calls
}

/// The callee of `call` if it is a network call.
///
/// The TypeScript grammar parses `await fetch<T>(url)` with the `await`
/// inside the callee; the returned node is then the awaited operand, so the
/// site starts at `fetch` rather than at `await`.
fn network_callee<'t>(call: Node<'t>, src: &SourceText<'_>) -> Option<Node<'t>> {
    // Tagged templates (fetch`...`) parse as calls with a template argument.
    let args = call.child_by_field_name("arguments")?;
    if NodeKind::of(args) == NodeKind::TemplateString {
        return None;
    }

    let mut callee = call.child_by_field_name("function")?;
    if NodeKind::of(callee) == NodeKind::Await {
        callee = first_expression(callee)?;
    }

    let is_network = match NodeKind::of(callee) {
        NodeKind::Identifier => NETWORK_CALLEES.contains(&src.text(callee)),
        NodeKind::Member => callee
            .child_by_field_name("object")
            .is_some_and(|object| {
                NodeKind::of(object) == NodeKind::Identifier && src.text(object) == HTTP_CLIENT
            }),
        _ => false,
    };
    is_network.then_some(callee)
}

fn find_jsx_returns(body: Node<'_>, src: &SourceText<'_>) -> Vec<Location> {
    // Expression body: the expression is the implicit return value.
    if NodeKind::of(body) != NodeKind::Block {
        return first_markup(body)
            .map(|markup| src.location(markup))
            .into_iter()
            .collect();
    }

    let mut returns = Vec::new();
    walk_scope(body, |node| {
        if NodeKind::of(node) == NodeKind::Return {
            if let Some(markup) = first_expression(node).and_then(first_markup) {
                returns.push(src.location(markup));
            }
        }
        Visit::Continue
    });
    returns
}

/// First markup node in pre-order under `root`, not looking inside nested functions.
fn first_markup(root: Node<'_>) -> Option<Node<'_>> {
    let mut found = None;
    walk_scope(root, |node| {
        if found.is_some() {
            return Visit::Skip;
        }
        if NodeKind::of(node) == NodeKind::Markup {
            found = Some(node);
            return Visit::Skip;
        }
        Visit::Continue
    });
    found
}

/// First `ERROR` or `MISSING` node in the tree, in source order.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let first_child = stack.len();
        stack.extend(node.children(&mut cursor));
        stack[first_child..].reverse();
    }
    None
}
