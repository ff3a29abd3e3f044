//! The subset of the JavaScript/TypeScript grammar the extractor inspects.

use rag_core::Location;
use tree_sitter::Node;

/// Node kinds relevant to function extraction. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// `function foo() {}`, `function* foo() {}`, and bodiless signatures.
    FunctionDeclaration,
    /// `function () {}` used as an expression.
    FunctionExpression,
    /// `() => ...`
    ArrowFunction,
    /// Class or object-literal method.
    Method,
    /// `name = value` inside `const`/`let`/`var`.
    VariableDeclarator,
    /// `( expr )`
    Parenthesized,
    /// `callee(args)`
    Call,
    /// `object.property` and `object?.property`
    Member,
    /// `await expr`
    Await,
    /// `` `...` ``, also the argument of a tagged template
    TemplateString,
    /// `return expr;`
    Return,
    /// JSX element, self-closing element, or fragment.
    Markup,
    /// `{ ... }` function body.
    Block,
    /// Plain identifier.
    Identifier,
    /// Comment
    Comment,
    /// Anything else.
    Other,
}

impl NodeKind {
    pub(crate) fn of(node: Node<'_>) -> Self {
        match node.kind() {
            "function_declaration" | "generator_function_declaration" | "function_signature" => {
                Self::FunctionDeclaration
            }
            "function_expression" | "generator_function" => Self::FunctionExpression,
            "arrow_function" => Self::ArrowFunction,
            "method_definition" => Self::Method,
            "variable_declarator" => Self::VariableDeclarator,
            "parenthesized_expression" => Self::Parenthesized,
            "call_expression" => Self::Call,
            "member_expression" => Self::Member,
            "await_expression" => Self::Await,
            "template_string" => Self::TemplateString,
            "return_statement" => Self::Return,
            // Fragments parse as `jsx_element` with an unnamed opening tag.
            "jsx_element" | "jsx_self_closing_element" | "jsx_fragment" => Self::Markup,
            "statement_block" => Self::Block,
            "identifier" => Self::Identifier,
            "comment" => Self::Comment,
            _ => Self::Other,
        }
    }

    /// Nodes that open a new function scope.
    pub(crate) fn is_function_like(self) -> bool {
        matches!(
            self,
            Self::FunctionDeclaration
                | Self::FunctionExpression
                | Self::ArrowFunction
                | Self::Method
        )
    }
}

/// Source text with an index of line starts.
///
/// Tree-sitter rows only break on `\n`. Lines here follow ECMAScript line
/// terminators: `\n`, `\r\n`, a lone `\r`, U+2028 and U+2029.
pub(crate) struct SourceText<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = text.char_indices().peekable();
        while let Some((at, c)) = chars.next() {
            match c {
                '\r' if chars.peek().is_some_and(|&(_, next)| next == '\n') => {}
                '\n' | '\r' | '\u{2028}' | '\u{2029}' => line_starts.push(at + c.len_utf8()),
                _ => {}
            }
        }
        Self { text, line_starts }
    }

    pub(crate) fn text(&self, node: Node<'_>) -> &'a str {
        self.text.get(node.start_byte()..node.end_byte()).unwrap_or("")
    }

    /// Start of `node` as a 1-based line and a UTF-16 column.
    pub(crate) fn location(&self, node: Node<'_>) -> Location {
        self.location_at(node.start_byte())
    }

    fn location_at(&self, offset: usize) -> Location {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line.saturating_sub(1)];
        let column = self
            .text
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.encode_utf16().count());
        Location::new(line, column)
    }
}

/// First named child that is not a comment.
pub(crate) fn first_expression(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| NodeKind::of(*child) != NodeKind::Comment);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse(src: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .unwrap();
        parser.parse(src, None).unwrap()
    }

    fn find<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
        if node.kind() == kind {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        children.into_iter().find_map(|c| find(c, kind))
    }

    #[test]
    fn classifies_function_shapes() {
        let tree = parse("function A() {}\nconst b = () => 1;\nconst c = function () {};\n");
        let root = tree.root_node();
        let decl = find(root, "function_declaration").unwrap();
        assert_eq!(NodeKind::of(decl), NodeKind::FunctionDeclaration);
        let arrow = find(root, "arrow_function").unwrap();
        assert!(NodeKind::of(arrow).is_function_like());
        let expr = find(root, "function_expression").unwrap();
        assert_eq!(NodeKind::of(expr), NodeKind::FunctionExpression);
    }

    #[test]
    fn fragment_is_markup() {
        let tree = parse("const x = <></>;");
        let element = find(tree.root_node(), "jsx_element").unwrap();
        assert_eq!(NodeKind::of(element), NodeKind::Markup);
    }

    #[test]
    fn location_counts_utf16_columns() {
        let src = "const s = \"é😀\"; fetch(s);";
        let tree = parse(src);
        let call = find(tree.root_node(), "call_expression").unwrap();
        // `é` is one UTF-16 unit, `😀` is two.
        assert_eq!(SourceText::new(src).location(call), Location::new(1, 17));
        assert_eq!(call.start_position().column, 20);
    }

    #[test]
    fn location_is_one_based_line() {
        let src = "\n\n  foo();";
        let tree = parse(src);
        let call = find(tree.root_node(), "call_expression").unwrap();
        assert_eq!(SourceText::new(src).location(call), Location::new(3, 2));
    }

    #[test]
    fn first_expression_skips_comments() {
        let src = "function f() { return /* note */ 1; }";
        let tree = parse(src);
        let ret = find(tree.root_node(), "return_statement").unwrap();
        let expr = first_expression(ret).unwrap();
        assert_eq!(SourceText::new(src).text(expr), "1");
    }

    #[test]
    fn every_line_terminator_starts_a_line() {
        let text = "a\r\nb\rc\u{2028}d\u{2029}e\nf";
        let src = SourceText::new(text);
        let line_of = |needle: char| src.location_at(text.find(needle).unwrap());
        assert_eq!(line_of('a'), Location::new(1, 0));
        assert_eq!(line_of('b'), Location::new(2, 0));
        assert_eq!(line_of('c'), Location::new(3, 0));
        assert_eq!(line_of('d'), Location::new(4, 0));
        assert_eq!(line_of('e'), Location::new(5, 0));
        assert_eq!(line_of('f'), Location::new(6, 0));
    }

    #[test]
    fn carriage_return_only_source() {
        let src = "function A() {\r  fetch('/x');\r}";
        let tree = parse(src);
        let call = find(tree.root_node(), "call_expression").unwrap();
        assert_eq!(SourceText::new(src).location(call), Location::new(2, 2));
    }

    #[test]
    fn awaited_generic_call_shape() {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            .unwrap();
        let tree = parser
            .parse("async function f() { await fetch<T>('/x'); }", None)
            .unwrap();
        let call = find(tree.root_node(), "call_expression").unwrap();
        let callee = call.child_by_field_name("function").unwrap();
        assert_eq!(NodeKind::of(callee), NodeKind::Await);
    }
}
