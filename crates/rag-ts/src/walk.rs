//! Depth-first traversal over tree-sitter nodes.

use tree_sitter::Node;

use crate::syntax::NodeKind;

/// What a visitor wants the walk to do after seeing a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Do not descend into this node's children.
    Skip,
    /// Descend into this node's children.
    Continue,
}

/// Visits `root` and every named descendant in pre-order.
pub(crate) fn walk<'t>(root: Node<'t>, visit: impl FnMut(Node<'t>) -> Visit) {
    traverse(root, false, visit);
}

/// Like [`walk`], but never enters a nested function below `root`.
///
/// `root` itself is always visited, even when it is function-like.
pub(crate) fn walk_scope<'t>(root: Node<'t>, visit: impl FnMut(Node<'t>) -> Visit) {
    traverse(root, true, visit);
}

fn traverse<'t>(root: Node<'t>, scoped: bool, mut visit: impl FnMut(Node<'t>) -> Visit) {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if scoped && node.id() != root.id() && NodeKind::of(node).is_function_like() {
            continue;
        }
        if visit(node) == Visit::Skip {
            continue;
        }

        let mut cursor = node.walk();
        let first_child = stack.len();
        stack.extend(node.named_children(&mut cursor));
        stack[first_child..].reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse(src: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .unwrap();
        parser.parse(src, None).unwrap()
    }

    fn identifiers(src: &str, scoped: bool) -> Vec<String> {
        let tree = parse(src);
        let root = tree.root_node();
        let mut names = Vec::new();
        let visit = |node: Node<'_>| {
            if node.kind() == "identifier" {
                names.push(src[node.start_byte()..node.end_byte()].to_string());
            }
            Visit::Continue
        };
        if scoped {
            walk_scope(root, visit);
        } else {
            walk(root, visit);
        }
        names
    }

    #[test]
    fn walks_in_source_order() {
        assert_eq!(identifiers("a(b(c), d);", false), ["a", "b", "c", "d"]);
    }

    #[test]
    fn scoped_walk_skips_nested_functions() {
        let names = identifiers("x(); const f = () => { y(); }; z();", true);
        assert_eq!(names, ["x", "f", "z"]);
    }

    #[test]
    fn scoped_walk_enters_function_root() {
        let tree = parse("const f = () => { y(); };");
        let mut arrow = None;
        walk(tree.root_node(), |node| {
            if node.kind() == "arrow_function" {
                arrow = Some(node);
            }
            Visit::Continue
        });

        let mut seen = Vec::new();
        walk_scope(arrow.unwrap(), |node| {
            if node.kind() == "call_expression" {
                seen.push(node.kind());
            }
            Visit::Continue
        });
        assert_eq!(seen, ["call_expression"]);
    }

    #[test]
    fn skip_prunes_children() {
        let tree = parse("a(b(c));");
        let mut calls = 0;
        walk(tree.root_node(), |node| {
            if node.kind() == "call_expression" {
                calls += 1;
                return Visit::Skip;
            }
            Visit::Continue
        });
        assert_eq!(calls, 1);
    }
}
