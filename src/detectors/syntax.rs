use tree_sitter::{Language, Node, Parser};

use crate::detectors::Detector;
use crate::report::{Finding, Issue, Severity};
use crate::rules;

pub struct SyntaxDetector;

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Vec<Finding> {
        SyntaxDetector.detect(source)
    }

    #[test]
    fn valid_source_produces_no_findings() {
        assert!(run("function f() { return 1; }").is_empty());
    }

    #[test]
    fn empty_source_is_valid() {
        assert!(run("").is_empty());
    }

    #[test]
    fn broken_source_produces_one_syntax_issue() {
        let findings = run("function f( {");
        assert_eq!(findings.len(), 1);
        let Finding::Issue(issue) = &findings[0] else {
            panic!("expected an issue, got {:?}", findings[0]);
        };
        assert_eq!(issue.category, "syntax");
        assert_eq!(issue.severity, Severity::High);
        assert!(issue.message.starts_with("Syntax error:"), "got {:?}", issue.message);
        assert_eq!(issue.line_number, Some(1));
    }

    #[test]
    fn diagnostic_names_a_position() {
        let findings = run("if (x {");
        let Finding::Issue(issue) = &findings[0] else {
            panic!("expected an issue, got {:?}", findings[0]);
        };
        assert!(issue.message.contains("line"), "got {:?}", issue.message);
        assert!(issue.line_number.is_some());
    }
}

impl Detector for SyntaxDetector {
    fn name(&self) -> &str {
        "syntax"
    }

    fn detect(&self, source: &str) -> Vec<Finding> {
        let language: Language = tree_sitter_javascript::LANGUAGE.into();
        let mut parser = Parser::new();
        if parser.set_language(&language).is_err() {
            return vec![Finding::ErrorNote(format!(
                "{} check skipped: JavaScript grammar could not be loaded",
                self.name()
            ))];
        }

        let Some(tree) = parser.parse(source.as_bytes(), None) else {
            return vec![Finding::ErrorNote(format!(
                "{} check skipped: parser produced no tree",
                self.name()
            ))];
        };

        let root = tree.root_node();
        if !root.has_error() {
            return Vec::new();
        }

        let node = first_error(root).unwrap_or(root);
        let issue = Issue {
            category: "syntax".to_string(),
            message: format!("Syntax error: {}", describe(node, source)),
            severity: Severity::High,
            priority: Severity::High.into(),
            line_number: Some(node.start_position().row + 1),
            suggestion: rules::suggestion_for("syntax").to_string(),
        };
        vec![Finding::Issue(issue)]
    }
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    for child in children {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

fn describe(node: Node<'_>, source: &str) -> String {
    let position = node.start_position();
    let line = position.row + 1;
    let column = position.column + 1;
    if node.is_missing() {
        return format!("missing '{}' at line {line}, column {column}", node.kind());
    }
    let snippet: String = node
        .utf8_text(source.as_bytes())
        .unwrap_or_default()
        .chars()
        .take(30)
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    let snippet = snippet.trim();
    if snippet.is_empty() {
        format!("unexpected token at line {line}, column {column}")
    } else {
        format!("unexpected '{snippet}' at line {line}, column {column}")
    }
}
