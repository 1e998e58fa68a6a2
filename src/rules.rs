//! The process-wide rule catalogs.
//!
//! Catalogs are static, ordered, and read-only: detection order and output
//! order follow table order. Patterns compile lazily on first use; a pattern
//! that fails to compile stays `None` and the owning detector reports that
//! through the `errors` channel instead of matching (see
//! [`crate::detectors`]).

use std::sync::LazyLock;

use regex::Regex;

use crate::report::{Issue, Severity};

/// A single detection rule: a pattern plus the fixed finding text.
#[derive(Debug)]
pub struct Rule {
    pub pattern: &'static LazyLock<Option<Regex>>,
    pub message: &'static str,
    pub category: &'static str,
    pub severity: Severity,
}

impl Rule {
    /// The compiled pattern, or `None` if it failed to compile.
    pub fn regex(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    /// Build the issue this rule reports, anchored at `line_number`.
    pub fn to_issue(&self, line_number: Option<usize>) -> Issue {
        Issue {
            category: self.category.to_string(),
            message: self.message.to_string(),
            severity: self.severity,
            priority: self.severity.into(),
            line_number,
            suggestion: suggestion_for(self.category).to_string(),
        }
    }
}

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($re).ok());
    };
}

pub(crate) use pattern;

pattern!(VAR_UNDEFINED, r"var\s+\w+\s*=\s*undefined");
pattern!(LOOSE_NULL_EQ, r"==\s*null");
pattern!(LOOSE_UNDEFINED_EQ, r"==\s*undefined");
pattern!(CONSOLE_LOG, r"console\.log\(");
pattern!(EVAL_CALL, r"eval\(");
pattern!(ZERO_TIMEOUT, r"setTimeout\([^,]+,\s*0\)");
pattern!(FUNCTION_CTOR, r"\bFunction\s*\(");
pattern!(DOCUMENT_WRITE, r"document\.write\s*\(");
pattern!(WHILE_TRUE, r"while\s*\(\s*true\s*\)");
pattern!(FOR_EVER, r"for\s*\(\s*;\s*;\s*\)");

pattern!(GET_BY_ID_DEREF, r"\.getElementById\([^)]*\)\.");
pattern!(QUERY_SELECTOR_DEREF, r"\.querySelector\([^)]*\)\.");
pattern!(INNER_HTML_ASSIGN, r"\.innerHTML\s*=");
pattern!(INNER_HTML_APPEND, r"\.innerHTML\s*\+=");
pattern!(OUTER_HTML_ASSIGN, r"\.outerHTML\s*=");
pattern!(JSON_PARSE, r"JSON\.parse\([^)]*\)");
pattern!(SPLIT_INDEX, r"\.split\([^)]*\)\[");

macro_rules! rule {
    ($pattern:expr, $message:expr, $category:expr, $severity:expr) => {
        Rule {
            pattern: $pattern,
            message: $message,
            category: $category,
            severity: $severity,
        }
    };
}

/// Generic JavaScript pitfalls, in detection order.
pub static PITFALL_RULES: &[Rule] = &[
    rule!(&VAR_UNDEFINED, "Assigning undefined in a var declaration is unnecessary", "unnecessary-code", Severity::Low),
    rule!(&LOOSE_NULL_EQ, "Use === when comparing against null", "comparison", Severity::Low),
    rule!(&LOOSE_UNDEFINED_EQ, "Use === when comparing against undefined", "comparison", Severity::Low),
    rule!(&CONSOLE_LOG, "console.log should be removed from production code", "performance", Severity::Low),
    rule!(&EVAL_CALL, "eval() is a security risk", "security", Severity::Critical),
    rule!(&ZERO_TIMEOUT, "Consider setImmediate instead of setTimeout(..., 0)", "performance", Severity::Low),
    rule!(&FUNCTION_CTOR, "The Function constructor is a security risk", "security", Severity::Critical),
    rule!(&DOCUMENT_WRITE, "document.write is a security risk", "security", Severity::Critical),
    rule!(&WHILE_TRUE, "Possible infinite loop", "performance", Severity::High),
    rule!(&FOR_EVER, "Possible infinite loop", "performance", Severity::High),
];

/// Runtime-risk patterns, in detection order.
pub static ERROR_RULES: &[Rule] = &[
    rule!(&GET_BY_ID_DEREF, "getElementById result may be null", "null-reference", Severity::High),
    rule!(&QUERY_SELECTOR_DEREF, "querySelector result may be null", "null-reference", Severity::High),
    rule!(&INNER_HTML_ASSIGN, "Assigning to innerHTML carries XSS risk", "security", Severity::Critical),
    rule!(&INNER_HTML_APPEND, "Appending with innerHTML += rebuilds the element's subtree", "performance", Severity::Medium),
    rule!(&OUTER_HTML_ASSIGN, "Assigning to outerHTML carries XSS risk", "security", Severity::Critical),
    rule!(&JSON_PARSE, "JSON.parse should be wrapped in try-catch", "json-parsing", Severity::High),
    rule!(&SPLIT_INDEX, "split may return an empty array", "array-access", Severity::Medium),
];

/// Method and property names of the eXBuilder6 widget API, in catalog order.
pub static EXBUILDER6_APIS: &[&str] = &[
    "this.form", "this.grid", "this.tree", "this.combo", "this.button",
    "this.onLoad", "this.onClick", "this.onChange", "this.onSelect",
    "this.getValue", "this.setValue", "this.getData", "this.setData",
    "this.addRow", "this.deleteRow", "this.updateRow",
    "this.showMessage", "this.showConfirm", "this.showAlert",
    "this.openPopup", "this.closePopup", "this.getParent",
    "this.getChild", "this.getSibling", "this.getRoot",
    "this.getSelected", "this.getChecked", "this.getExpanded",
    "this.setSelected", "this.setChecked", "this.setExpanded",
    "this.refresh", "this.reload", "this.clear",
    "this.enable", "this.disable", "this.show", "this.hide",
    "this.focus", "this.blur", "this.scrollTo", "this.scrollIntoView",
];

/// Fixed guidance attached to every issue in a category.
pub fn suggestion_for(category: &str) -> &'static str {
    match category {
        "syntax" => "Fix the syntax error so the code can run.",
        "unnecessary-code" => "Remove the unnecessary code.",
        "comparison" => "Use the strict comparison operators (===, !==).",
        "performance" => "Remove debug output and guard against runaway loops before shipping.",
        "security" => "Avoid dynamic code execution and sanitize anything rendered into the page.",
        "null-reference" => "Add a null check or use optional chaining (?.).",
        "json-parsing" => "Wrap the call in try-catch and handle the failure path.",
        "array-access" => "Check the array length before indexing into it.",
        _ => "Review and correct the flagged code.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Priority;

    #[test]
    fn every_catalog_pattern_compiles() {
        for rule in PITFALL_RULES.iter().chain(ERROR_RULES.iter()) {
            assert!(
                rule.regex().is_some(),
                "pattern for \"{}\" failed to compile",
                rule.message
            );
        }
    }

    #[test]
    fn api_catalog_has_forty_two_entries() {
        assert_eq!(EXBUILDER6_APIS.len(), 42);
        assert_eq!(EXBUILDER6_APIS[0], "this.form");
        assert_eq!(EXBUILDER6_APIS[41], "this.scrollIntoView");
    }

    #[test]
    fn catalog_order_is_stable() {
        assert_eq!(PITFALL_RULES[0].category, "unnecessary-code");
        assert_eq!(PITFALL_RULES[1].message, "Use === when comparing against null");
        assert_eq!(ERROR_RULES[0].message, "getElementById result may be null");
    }

    #[test]
    fn to_issue_carries_rule_metadata() {
        let issue = PITFALL_RULES[4].to_issue(Some(3));
        assert_eq!(issue.category, "security");
        assert_eq!(issue.severity, Severity::Critical);
        assert_eq!(issue.priority, Priority::High);
        assert_eq!(issue.line_number, Some(3));
        assert_eq!(issue.suggestion, suggestion_for("security"));
    }

    #[test]
    fn unknown_category_gets_generic_suggestion() {
        assert_eq!(suggestion_for("anything-else"), "Review and correct the flagged code.");
    }
}
