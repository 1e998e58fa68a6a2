use crate::detectors::Detector;
use crate::report::Finding;
use crate::rules;

pub struct PitfallDetector;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Priority, Severity};

    fn run(source: &str) -> Vec<Finding> {
        PitfallDetector.detect(source)
    }

    fn messages(findings: &[Finding]) -> Vec<String> {
        findings
            .iter()
            .map(|f| match f {
                Finding::Issue(issue) => issue.message.clone(),
                other => panic!("expected an issue, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn clean_source_produces_no_findings() {
        assert!(run("let total = 1;").is_empty());
    }

    #[test]
    fn null_comparison_is_flagged() {
        let findings = run("if (x == null) {}");
        assert_eq!(messages(&findings), vec!["Use === when comparing against null"]);
        let Finding::Issue(issue) = &findings[0] else {
            unreachable!();
        };
        assert_eq!(issue.category, "comparison");
        assert_eq!(issue.severity, Severity::Low);
        assert_eq!(issue.priority, Priority::Low);
        assert_eq!(issue.line_number, Some(1));
    }

    #[test]
    fn one_issue_per_rule_regardless_of_occurrences() {
        let findings = run("console.log(a);\nconsole.log(b);\nconsole.log(c);");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn output_follows_catalog_order_not_text_order() {
        let findings = run("eval(a);\nconsole.log(b);");
        assert_eq!(
            messages(&findings),
            vec![
                "console.log should be removed from production code",
                "eval() is a security risk",
            ]
        );
    }

    #[test]
    fn line_number_points_at_first_match() {
        let findings = run("var a = 1;\nvar b = undefined;\nvar c = undefined;");
        let Finding::Issue(issue) = &findings[0] else {
            unreachable!();
        };
        assert_eq!(issue.line_number, Some(2));
    }

    #[test]
    fn infinite_loop_is_high_severity() {
        let findings = run("while (true) { tick(); }");
        let Finding::Issue(issue) = &findings[0] else {
            unreachable!();
        };
        assert_eq!(issue.message, "Possible infinite loop");
        assert_eq!(issue.severity, Severity::High);
    }
}

impl Detector for PitfallDetector {
    fn name(&self) -> &str {
        "pitfalls"
    }

    fn detect(&self, source: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for rule in rules::PITFALL_RULES {
            match rule.regex() {
                Some(re) => {
                    if let Some(m) = re.find(source) {
                        let line = line_of(source, m.start());
                        findings.push(Finding::Issue(rule.to_issue(Some(line))));
                    }
                }
                None => findings.push(Finding::ErrorNote(format!(
                    "{} rule could not be evaluated: {}",
                    self.name(),
                    rule.message
                ))),
            }
        }
        findings
    }
}

/// 1-based line of a byte offset into the source.
fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}
