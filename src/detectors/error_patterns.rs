use crate::detectors::Detector;
use crate::report::Finding;
use crate::rules;

pub struct ErrorPatternDetector;


impl Detector for ErrorPatternDetector {
    fn name(&self) -> &str {
        "errors"
    }

    fn detect(&self, source: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for rule in rules::ERROR_RULES {
            match rule.regex() {
                Some(re) => {
                    if re.is_match(source) {
                        findings.push(Finding::ErrorNote(rule.message.to_string()));
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
