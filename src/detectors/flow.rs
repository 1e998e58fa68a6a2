use std::sync::LazyLock;

use regex::Regex;

use crate::detectors::Detector;
use crate::report::Finding;
use crate::rules::pattern;

/// The line reported when no structural signal fires.
pub(crate) const SEQUENTIAL_FALLBACK: &str = "Sequential execution";

pattern!(FUNCTION_DEFS, r"function\s+(\w+)\s*\(");
pattern!(EVENT_LISTENERS, r"\.addEventListener\([^)]+\)");
pattern!(ASYNC_KEYWORDS, r"\b(setTimeout|setInterval|fetch|Promise|async|await)\b");
pattern!(CONDITIONAL_KEYWORDS, r"\b(if|else|switch|case)\b");
pattern!(LOOP_KEYWORDS, r"\b(for|while|do)\b");

pub struct FlowSummarizer;


impl Detector for FlowSummarizer {
    fn name(&self) -> &str {
        "flow"
    }

    fn detect(&self, source: &str) -> Vec<Finding> {
        let mut steps = Vec::new();
        let mut notes = Vec::new();

        match FUNCTION_DEFS.as_ref() {
            Some(re) => {
                let names: Vec<&str> = re
                    .captures_iter(source)
                    .filter_map(|caps| caps.get(1))
                    .map(|m| m.as_str())
                    .collect();
                if !names.is_empty() {
                    steps.push(format!("Function definitions: {}", names.join(", ")));
                }
            }
            None => notes.push(self.skipped("function definitions")),
        }

        match EVENT_LISTENERS.as_ref() {
            Some(re) => {
                let registrations: Vec<&str> = re.find_iter(source).map(|m| m.as_str()).collect();
                if !registrations.is_empty() {
                    steps.push(format!("Event listeners: {}", registrations.join(", ")));
                }
            }
            None => notes.push(self.skipped("event listeners")),
        }

        for (label, pattern) in [
            ("Asynchronous operations", &ASYNC_KEYWORDS),
            ("Conditional branches", &CONDITIONAL_KEYWORDS),
            ("Loops", &LOOP_KEYWORDS),
        ] {
            match pattern.as_ref() {
                Some(re) => {
                    if let Some(line) = distinct_keywords(re, source, label) {
                        steps.push(line);
                    }
                }
                None => notes.push(self.skipped(label)),
            }
        }

        if steps.is_empty() {
            steps.push(SEQUENTIAL_FALLBACK.to_string());
        }

        let mut findings: Vec<Finding> = steps.into_iter().map(Finding::FlowStep).collect();
        findings.append(&mut notes);
        findings
    }
}

impl FlowSummarizer {
    fn skipped(&self, what: &str) -> Finding {
        Finding::ErrorNote(format!(
            "{} signal skipped ({what}): pattern could not be evaluated",
            self.name()
        ))
    }
}

/// One line listing each keyword the pattern matched, first occurrence first.
fn distinct_keywords(re: &Regex, source: &str, label: &str) -> Option<String> {
    let mut seen: Vec<&str> = Vec::new();
    for caps in re.captures_iter(source) {
        if let Some(m) = caps.get(1) {
            if !seen.contains(&m.as_str()) {
                seen.push(m.as_str());
            }
        }
    }
    if seen.is_empty() {
        None
    } else {
        Some(format!("{label}: {}", seen.join(", ")))
    }
}
