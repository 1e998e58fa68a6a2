use crate::detectors::flow::SEQUENTIAL_FALLBACK;
use crate::detectors::{default_detectors, Detector};
use crate::report::{AnalysisResult, Finding, Issue, Severity, Statistics};

/// Orchestrates detectors and aggregates their findings into a result.
pub struct Pipeline {
    detectors: Vec<Box<dyn Detector>>,
}

impl Pipeline {
    pub fn new(detectors: Vec<Box<dyn Detector>>) -> Self {
        Self { detectors }
    }

    pub fn with_defaults() -> Self {
        Self::new(default_detectors())
    }

    pub fn run(&self, source: &str) -> AnalysisResult {
        let findings: Vec<Finding> = self
            .detectors
            .iter()
            .flat_map(|d| d.detect(source))
            .collect();

        let mut issues = Vec::new();
        let mut api_usages = Vec::new();
        let mut errors = Vec::new();
        let mut execution_flow = Vec::new();

        for finding in findings {
            match finding {
                Finding::Issue(issue) => issues.push(issue),
                Finding::ApiUsage(api) => api_usages.push(api),
                Finding::ErrorNote(note) => errors.push(note),
                Finding::FlowStep(step) => execution_flow.push(step),
            }
        }

        // Holds even for caller-assembled detector sets without a summarizer.
        if execution_flow.is_empty() {
            execution_flow.push(SEQUENTIAL_FALLBACK.to_string());
        }

        let statistics = self.statistics(&issues, &api_usages, &errors);
        let recommendations = self.recommend(&statistics);

        AnalysisResult {
            issues,
            api_usages,
            errors,
            execution_flow,
            statistics: Some(statistics),
            recommendations,
            narrative: None,
        }
    }

    fn statistics(&self, issues: &[Issue], api_usages: &[String], errors: &[String]) -> Statistics {
        let by_severity =
            |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();
        Statistics {
            total_issues: issues.len(),
            syntax_issues: issues.iter().filter(|i| i.category == "syntax").count(),
            api_usages: api_usages.len(),
            error_patterns: errors.len(),
            critical_issues: by_severity(Severity::Critical),
            high_issues: by_severity(Severity::High),
            medium_issues: by_severity(Severity::Medium),
            low_issues: by_severity(Severity::Low),
        }
    }

    fn recommend(&self, statistics: &Statistics) -> Vec<String> {
        let mut recommendations = Vec::new();
        if statistics.critical_issues > 0 {
            recommendations.push("Fix security-critical issues immediately.".to_string());
        }
        if statistics.high_issues > 0 {
            recommendations.push("Resolve high-severity issues first.".to_string());
        }
        if statistics.syntax_issues > 0 {
            recommendations.push("Fix syntax errors so the code can run.".to_string());
        }
        if statistics.error_patterns > 0 {
            recommendations.push(
                "Guard DOM lookups, JSON parsing, and array access against runtime failures."
                    .to_string(),
            );
        }
        if recommendations.is_empty() {
            recommendations.push("Code quality looks good. Keep up the current practices.".to_string());
        }
        recommendations
    }
}
