pub mod api_usage;
pub mod error_patterns;
pub mod flow;
pub mod pitfalls;
pub mod syntax;

use crate::report::Finding;

/// Trait for all source text detectors.
pub trait Detector: Send + Sync {
    /// A short name identifying this detector.
    fn name(&self) -> &str;

    /// Scan the given source text and return findings.
    fn detect(&self, source: &str) -> Vec<Finding>;
}

/// Returns the default set of detectors, in the order their findings
/// should appear in the result.
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(syntax::SyntaxDetector),
        Box::new(pitfalls::PitfallDetector),
        Box::new(api_usage::ApiUsageDetector),
        Box::new(error_patterns::ErrorPatternDetector),
        Box::new(flow::FlowSummarizer),
    ]
}
