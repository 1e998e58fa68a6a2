pub mod detectors;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod rules;

use std::path::Path;

use pipeline::Pipeline;
use report::AnalysisResult;

/// Analyze a JavaScript source string and return the structured result.
pub fn analyze(source: &str) -> AnalysisResult {
    let pipeline = Pipeline::with_defaults();
    pipeline.run(source)
}

/// Analyze a JavaScript file at the given path and return the structured result.
pub fn analyze_file(path: &Path) -> std::io::Result<AnalysisResult> {
    let source = std::fs::read_to_string(path)?;
    let pipeline = Pipeline::with_defaults();
    Ok(pipeline.run(&source))
}
