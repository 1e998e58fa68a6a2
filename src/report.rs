use serde::{Deserialize, Serialize};

/// How serious a single issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Triage priority, derived from severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl From<Severity> for Priority {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical | Severity::High => Priority::High,
            Severity::Medium => Priority::Medium,
            Severity::Low => Priority::Low,
        }
    }
}

/// A single problem found in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Which concern the issue belongs to (e.g. "syntax", "security").
    pub category: String,
    /// Human-readable description of what was detected.
    pub message: String,
    pub severity: Severity,
    pub priority: Priority,
    /// 1-based line of the first occurrence, when known.
    pub line_number: Option<usize>,
    /// How to fix or avoid the problem.
    pub suggestion: String,
}

/// Summary counts over a finished analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_issues: usize,
    pub syntax_issues: usize,
    pub api_usages: usize,
    pub error_patterns: usize,
    pub critical_issues: usize,
    pub high_issues: usize,
    pub medium_issues: usize,
    pub low_issues: usize,
}

/// The full analysis result for a single source input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Syntax and pitfall issues, detector order then catalog order.
    pub issues: Vec<Issue>,
    /// eXBuilder6 API names found, catalog order, each at most once.
    pub api_usages: Vec<String>,
    /// Runtime-risk findings plus any detector degradation notes.
    pub errors: Vec<String>,
    /// Never empty; holds the fallback line when nothing specific was found.
    pub execution_flow: Vec<String>,
    pub statistics: Option<Statistics>,
    pub recommendations: Vec<String>,
    /// Free-form reviewer commentary, filled in by an external layer.
    pub narrative: Option<String>,
}

/// One element of a detector's output.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// A syntax or pitfall issue.
    Issue(Issue),
    /// An eXBuilder6 API name seen in the source.
    ApiUsage(String),
    /// A runtime-risk message or a degradation note.
    ErrorNote(String),
    /// One line of the execution-flow summary.
    FlowStep(String),
}
