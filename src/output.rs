use crate::report::AnalysisResult;

/// Output format for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Text,
    Json,
}

/// Format a result as JSON.
pub fn format_json(result: &AnalysisResult) -> String {
    serde_json::to_string_pretty(result).expect("analysis result should be serializable")
}

/// Format a result as plain text (no colors).
pub fn format_text(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str("1. JavaScript syntax/logic issues:\n");
    if result.issues.is_empty() {
        out.push_str("  - No issues found\n");
    } else {
        for issue in &result.issues {
            match issue.line_number {
                Some(line) => out.push_str(&format!(
                    "  - [{}] {} (line {line})\n",
                    issue.severity, issue.message
                )),
                None => out.push_str(&format!("  - [{}] {}\n", issue.severity, issue.message)),
            }
        }
    }

    out.push_str("\n2. eXBuilder6 API usage:\n");
    if result.api_usages.is_empty() {
        out.push_str("  - No eXBuilder6 APIs detected\n");
    } else {
        for api in &result.api_usages {
            out.push_str(&format!("  - {api}\n"));
        }
    }

    out.push_str("\n3. Error patterns:\n");
    if result.errors.is_empty() {
        out.push_str("  - No error patterns found\n");
    } else {
        for error in &result.errors {
            out.push_str(&format!("  - {error}\n"));
        }
    }

    out.push_str("\n4. Execution flow:\n");
    for step in &result.execution_flow {
        out.push_str(&format!("  - {step}\n"));
    }

    if !result.recommendations.is_empty() {
        out.push_str("\nRecommendations:\n");
        for recommendation in &result.recommendations {
            out.push_str(&format!("  - {recommendation}\n"));
        }
    }

    if let Some(ref narrative) = result.narrative {
        out.push_str(&format!("\nNarrative:\n{narrative}\n"));
    }

    out
}

/// Format a result with terminal colors.
#[cfg(feature = "cli")]
pub fn format_pretty(result: &AnalysisResult) -> String {
    use colored::Colorize;

    use crate::report::Severity;

    let mut out = String::new();

    out.push_str(&format!("{}\n", "1. JavaScript syntax/logic issues:".bold()));
    if result.issues.is_empty() {
        out.push_str(&format!("  - {}\n", "No issues found".dimmed()));
    } else {
        for issue in &result.issues {
            let severity_color = match issue.severity {
                Severity::Critical => "red",
                Severity::High => "yellow",
                Severity::Medium => "cyan",
                Severity::Low => "blue",
            };
            let tag = format!("[{}]", issue.severity).color(severity_color).bold();
            match issue.line_number {
                Some(line) => out.push_str(&format!(
                    "  - {tag} {} {}\n",
                    issue.message,
                    format!("(line {line})").dimmed()
                )),
                None => out.push_str(&format!("  - {tag} {}\n", issue.message)),
            }
            out.push_str(&format!("    {}\n", issue.suggestion.dimmed()));
        }
    }

    out.push_str(&format!("\n{}\n", "2. eXBuilder6 API usage:".bold()));
    if result.api_usages.is_empty() {
        out.push_str(&format!("  - {}\n", "No eXBuilder6 APIs detected".dimmed()));
    } else {
        for api in &result.api_usages {
            out.push_str(&format!("  - {}\n", api.cyan()));
        }
    }

    out.push_str(&format!("\n{}\n", "3. Error patterns:".bold()));
    if result.errors.is_empty() {
        out.push_str(&format!("  - {}\n", "No error patterns found".dimmed()));
    } else {
        for error in &result.errors {
            out.push_str(&format!("  - {}\n", error.yellow()));
        }
    }

    out.push_str(&format!("\n{}\n", "4. Execution flow:".bold()));
    for step in &result.execution_flow {
        out.push_str(&format!("  - {step}\n"));
    }

    if !result.recommendations.is_empty() {
        out.push_str(&format!("\n{}\n", "Recommendations:".bold()));
        for recommendation in &result.recommendations {
            out.push_str(&format!("  - {recommendation}\n"));
        }
    }

    if let Some(ref narrative) = result.narrative {
        out.push_str(&format!("\n{}\n{narrative}\n", "Narrative:".bold()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_renders_every_section_with_no_findings_lines() {
        let rendered = format_text(&crate::analyze(""));
        assert!(rendered.contains("1. JavaScript syntax/logic issues:"));
        assert!(rendered.contains("No issues found"));
        assert!(rendered.contains("2. eXBuilder6 API usage:"));
        assert!(rendered.contains("No eXBuilder6 APIs detected"));
        assert!(rendered.contains("3. Error patterns:"));
        assert!(rendered.contains("No error patterns found"));
        assert!(rendered.contains("4. Execution flow:"));
        assert!(rendered.contains("Sequential execution"));
        assert!(rendered.contains("Recommendations:"));
    }

    #[test]
    fn issue_bullets_carry_severity_and_line() {
        let rendered = format_text(&crate::analyze("eval(x)"));
        assert!(
            rendered.contains("  - [critical] eval() is a security risk (line 1)"),
            "got:\n{rendered}"
        );
    }

    #[test]
    fn narrative_section_renders_when_present() {
        let mut result = crate::analyze("var answer = 42;");
        result.narrative = Some("Looks fine overall.".to_string());
        let rendered = format_text(&result);
        assert!(rendered.contains("Narrative:\nLooks fine overall.\n"));
    }

    #[test]
    fn json_output_round_trips() {
        let result = crate::analyze("function f(){ this.getValue(); }");
        let parsed: AnalysisResult =
            serde_json::from_str(&format_json(&result)).expect("parse rendered JSON");
        assert_eq!(parsed, result);
    }
}
