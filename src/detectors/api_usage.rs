//! Reports which eXBuilder6 widget API names appear in the source.
//!
//! Matching is literal substring containment, so a catalog name that is a
//! prefix of a longer name (`this.show` inside `this.showMessage`) or of a
//! longer identifier is also reported. Accepted tradeoff: presence tracking
//! favors recall and a cheap scan over token precision.

use crate::detectors::Detector;
use crate::report::Finding;
use crate::rules;

pub struct ApiUsageDetector;

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Vec<String> {
        ApiUsageDetector
            .detect(source)
            .into_iter()
            .map(|f| match f {
                Finding::ApiUsage(api) => api,
                other => panic!("expected an API usage, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn no_apis_in_plain_source() {
        assert!(run("function f() { return 1; }").is_empty());
    }

    #[test]
    fn whole_identifier_reported_once() {
        let apis = run("this.getValue(); this.getValue(); this.getValue();");
        assert_eq!(apis, vec!["this.getValue"]);
    }

    #[test]
    fn prefix_name_double_reports() {
        let apis = run("this.showMessage('saved');");
        assert_eq!(apis, vec!["this.showMessage", "this.show"]);
    }

    #[test]
    fn results_follow_catalog_order() {
        let apis = run("this.blur();\nthis.form.load();");
        assert_eq!(apis, vec!["this.form", "this.blur"]);
    }
}

impl Detector for ApiUsageDetector {
    fn name(&self) -> &str {
        "api"
    }

    fn detect(&self, source: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for api in rules::EXBUILDER6_APIS {
            if source.contains(api) {
                findings.push(Finding::ApiUsage((*api).to_string()));
            }
        }
        findings
    }
}
