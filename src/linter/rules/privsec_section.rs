//! The `privsec-section` lint rule.
//!
//! Specification documents are expected to discuss privacy and security
//! considerations. This rule flags documents whose headings never mention
//! them.

use crate::config::Config;
use crate::dom::Document;
use crate::linter::{LintIssue, LintRule};

const RULE_NAME: &str = "privsec-section";

const HEADING_TAGS: &[&str] = &["h2", "h3", "h4", "h5", "h6"];

pub struct PrivsecSection;

impl LintRule for PrivsecSection {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn check(&self, doc: &Document, _conf: &Config) -> Vec<LintIssue> {
        let has_privsec_heading = doc.elements().into_iter().any(|el| {
            doc.tag(el)
                .map(|tag| HEADING_TAGS.contains(&tag))
                .unwrap_or(false)
                && is_privsec_heading(&doc.text_content(el))
        });

        if has_privsec_heading {
            return Vec::new();
        }

        vec![LintIssue {
            rule: RULE_NAME.to_string(),
            message: "Document lacks a privacy and/or security considerations section."
                .to_string(),
            hint: Some(
                "Add a section with a heading such as \"Privacy and Security Considerations\"."
                    .to_string(),
            ),
        }]
    }
}

fn is_privsec_heading(text: &str) -> bool {
    let text = text.to_lowercase();
    text.contains("considerations") && (text.contains("privacy") || text.contains("security"))
}
