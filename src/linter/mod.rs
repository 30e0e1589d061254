//! Document linting.
//!
//! Rules are held by an explicit [`LintRegistry`] owned by the caller; there
//! is no process-wide registry. Profiles register their rules when they are
//! initialized, and the resolved lint configuration decides which registered
//! rules actually run.

mod rules;

pub use rules::privsec_section::PrivsecSection;

use crate::config::{Config, LintConfig};
use crate::diagnostics::Diagnostics;
use crate::dom::Document;
use std::collections::BTreeMap;

/// A problem a lint rule found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// Name of the rule that raised the issue.
    pub rule: String,
    pub message: String,
    pub hint: Option<String>,
}

/// A named validation check run against a document.
pub trait LintRule {
    /// Stable rule identifier, used in the `lint` configuration map.
    fn name(&self) -> &'static str;

    fn check(&self, doc: &Document, conf: &Config) -> Vec<LintIssue>;
}

/// Holds the lint rules available to one pipeline run.
#[derive(Default)]
pub struct LintRegistry {
    rules: BTreeMap<&'static str, Box<dyn LintRule>>,
}

impl LintRegistry {
    pub fn new() -> LintRegistry {
        LintRegistry::default()
    }

    /// Register a rule. Registering a second rule under an already-known
    /// name replaces the earlier one.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.name(), rule);
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Run every rule the resolved configuration enables.
    ///
    /// A toggle naming a rule nobody registered is reported through the
    /// diagnostics sink rather than treated as an error.
    pub fn run(
        &self,
        doc: &Document,
        conf: &Config,
        diagnostics: &mut Diagnostics,
    ) -> Vec<LintIssue> {
        let toggles = match &conf.lint {
            LintConfig::Disabled => return Vec::new(),
            LintConfig::Rules(toggles) => toggles,
        };

        let mut issues = Vec::new();
        for (name, enabled) in toggles {
            if !enabled {
                continue;
            }
            match self.rules.get(name.as_str()) {
                Some(rule) => issues.extend(rule.check(doc, conf)),
                None => diagnostics.warn(
                    format!("Lint rule `{name}` is enabled but not registered."),
                    "linter",
                ),
            }
        }
        issues
    }
}
