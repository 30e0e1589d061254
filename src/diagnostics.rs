//! Non-fatal warning collection.
//!
//! Pipeline stages report anomalies here instead of failing; the binary
//! drains the collected warnings and presents them after rendering. Each
//! warning also goes to the `log` facade as it is recorded.

/// A single non-fatal warning raised by a pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Human-readable message.
    pub message: String,
    /// The stage that raised the warning, e.g. `kikv/defaults`.
    pub plugin: String,
    /// Optional remediation hint.
    pub hint: Option<String>,
}

/// Collects warnings raised while processing a single document.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics::default()
    }

    /// Record a warning.
    pub fn warn<M: Into<String>, P: Into<String>>(&mut self, message: M, plugin: P) {
        self.warn_with_hint(message, plugin, None::<String>);
    }

    /// Record a warning with a remediation hint.
    pub fn warn_with_hint<M, P, H>(&mut self, message: M, plugin: P, hint: Option<H>)
    where
        M: Into<String>,
        P: Into<String>,
        H: Into<String>,
    {
        let warning = Warning {
            message: message.into(),
            plugin: plugin.into(),
            hint: hint.map(Into::into),
        };
        match &warning.hint {
            Some(hint) => log::warn!("[{}] {} ({})", warning.plugin, warning.message, hint),
            None => log::warn!("[{}] {}", warning.plugin, warning.message),
        }
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn warnings_are_collected_in_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn("first", "kikv/defaults");
        diagnostics.warn_with_hint("second", "kikv/headers", Some("use a `.copyright` element"));

        let warnings = diagnostics.warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].message, "first");
        assert_eq!(warnings[1].plugin, "kikv/headers");
        assert_eq!(
            warnings[1].hint.as_deref(),
            Some("use a `.copyright` element")
        );
    }
}
