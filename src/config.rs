//! Pipeline configuration.
//!
//! Configuration is expressed as an ordered list of layers: host-wide
//! defaults, then profile defaults, then whatever the user supplied in
//! `specdoc.toml`. Layers are merged by a pure function with per-field
//! precedence (a later layer wins wherever it sets a field; fields it leaves
//! unset retain the earlier value). A profile finalizes the merged layer
//! into a [`Config`] exactly once; everything downstream reads the finalized
//! configuration and never writes it.

use crate::people::Person;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata for a known document license.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseInfo {
    pub name: &'static str,
    pub short: &'static str,
    pub url: &'static str,
}

/// A logo shown at the top of the document header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub src: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// An extra labelled link in the header's definition list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub key: String,
    pub href: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// The user-facing `lint` option: `false` to disable all linting, or a
/// per-rule toggle map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LintSetting {
    Toggle(bool),
    Rules(BTreeMap<String, bool>),
}

/// The resolved lint configuration a profile produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintConfig {
    /// All lint rules are skipped for this document.
    Disabled,
    /// Per-rule toggles; only rules mapped to `true` run.
    Rules(BTreeMap<String, bool>),
}

impl LintConfig {
    pub fn is_enabled(&self, rule: &str) -> bool {
        match self {
            LintConfig::Disabled => false,
            LintConfig::Rules(rules) => rules.get(rule).copied().unwrap_or(false),
        }
    }
}

/// One configuration layer. Every field is optional; unset fields defer to
/// lower-precedence layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub format: Option<String>,
    pub is_ed: Option<bool>,
    pub is_no_track: Option<bool>,
    pub is_pr: Option<bool>,
    pub lint: Option<LintSetting>,
    pub logos: Option<Vec<Logo>>,
    pub prepend_host_branding: Option<bool>,
    pub do_json_ld: Option<bool>,
    pub license: Option<String>,
    pub short_name: Option<String>,
    pub show_previous_version: Option<bool>,
    pub subtitle: Option<String>,
    pub override_copyright: Option<String>,
    pub language: Option<String>,
    pub text_status: Option<String>,
    /// Publication date as `YYYY-MM-DD`. Defaults to today.
    pub publish_date: Option<String>,
    pub editors: Option<Vec<Person>>,
    pub former_editors: Option<Vec<Person>>,
    pub authors: Option<Vec<Person>>,
    pub other_links: Option<Vec<Link>>,
}

/// Host-wide defaults, shared by every profile. Profiles layer their own
/// defaults on top of these; user configuration layers on top of both.
pub fn host_defaults() -> ConfigLayer {
    ConfigLayer {
        format: Some("html".to_string()),
        is_ed: Some(false),
        is_no_track: Some(false),
        is_pr: Some(false),
        lint: Some(LintSetting::Rules(BTreeMap::from([
            ("no-headingless-sections".to_string(), true),
            ("local-refs-exist".to_string(), true),
        ]))),
        logos: Some(Vec::new()),
        language: Some("en".to_string()),
        show_previous_version: Some(false),
        ..ConfigLayer::default()
    }
}

fn merge_field<T: Clone>(into: &mut Option<T>, from: &Option<T>) {
    if from.is_some() {
        *into = from.clone();
    }
}

/// Merge an ordered list of layers. Later layers win per field; a field a
/// later layer leaves unset retains the earlier layer's value. The `lint`
/// field gets the same last-writer-wins treatment here; profiles that need
/// the key-wise lint merge use [`merge_lint`] and substitute its result.
pub fn merge_layers(layers: &[ConfigLayer]) -> ConfigLayer {
    let mut merged = ConfigLayer::default();
    for layer in layers {
        merge_field(&mut merged.format, &layer.format);
        merge_field(&mut merged.is_ed, &layer.is_ed);
        merge_field(&mut merged.is_no_track, &layer.is_no_track);
        merge_field(&mut merged.is_pr, &layer.is_pr);
        merge_field(&mut merged.lint, &layer.lint);
        merge_field(&mut merged.logos, &layer.logos);
        merge_field(&mut merged.prepend_host_branding, &layer.prepend_host_branding);
        merge_field(&mut merged.do_json_ld, &layer.do_json_ld);
        merge_field(&mut merged.license, &layer.license);
        merge_field(&mut merged.short_name, &layer.short_name);
        merge_field(&mut merged.show_previous_version, &layer.show_previous_version);
        merge_field(&mut merged.subtitle, &layer.subtitle);
        merge_field(&mut merged.override_copyright, &layer.override_copyright);
        merge_field(&mut merged.language, &layer.language);
        merge_field(&mut merged.text_status, &layer.text_status);
        merge_field(&mut merged.publish_date, &layer.publish_date);
        merge_field(&mut merged.editors, &layer.editors);
        merge_field(&mut merged.former_editors, &layer.former_editors);
        merge_field(&mut merged.authors, &layer.authors);
        merge_field(&mut merged.other_links, &layer.other_links);
    }
    merged
}

/// Key-wise lint merge across layers.
///
/// The highest-precedence layer that sets `lint` at all decides between
/// disabling linting outright (`lint = false`) and contributing toggles.
/// Toggle maps merge key-wise in layer order: later layers win per rule,
/// rules they do not mention retain the earlier value. `lint = true` means
/// "use the defaults" and contributes nothing.
pub fn merge_lint(layers: &[ConfigLayer]) -> LintConfig {
    if let Some(LintSetting::Toggle(false)) =
        layers.iter().rev().find_map(|layer| layer.lint.as_ref())
    {
        return LintConfig::Disabled;
    }

    let mut rules = BTreeMap::new();
    for layer in layers {
        if let Some(LintSetting::Rules(overrides)) = &layer.lint {
            for (rule, enabled) in overrides {
                rules.insert(rule.clone(), *enabled);
            }
        }
    }
    LintConfig::Rules(rules)
}

/// A finalized configuration: every field populated, derived fields
/// computed. Produced once by a profile's default resolver; read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub format: String,
    pub is_ed: bool,
    pub is_no_track: bool,
    pub is_pr: bool,
    pub lint: LintConfig,
    pub logos: Vec<Logo>,
    pub prepend_host_branding: bool,
    pub do_json_ld: bool,
    pub license: String,
    pub short_name: String,
    pub show_previous_version: bool,
    pub subtitle: Option<String>,
    pub override_copyright: Option<String>,
    pub language: String,
    pub text_status: String,
    pub publish_date: chrono::NaiveDate,
    pub editors: Vec<Person>,
    pub former_editors: Vec<Person>,
    pub authors: Vec<Person>,
    pub other_links: Vec<Link>,

    // derived
    pub license_info: Option<LicenseInfo>,
    pub dash_date: String,
    pub publish_human_date: String,
    pub multiple_editors: bool,
    pub multiple_former_editors: bool,
    pub multiple_authors: bool,
}
