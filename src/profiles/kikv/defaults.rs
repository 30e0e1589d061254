//! Defaults and configuration resolution for kikv documents.

use crate::config::{
    host_defaults, merge_layers, merge_lint, Config, ConfigLayer, LicenseInfo, LintConfig,
    LintSetting,
};
use crate::diagnostics::Diagnostics;
use crate::linter::{LintRegistry, PrivsecSection};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;

const PLUGIN_NAME: &str = "kikv/defaults";

static LICENSES: &[(&str, LicenseInfo)] = &[
    (
        "cc0",
        LicenseInfo {
            name: "Creative Commons 0 Public Domain Dedication",
            short: "CC0",
            url: "https://creativecommons.org/publicdomain/zero/1.0/",
        },
    ),
    (
        "cc-by",
        LicenseInfo {
            name: "Creative Commons Attribution 4.0 International Public License",
            short: "CC-BY",
            url: "https://creativecommons.org/licenses/by/4.0/legalcode",
        },
    ),
    (
        "cc-by-sa",
        LicenseInfo {
            name: "Creative Commons Attribution-ShareAlike 4.0 International Public License",
            short: "CC-BY-SA",
            url: "https://creativecommons.org/licenses/by-sa/4.0/legalcode",
        },
    ),
];

/// Look up license metadata by identifier.
pub fn license_info(id: &str) -> Option<LicenseInfo> {
    LICENSES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, info)| *info)
}

fn profile_defaults() -> ConfigLayer {
    ConfigLayer {
        format: Some("markdown".to_string()),
        is_ed: Some(false),
        is_no_track: Some(true),
        is_pr: Some(false),
        lint: Some(LintSetting::Rules(BTreeMap::from([
            ("privsec-section".to_string(), true),
            ("wpt-tests-exist".to_string(), false),
        ]))),
        logos: Some(Vec::new()),
        prepend_host_branding: Some(false),
        do_json_ld: Some(false),
        license: Some("cc-by".to_string()),
        short_name: Some("X".to_string()),
        show_previous_version: Some(false),
        language: Some("nl".to_string()),
        ..ConfigLayer::default()
    }
}

/// Create the lint registry for this profile.
pub fn lint_registry() -> LintRegistry {
    let mut registry = LintRegistry::new();
    registry.register(Box::new(PrivsecSection));
    registry
}

/// Resolve the finalized configuration for a kikv document.
///
/// Merges host defaults, profile defaults, and the user layer (in that
/// order, later layers winning per field), with the lint field merged
/// key-wise so that a user-level `lint = false` disables everything.
/// Derived fields are computed afterwards. An unknown license identifier is
/// not an error; it leaves the license metadata absent and raises a
/// diagnostic.
pub fn resolve(user: ConfigLayer, diagnostics: &mut Diagnostics) -> Result<Config> {
    let layers = [host_defaults(), profile_defaults(), user];
    let lint = merge_lint(&layers);
    let merged = merge_layers(&layers);
    finalize(merged, lint, diagnostics)
}

fn finalize(
    layer: ConfigLayer,
    lint: LintConfig,
    diagnostics: &mut Diagnostics,
) -> Result<Config> {
    let license = layer.license.unwrap_or_default();
    let license_info = license_info(&license);
    if license_info.is_none() {
        diagnostics.warn_with_hint(
            format!("Unknown license identifier `{license}`; no license metadata available."),
            PLUGIN_NAME,
            Some("expected one of `cc0`, `cc-by`, `cc-by-sa`"),
        );
    }

    let publish_date = match &layer.publish_date {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Failed to parse publish_date `{date}` as YYYY-MM-DD"))?,
        None => chrono::Local::now().date_naive(),
    };
    let dash_date = publish_date.format("%Y-%m-%d").to_string();
    let publish_human_date = publish_date.format("%-d %B %Y").to_string();

    let is_ed = layer.is_ed.unwrap_or(false);
    let text_status = layer.text_status.unwrap_or_else(|| {
        if is_ed {
            "Werkversie".to_string()
        } else {
            "Definitieve versie".to_string()
        }
    });

    let editors = layer.editors.unwrap_or_default();
    let former_editors = layer.former_editors.unwrap_or_default();
    let authors = layer.authors.unwrap_or_default();

    Ok(Config {
        format: layer.format.unwrap_or_default(),
        is_ed,
        is_no_track: layer.is_no_track.unwrap_or(false),
        is_pr: layer.is_pr.unwrap_or(false),
        lint,
        logos: layer.logos.unwrap_or_default(),
        prepend_host_branding: layer.prepend_host_branding.unwrap_or(false),
        do_json_ld: layer.do_json_ld.unwrap_or(false),
        license,
        short_name: layer.short_name.unwrap_or_default(),
        show_previous_version: layer.show_previous_version.unwrap_or(false),
        subtitle: layer.subtitle,
        override_copyright: layer.override_copyright,
        language: layer.language.unwrap_or_else(|| "en".to_string()),
        text_status,
        publish_date,
        multiple_editors: editors.len() > 1,
        multiple_former_editors: former_editors.len() > 1,
        multiple_authors: authors.len() > 1,
        editors,
        former_editors,
        authors,
        other_links: layer.other_links.unwrap_or_default(),
        license_info,
        dash_date,
        publish_human_date,
    })
}
