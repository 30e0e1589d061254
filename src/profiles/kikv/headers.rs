//! Header rendering for kikv documents.
//!
//! Assembles the `div.head` block at the top of the document: logos, the
//! relocated title, an optional subtitle, the status/date line, the
//! editors/authors definition list, the copyright, and a separator. The
//! existing title and any existing subtitle or copyright elements are moved
//! into the header, not copied.

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::dom::{Document, NodeId};
use crate::l10n;
use crate::templates::{show_link, show_logo, show_people};
use anyhow::{Context, Result};

const PLUGIN_NAME: &str = "kikv/headers";

const CC_LICENSE_URL: &str = "https://creativecommons.org/licenses/by/4.0/legalcode";

/// Render the header block and prepend it to the document root.
///
/// Fails when the document has no `h1#title` element; everything else
/// degrades softly (missing sections are simply not emitted).
pub fn render(conf: &Config, doc: &mut Document, diagnostics: &mut Diagnostics) -> Result<NodeId> {
    let strings = l10n::header_strings(&conf.language);

    let head = doc.create_element("div");
    doc.add_class(head, "head");

    for logo in &conf.logos {
        let node = show_logo(doc, logo);
        doc.append(head, node);
    }

    let title = doc
        .element_by_id("title")
        .filter(|&el| doc.tag(el) == Some("h1"))
        .with_context(|| "Document has no `h1` element with id `title`")?;
    doc.detach(title);
    doc.append(head, title);

    if let Some(subtitle) = subtitle_elem(conf, doc) {
        doc.append(head, subtitle);
    }

    let status = doc.create_element("h2");
    let status_text = doc.create_text(&format!("{} ", conf.text_status));
    doc.append(status, status_text);
    let time = doc.create_element_with_text("time", &conf.publish_human_date);
    doc.add_class(time, "dt-published");
    doc.set_attr(time, "datetime", &conf.dash_date);
    doc.append(status, time);
    doc.append(head, status);

    let dl = doc.create_element("dl");

    let editors_label = if conf.multiple_editors {
        strings.editors
    } else {
        strings.editor
    };
    let dt = doc.create_element_with_text("dt", editors_label);
    doc.append(dl, dt);
    for dd in show_people(doc, &conf.editors) {
        doc.append(dl, dd);
    }

    if !conf.former_editors.is_empty() {
        let label = if conf.multiple_former_editors {
            strings.former_editors
        } else {
            strings.former_editor
        };
        let dt = doc.create_element_with_text("dt", label);
        doc.append(dl, dt);
        for dd in show_people(doc, &conf.former_editors) {
            doc.append(dl, dd);
        }
    }

    if !conf.authors.is_empty() {
        let label = if conf.multiple_authors {
            strings.authors
        } else {
            strings.author
        };
        let dt = doc.create_element_with_text("dt", label);
        doc.append(dl, dt);
        for dd in show_people(doc, &conf.authors) {
            doc.append(dl, dd);
        }
    }

    for link in &conf.other_links {
        let (dt, dd) = show_link(doc, link);
        doc.append(dl, dt);
        doc.append(dl, dd);
    }

    doc.append(head, dl);

    let copyright = render_copyright(conf, doc, diagnostics);
    doc.append(head, copyright);

    let hr = doc.create_element("hr");
    doc.append(head, hr);

    let root = doc.root();
    doc.prepend(root, head);
    Ok(head)
}

/// Find or synthesize the subtitle element.
///
/// An existing `h2#subtitle` is detached and reused; otherwise one is
/// synthesized from the `subtitle` option when present. Either way the
/// element gets the `subtitle` class.
fn subtitle_elem(conf: &Config, doc: &mut Document) -> Option<NodeId> {
    let subtitle = match doc
        .element_by_id("subtitle")
        .filter(|&el| doc.tag(el) == Some("h2"))
    {
        Some(existing) => {
            doc.detach(existing);
            Some(existing)
        }
        None => conf.subtitle.as_ref().map(|text| {
            let el = doc.create_element_with_text("h2", text);
            doc.set_id(el, "subtitle");
            el
        }),
    };
    if let Some(el) = subtitle {
        doc.add_class(el, "subtitle");
    }
    subtitle
}

fn render_copyright(conf: &Config, doc: &mut Document, diagnostics: &mut Diagnostics) -> NodeId {
    // An existing copyright element is relocated, not re-rendered.
    if let Some(existing) = doc.first_by_class("copyright") {
        doc.detach(existing);
        return existing;
    }

    if let Some(text) = &conf.override_copyright {
        diagnostics.warn_with_hint(
            "The `override_copyright` configuration option is deprecated.",
            PLUGIN_NAME,
            Some("Use an element with class `copyright` in the document instead."),
        );
        let p = doc.create_element_with_text("p", text);
        doc.add_class(p, "copyright");
        return p;
    }

    let p = doc.create_element("p");
    doc.add_class(p, "copyright");
    let lead_in = doc.create_text("De inhoud van dit document is beschikbaar onder ");
    doc.append(p, lead_in);
    let license = link_license(
        doc,
        "Creative Commons Attribution 4.0 International Public License",
        CC_LICENSE_URL,
        "subfoot",
    );
    doc.append(p, license);
    let period = doc.create_text(".");
    doc.append(p, period);
    p
}

fn link_license(doc: &mut Document, text: &str, url: &str, css_class: &str) -> NodeId {
    let anchor = doc.create_element_with_text("a", text);
    doc.set_attr(anchor, "rel", "license");
    doc.set_attr(anchor, "href", url);
    doc.add_class(anchor, css_class);
    anchor
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{ConfigLayer, Logo};
    use crate::profiles::kikv;

    fn doc_with_title() -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        let title = doc.create_element_with_text("h1", "Example Spec");
        doc.set_id(title, "title");
        doc.append(root, title);
        let body = doc.create_element_with_text("p", "Body text.");
        doc.append(root, body);
        doc
    }

    fn resolve(user: ConfigLayer) -> Config {
        let mut diagnostics = Diagnostics::new();
        kikv::resolve(user, &mut diagnostics).expect("can resolve")
    }

    #[test]
    fn logos_render_in_order_before_the_title() {
        let conf = resolve(ConfigLayer {
            logos: Some(vec![
                Logo {
                    src: "a.svg".to_string(),
                    url: None,
                    alt: "A".to_string(),
                    width: None,
                    height: None,
                },
                Logo {
                    src: "b.svg".to_string(),
                    url: None,
                    alt: "B".to_string(),
                    width: None,
                    height: None,
                },
            ]),
            ..ConfigLayer::default()
        });

        let mut doc = doc_with_title();
        let mut diagnostics = Diagnostics::new();
        let head = render(&conf, &mut doc, &mut diagnostics).expect("can render");

        let children = doc.children(head).to_vec();
        assert_eq!(doc.attr(children[0], "src"), Some("a.svg"));
        assert_eq!(doc.attr(children[1], "src"), Some("b.svg"));
        assert_eq!(doc.tag(children[2]), Some("h1"));
        assert_eq!(doc.id(children[2]), Some("title"));
    }

    #[test]
    fn the_title_is_relocated_not_copied() {
        let mut doc = doc_with_title();
        let title = doc.element_by_id("title").expect("title exists");

        let conf = resolve(ConfigLayer::default());
        let mut diagnostics = Diagnostics::new();
        let head = render(&conf, &mut doc, &mut diagnostics).expect("can render");

        assert_eq!(doc.element_by_id("title"), Some(title));
        assert!(doc.children(head).contains(&title));
    }

    #[test]
    fn a_missing_title_is_an_error() {
        let mut doc = Document::new();
        let conf = resolve(ConfigLayer::default());
        let mut diagnostics = Diagnostics::new();
        assert!(render(&conf, &mut doc, &mut diagnostics).is_err());
    }

    #[test]
    fn no_subtitle_option_and_no_subtitle_element_yields_no_subtitle_node() {
        let mut doc = doc_with_title();
        let conf = resolve(ConfigLayer::default());
        let mut diagnostics = Diagnostics::new();
        render(&conf, &mut doc, &mut diagnostics).expect("can render");
        assert_eq!(doc.element_by_id("subtitle"), None);
    }

    #[test]
    fn an_existing_subtitle_element_is_reused_and_marked() {
        let mut doc = doc_with_title();
        let root = doc.root();
        let subtitle = doc.create_element_with_text("h2", "Een ondertitel");
        doc.set_id(subtitle, "subtitle");
        doc.append(root, subtitle);

        let conf = resolve(ConfigLayer::default());
        let mut diagnostics = Diagnostics::new();
        let head = render(&conf, &mut doc, &mut diagnostics).expect("can render");

        assert_eq!(doc.element_by_id("subtitle"), Some(subtitle));
        assert!(doc.has_class(subtitle, "subtitle"));
        assert!(doc.children(head).contains(&subtitle));
    }

    #[test]
    fn a_subtitle_option_synthesizes_the_element() {
        let mut doc = doc_with_title();
        let conf = resolve(ConfigLayer {
            subtitle: Some("Gegevens bij de bron".to_string()),
            ..ConfigLayer::default()
        });
        let mut diagnostics = Diagnostics::new();
        render(&conf, &mut doc, &mut diagnostics).expect("can render");

        let subtitle = doc.element_by_id("subtitle").expect("subtitle exists");
        assert_eq!(doc.tag(subtitle), Some("h2"));
        assert_eq!(doc.text_content(subtitle), "Gegevens bij de bron");
        assert!(doc.has_class(subtitle, "subtitle"));
    }

    #[test]
    fn an_existing_copyright_element_is_relocated_identity_equal() {
        let mut doc = doc_with_title();
        let root = doc.root();
        let copyright = doc.create_element_with_text("p", "© 2024 Example");
        doc.add_class(copyright, "copyright");
        doc.append(root, copyright);

        let conf = resolve(ConfigLayer::default());
        let mut diagnostics = Diagnostics::new();
        let head = render(&conf, &mut doc, &mut diagnostics).expect("can render");

        assert_eq!(doc.first_by_class("copyright"), Some(copyright));
        assert!(doc.children(head).contains(&copyright));
        assert_eq!(doc.text_content(copyright), "© 2024 Example");
    }

    #[test]
    fn override_copyright_is_used_but_deprecated() {
        let mut doc = doc_with_title();
        let conf = resolve(ConfigLayer {
            override_copyright: Some("Custom copyright text".to_string()),
            ..ConfigLayer::default()
        });
        let mut diagnostics = Diagnostics::new();
        render(&conf, &mut doc, &mut diagnostics).expect("can render");

        let copyright = doc.first_by_class("copyright").expect("copyright exists");
        assert_eq!(doc.text_content(copyright), "Custom copyright text");
        assert_eq!(diagnostics.warnings().len(), 1);
        assert!(diagnostics.warnings()[0].message.contains("deprecated"));
    }

    #[test]
    fn the_default_copyright_links_the_cc_by_license() {
        let mut doc = doc_with_title();
        let conf = resolve(ConfigLayer::default());
        let mut diagnostics = Diagnostics::new();
        render(&conf, &mut doc, &mut diagnostics).expect("can render");

        let copyright = doc.first_by_class("copyright").expect("copyright exists");
        let html = doc.node_to_html(copyright);
        assert!(html.contains("De inhoud van dit document is beschikbaar onder"));
        assert!(html.contains("rel=\"license\""));
        assert!(html.contains(CC_LICENSE_URL));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn former_editors_are_emitted_only_when_present() {
        let mut doc = doc_with_title();
        let conf = resolve(ConfigLayer {
            editors: Some(vec!["Jan Jansen".into()]),
            ..ConfigLayer::default()
        });
        let mut diagnostics = Diagnostics::new();
        render(&conf, &mut doc, &mut diagnostics).expect("can render");
        assert!(!doc.to_html().contains("Voormalig"));

        let mut doc = doc_with_title();
        let conf = resolve(ConfigLayer {
            editors: Some(vec!["Jan Jansen".into()]),
            former_editors: Some(vec!["A".into(), "B".into()]),
            ..ConfigLayer::default()
        });
        render(&conf, &mut doc, &mut diagnostics).expect("can render");
        assert!(doc.to_html().contains("Voormalige redacteurs:"));
    }

    #[test]
    fn editor_labels_pluralize_in_the_configured_language() {
        let mut doc = doc_with_title();
        let conf = resolve(ConfigLayer {
            editors: Some(vec!["A".into(), "B".into()]),
            language: Some("en".to_string()),
            ..ConfigLayer::default()
        });
        let mut diagnostics = Diagnostics::new();
        render(&conf, &mut doc, &mut diagnostics).expect("can render");
        assert!(doc.to_html().contains("Editors:"));

        let mut doc = doc_with_title();
        let conf = resolve(ConfigLayer {
            editors: Some(vec!["A".into()]),
            ..ConfigLayer::default()
        });
        render(&conf, &mut doc, &mut diagnostics).expect("can render");
        // kikv documents default to Dutch
        assert!(doc.to_html().contains("Redacteur:"));
    }

    #[test]
    fn the_status_line_carries_the_machine_readable_date() {
        let mut doc = doc_with_title();
        let conf = resolve(ConfigLayer {
            publish_date: Some("2024-03-07".to_string()),
            ..ConfigLayer::default()
        });
        let mut diagnostics = Diagnostics::new();
        render(&conf, &mut doc, &mut diagnostics).expect("can render");

        let html = doc.to_html();
        assert!(html.contains("datetime=\"2024-03-07\""));
        assert!(html.contains("7 March 2024"));
        assert!(html.contains("Definitieve versie"));
    }

    #[test]
    fn the_header_ends_with_a_separator_and_is_prepended() {
        let mut doc = doc_with_title();
        let conf = resolve(ConfigLayer::default());
        let mut diagnostics = Diagnostics::new();
        let head = render(&conf, &mut doc, &mut diagnostics).expect("can render");

        let root = doc.root();
        assert_eq!(doc.children(root)[0], head);
        let last = *doc.children(head).last().expect("head has children");
        assert_eq!(doc.tag(last), Some("hr"));
    }
}
