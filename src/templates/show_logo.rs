use crate::config::Logo;
use crate::dom::{Document, NodeId};

/// Render a single header logo: an `<img>`, wrapped in a link when the logo
/// has a target URL.
pub fn show_logo(doc: &mut Document, logo: &Logo) -> NodeId {
    let img = doc.create_element("img");
    doc.set_attr(img, "src", &logo.src);
    doc.set_attr(img, "alt", &logo.alt);
    if let Some(width) = logo.width {
        doc.set_attr(img, "width", &width.to_string());
    }
    if let Some(height) = logo.height {
        doc.set_attr(img, "height", &height.to_string());
    }

    match &logo.url {
        Some(url) => {
            let anchor = doc.create_element("a");
            doc.set_attr(anchor, "href", url);
            doc.add_class(anchor, "logo");
            doc.append(anchor, img);
            anchor
        }
        None => {
            doc.add_class(img, "logo");
            img
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn linked_logos_wrap_the_image_in_an_anchor() {
        let mut doc = Document::new();
        let logo = Logo {
            src: "logo.svg".to_string(),
            url: Some("https://example.org/".to_string()),
            alt: "Example".to_string(),
            width: Some(72),
            height: None,
        };
        let node = show_logo(&mut doc, &logo);
        let root = doc.root();
        doc.append(root, node);

        assert_eq!(doc.tag(node), Some("a"));
        assert!(doc.has_class(node, "logo"));
        let html = doc.node_to_html(node);
        assert!(html.contains("src=\"logo.svg\""));
        assert!(html.contains("width=\"72\""));
        assert!(!html.contains("height="));
    }

    #[test]
    fn unlinked_logos_are_bare_images() {
        let mut doc = Document::new();
        let logo = Logo {
            src: "logo.png".to_string(),
            url: None,
            alt: String::new(),
            width: None,
            height: None,
        };
        let node = show_logo(&mut doc, &logo);
        assert_eq!(doc.tag(node), Some("img"));
    }
}
