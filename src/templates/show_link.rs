use crate::config::Link;
use crate::dom::{Document, NodeId};

/// Render an extra header link as a `<dt>`/`<dd>` pair for the header's
/// definition list.
pub fn show_link(doc: &mut Document, link: &Link) -> (NodeId, NodeId) {
    let dt = doc.create_element_with_text("dt", &link.key);

    let dd = doc.create_element("dd");
    let anchor =
        doc.create_element_with_text("a", link.text.as_deref().unwrap_or(&link.href));
    doc.set_attr(anchor, "href", &link.href);
    doc.append(dd, anchor);

    (dt, dd)
}
