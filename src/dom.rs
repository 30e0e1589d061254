//! In-memory document tree.
//!
//! The pipeline operates on an explicit tree handle rather than an ambient
//! document: every stage that reads or edits the document receives the
//! `Document` it should work on. Nodes live in an arena owned by the
//! document and are addressed by copyable `NodeId` handles, so detaching a
//! node and re-appending it elsewhere relocates the same node rather than
//! producing a copy.

use std::fmt::Write;

/// Handle to a node in a [`Document`].
///
/// Handles stay valid for the lifetime of the document, including across
/// detach/re-append cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
enum NodeData {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        classes: Vec<String>,
    },
    Text(String),
}

#[derive(Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

/// A mutable document tree with a single `body` root.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Document {
        let mut doc = Document {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.alloc(NodeData::Element {
            tag: "body".to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
        });
        doc
    }

    /// The root `body` element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            data,
        });
        id
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeData::Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
        })
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeData::Text(text.to_string()))
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `child` as the first child of `parent`, detaching it from any
    /// previous parent first.
    pub fn prepend(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(0, child);
    }

    /// Remove a node from its parent. The node itself stays alive and can be
    /// re-appended elsewhere.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    /// Convenience: create an element with a single text child.
    pub fn create_element_with_text(&mut self, tag: &str, text: &str) -> NodeId {
        let el = self.create_element(tag);
        let txt = self.create_text(text);
        self.append(el, txt);
        el
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeData::Element { attrs, .. } = &mut self.nodes[id.0].data {
            if let Some(attr) = attrs.iter_mut().find(|(n, _)| n == name) {
                attr.1 = value.to_string();
            } else {
                attrs.push((name.to_string(), value.to_string()));
            }
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeData::Text(_) => None,
        }
    }

    pub fn set_id(&mut self, id: NodeId, value: &str) {
        self.set_attr(id, "id", value);
    }

    pub fn id(&self, id: NodeId) -> Option<&str> {
        self.attr(id, "id")
    }

    /// Add a class to an element. Adding a class twice is a no-op.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let NodeData::Element { classes, .. } = &mut self.nodes[id.0].data {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        match &self.nodes[id.0].data {
            NodeData::Element { classes, .. } => classes.iter().any(|c| c == class),
            NodeData::Text(_) => false,
        }
    }

    /// Concatenated text of the node and all its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].data {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element { .. } => {
                for &child in &self.nodes[id.0].children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// All attached elements in tree order (depth-first from the root).
    pub fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk(self.root, &mut out);
        out
    }

    fn walk(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if matches!(self.nodes[id.0].data, NodeData::Element { .. }) {
            out.push(id);
        }
        for &child in &self.nodes[id.0].children {
            self.walk(child, out);
        }
    }

    /// First attached element with the given `id` attribute, in tree order.
    pub fn element_by_id(&self, id_value: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&el| self.id(el) == Some(id_value))
    }

    /// First attached element carrying the given class, in tree order.
    pub fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&el| self.has_class(el, class))
    }

    /// First attached element with the given tag name, in tree order.
    pub fn first_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.elements().into_iter().find(|&el| self.tag(el) == Some(tag))
    }

    /// Serialize the whole document (the root element and its subtree) to
    /// HTML. Text is escaped; attribute values are double-quote escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.serialize_node(self.root, &mut out);
        out
    }

    /// Serialize a single subtree to HTML.
    pub fn node_to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.serialize_node(id, &mut out);
        out
    }

    fn serialize_node(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].data {
            NodeData::Text(text) => {
                out.push_str(&html_escape::encode_text(text));
            }
            NodeData::Element {
                tag,
                attrs,
                classes,
            } => {
                let _ = write!(out, "<{}", tag);
                for (name, value) in attrs {
                    let _ = write!(
                        out,
                        " {}=\"{}\"",
                        name,
                        html_escape::encode_double_quoted_attribute(value)
                    );
                }
                if !classes.is_empty() {
                    let _ = write!(
                        out,
                        " class=\"{}\"",
                        html_escape::encode_double_quoted_attribute(&classes.join(" "))
                    );
                }
                if is_void_element(tag) {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                for &child in &self.nodes[id.0].children {
                    self.serialize_node(child, out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }
}

fn is_void_element(tag: &str) -> bool {
    matches!(tag, "hr" | "br" | "img" | "meta" | "link" | "input")
}
