//! Markdown ingestion.
//!
//! Builds the document tree the rest of the pipeline operates on from a
//! markdown source. Heading attributes are enabled, so sources can mark
//! elements the profiles look for (`## Ondertitel { #subtitle }`). The first
//! top-level heading becomes the document title (`h1#title`) unless it
//! carries an explicit id of its own.

use crate::dom::{Document, NodeId};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Parse a markdown source into a document tree.
pub fn parse_markdown(markdown: &str) -> Document {
    let mut doc = Document::new();
    let mut stack: Vec<NodeId> = vec![doc.root()];
    let mut saw_title = false;

    let options = Options::ENABLE_HEADING_ATTRIBUTES;
    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(tag) => {
                // `outer` is appended to the current parent; `inner` is where
                // subsequent content lands (they differ for code blocks)
                if let Some((outer, inner)) = start_element(&mut doc, tag, &mut saw_title) {
                    let parent = *stack.last().expect("stack is never empty");
                    doc.append(parent, outer);
                    stack.push(inner);
                }
            }
            Event::End(tag) => {
                if closes_element(&tag) && stack.len() > 1 {
                    stack.pop();
                }
            }
            Event::Text(text) => {
                let parent = *stack.last().expect("stack is never empty");
                let node = doc.create_text(&text);
                doc.append(parent, node);
            }
            Event::Code(text) => {
                let parent = *stack.last().expect("stack is never empty");
                let code = doc.create_element_with_text("code", &text);
                doc.append(parent, code);
            }
            Event::SoftBreak => {
                let parent = *stack.last().expect("stack is never empty");
                let node = doc.create_text(" ");
                doc.append(parent, node);
            }
            Event::HardBreak => {
                let parent = *stack.last().expect("stack is never empty");
                let br = doc.create_element("br");
                doc.append(parent, br);
            }
            Event::Rule => {
                let parent = *stack.last().expect("stack is never empty");
                let hr = doc.create_element("hr");
                doc.append(parent, hr);
            }
            // raw HTML, footnotes, tasks, math: not part of this pipeline
            _ => {}
        }
    }

    doc
}

fn start_element(
    doc: &mut Document,
    tag: Tag<'_>,
    saw_title: &mut bool,
) -> Option<(NodeId, NodeId)> {
    let same = |el: NodeId| Some((el, el));
    match tag {
        Tag::Heading {
            level, id, classes, ..
        } => {
            let el = doc.create_element(heading_tag(level));
            match id {
                Some(id) => doc.set_id(el, &id),
                None => {
                    if level == HeadingLevel::H1 && !*saw_title {
                        doc.set_id(el, "title");
                    }
                }
            }
            if level == HeadingLevel::H1 {
                *saw_title = true;
            }
            for class in classes {
                doc.add_class(el, &class);
            }
            same(el)
        }
        Tag::Paragraph => {
            let el = doc.create_element("p");
            same(el)
        }
        Tag::BlockQuote(_) => {
            let el = doc.create_element("blockquote");
            same(el)
        }
        Tag::CodeBlock(kind) => {
            let pre = doc.create_element("pre");
            let code = doc.create_element("code");
            if let CodeBlockKind::Fenced(language) = kind {
                if !language.is_empty() {
                    doc.add_class(code, &format!("language-{language}"));
                }
            }
            doc.append(pre, code);
            Some((pre, code))
        }
        Tag::List(Some(_)) => {
            let el = doc.create_element("ol");
            same(el)
        }
        Tag::List(None) => {
            let el = doc.create_element("ul");
            same(el)
        }
        Tag::Item => {
            let el = doc.create_element("li");
            same(el)
        }
        Tag::Emphasis => {
            let el = doc.create_element("em");
            same(el)
        }
        Tag::Strong => {
            let el = doc.create_element("strong");
            same(el)
        }
        Tag::Link { dest_url, title, .. } => {
            let anchor = doc.create_element("a");
            doc.set_attr(anchor, "href", &dest_url);
            if !title.is_empty() {
                doc.set_attr(anchor, "title", &title);
            }
            same(anchor)
        }
        _ => None,
    }
}

fn closes_element(tag: &TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Heading(_)
            | TagEnd::Paragraph
            | TagEnd::BlockQuote(_)
            | TagEnd::CodeBlock
            | TagEnd::List(_)
            | TagEnd::Item
            | TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Link
    )
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}
