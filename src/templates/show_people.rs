use crate::dom::{Document, NodeId};
use crate::people::Person;

/// Render a list of people as `<dd>` entries for the header's definition
/// list, one per person, in the given order.
pub fn show_people(doc: &mut Document, people: &[Person]) -> Vec<NodeId> {
    people.iter().map(|person| show_person(doc, person)).collect()
}

fn show_person(doc: &mut Document, person: &Person) -> NodeId {
    let dd = doc.create_element("dd");
    doc.add_class(dd, "p-author");

    let name: NodeId = match &person.url {
        Some(url) => {
            let anchor = doc.create_element_with_text("a", &person.name);
            doc.set_attr(anchor, "href", url);
            anchor
        }
        None => {
            let span = doc.create_element_with_text("span", &person.name);
            doc.add_class(span, "p-name");
            span
        }
    };
    doc.append(dd, name);

    if let Some(email) = &person.email {
        let space = doc.create_text(" ");
        doc.append(dd, space);
        let mailto = doc.create_element_with_text("a", email);
        doc.set_attr(mailto, "href", &format!("mailto:{email}"));
        doc.add_class(mailto, "ed_mailto");
        doc.append(dd, mailto);
    }

    if let Some(company) = &person.company {
        let lead_in = doc.create_text(" (");
        doc.append(dd, lead_in);
        match &person.company_url {
            Some(url) => {
                let anchor = doc.create_element_with_text("a", company);
                doc.set_attr(anchor, "href", url);
                doc.append(dd, anchor);
            }
            None => {
                let text = doc.create_text(company);
                doc.append(dd, text);
            }
        }
        let close = doc.create_text(")");
        doc.append(dd, close);
    }

    dd
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::people::PersonBuilder;

    #[test]
    fn people_render_in_order_with_affiliation() {
        let mut doc = Document::new();
        let people = vec![
            PersonBuilder::default()
                .name("Jan Jansen")
                .company("Kennisnet")
                .build()
                .expect("can build person"),
            PersonBuilder::default()
                .name("Mies van der Bijl")
                .url("https://example.org/~mies")
                .build()
                .expect("can build person"),
        ];

        let nodes = show_people(&mut doc, &people);
        let root = doc.root();
        for &node in &nodes {
            doc.append(root, node);
        }

        assert_eq!(nodes.len(), 2);
        assert_eq!(doc.text_content(nodes[0]), "Jan Jansen (Kennisnet)");
        let html = doc.node_to_html(nodes[1]);
        assert!(html.contains("href=\"https://example.org/~mies\""));
    }

    #[test]
    fn email_renders_as_a_mailto_link() {
        let mut doc = Document::new();
        let people = vec![PersonBuilder::default()
            .name("Jan Jansen")
            .email("jan@example.org")
            .build()
            .expect("can build person")];

        let nodes = show_people(&mut doc, &people);
        let html = doc.node_to_html(nodes[0]);
        assert!(html.contains("href=\"mailto:jan@example.org\""));
    }
}
