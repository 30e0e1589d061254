//! Localized strings for header rendering.
//!
//! Falls back to English for languages without a table, matching on the
//! primary language subtag only (`nl-BE` uses the Dutch table).

/// Labels used by the header template.
#[derive(Debug)]
pub struct HeaderStrings {
    pub author: &'static str,
    pub authors: &'static str,
    pub editor: &'static str,
    pub editors: &'static str,
    pub former_editor: &'static str,
    pub former_editors: &'static str,
    pub latest_editors_draft: &'static str,
    pub latest_published_version: &'static str,
    pub this_version: &'static str,
}

static EN: HeaderStrings = HeaderStrings {
    author: "Author:",
    authors: "Authors:",
    editor: "Editor:",
    editors: "Editors:",
    former_editor: "Former editor:",
    former_editors: "Former editors:",
    latest_editors_draft: "Latest editor's draft:",
    latest_published_version: "Latest published version:",
    this_version: "This version:",
};

static NL: HeaderStrings = HeaderStrings {
    author: "Auteur:",
    authors: "Auteurs:",
    editor: "Redacteur:",
    editors: "Redacteurs:",
    former_editor: "Voormalig redacteur:",
    former_editors: "Voormalige redacteurs:",
    latest_editors_draft: "Laatste werkversie:",
    latest_published_version: "Laatst gepubliceerde versie:",
    this_version: "Deze versie:",
};

/// Look up the header strings for a BCP 47 language tag.
pub fn header_strings(language: &str) -> &'static HeaderStrings {
    let primary = language
        .split(['-', '_'])
        .next()
        .unwrap_or(language)
        .to_ascii_lowercase();
    match primary.as_str() {
        "nl" => &NL,
        _ => &EN,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dutch_strings_are_selected_for_regional_tags() {
        assert_eq!(header_strings("nl").editor, "Redacteur:");
        assert_eq!(header_strings("nl-BE").editor, "Redacteur:");
    }

    #[test]
    fn unknown_languages_fall_back_to_english() {
        assert_eq!(header_strings("fr").editors, "Editors:");
        assert_eq!(header_strings("").author, "Author:");
    }
}
