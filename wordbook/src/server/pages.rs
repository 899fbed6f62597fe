use askama::Template;
use dictionary::Definition;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::storage::WordSummary;

pub struct WordLink {
    pub word: String,
    pub definition: String,
    pub href: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub words: Vec<WordLink>,
    pub msg: Option<String>,
}

impl IndexPage {
    pub fn new(words: Vec<WordSummary>, msg: Option<String>) -> Self {
        let words = words
            .into_iter()
            .map(|summary| WordLink {
                href: format!("{}?status_give=old", detail_path(&summary.word)),
                word: summary.word,
                definition: summary.definition,
            })
            .collect();
        Self { words, msg }
    }
}

pub struct SuggestionLink {
    pub word: String,
    pub href: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub word: Option<String>,
    pub suggestions: Vec<SuggestionLink>,
}

impl ErrorPage {
    pub fn new(word: Option<String>, suggestions: Option<&str>) -> Self {
        let suggestions = suggestions
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|suggestion| !suggestion.is_empty())
            .map(|suggestion| SuggestionLink {
                word: suggestion.to_owned(),
                href: detail_path(suggestion),
            })
            .collect();
        Self { word, suggestions }
    }
}

pub struct EntryView {
    pub headword: String,
    pub label: Option<String>,
    pub senses: Vec<String>,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailPage {
    pub word: String,
    pub entries: Vec<EntryView>,
    /// Raw entries handed back to `/api/save_word` by the save button.
    pub definitions_json: String,
    pub saved: bool,
}

impl DetailPage {
    pub fn new(word: String, definitions: &[Definition], status: &str) -> Self {
        let entries = definitions
            .iter()
            .map(|definition| EntryView {
                headword: definition.headword().unwrap_or(&word).to_owned(),
                label: definition.functional_label().map(str::to_owned),
                senses: definition
                    .short_definitions()
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            })
            .collect();
        let definitions_json = serde_json::to_string(definitions).unwrap_or_else(|_| "[]".into());
        Self {
            word,
            entries,
            definitions_json,
            saved: status != "new",
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

pub fn detail_path(word: &str) -> String {
    format!("/detail/{}", encode(word))
}

/// Where a failed lookup sends the user, carrying any spelling suggestions.
pub fn error_location(word: &str, suggestions: &[String]) -> String {
    let mut location = format!("/error?word={}", encode(word));
    if !suggestions.is_empty() {
        location.push_str("&suggestion=");
        location.push_str(&encode(&suggestions.join(",")));
    }
    location
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn error_location_without_suggestions_carries_only_the_word() {
        assert_eq!(error_location("xyzzy", &[]), "/error?word=xyzzy");
    }

    #[test]
    fn error_location_joins_suggestions_with_commas() {
        let suggestions = vec!["cart".to_string(), "cast".to_string()];
        assert_eq!(
            error_location("catt", &suggestions),
            "/error?word=catt&suggestion=cart%2Ccast"
        );
    }

    #[test]
    fn error_page_drops_blank_suggestions() {
        let page = ErrorPage::new(Some("catt".into()), Some("cart,, cast,"));
        let words: Vec<&str> = page.suggestions.iter().map(|s| &s.word[..]).collect();
        assert_eq!(words, vec!["cart", "cast"]);
        assert!(ErrorPage::new(None, Some("")).suggestions.is_empty());
        assert!(ErrorPage::new(None, None).suggestions.is_empty());
    }

    #[test]
    fn detail_page_reads_senses_and_status() {
        let definitions: Vec<Definition> = serde_json::from_value(json!([
            {"hwi": {"hw": "cat"}, "fl": "noun", "shortdef": ["a carnivorous mammal", "a person"]},
            {"shortdef": "to hoist"}
        ]))
        .unwrap();
        let page = DetailPage::new("cat".into(), &definitions, "new");
        assert!(!page.saved);
        assert_eq!(page.entries[0].label.as_deref(), Some("noun"));
        assert_eq!(page.entries[0].senses.len(), 2);
        assert_eq!(page.entries[1].headword, "cat");
        assert_eq!(page.entries[1].senses, vec!["to hoist".to_string()]);

        assert!(DetailPage::new("cat".into(), &definitions, "old").saved);
    }

    #[test]
    fn detail_path_encodes_spaces() {
        assert_eq!(detail_path("ice cream"), "/detail/ice%20cream");
    }
}
