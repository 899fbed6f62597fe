use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single dictionary entry, kept as the raw JSON object the service returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Definition(Value);

impl Definition {
    /// True for an object carrying a `shortdef` that is a string or a list of strings.
    pub fn is_entry(&self) -> bool {
        match self.0.get("shortdef") {
            Some(Value::String(_)) => true,
            Some(Value::Array(shortdefs)) => shortdefs.iter().all(Value::is_string),
            _ => false,
        }
    }

    /// The short definition shown in listings: `shortdef` itself when it is a
    /// string, otherwise its first element.
    pub fn short_definition(&self) -> Option<&str> {
        match self.0.get("shortdef")? {
            Value::String(shortdef) => Some(shortdef.as_str()),
            Value::Array(shortdefs) => shortdefs.first()?.as_str(),
            _ => None,
        }
    }

    pub fn short_definitions(&self) -> Vec<&str> {
        match self.0.get("shortdef") {
            Some(Value::String(shortdef)) => vec![shortdef.as_str()],
            Some(Value::Array(shortdefs)) => shortdefs.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Part of speech, e.g. "noun".
    pub fn functional_label(&self) -> Option<&str> {
        self.0.get("fl")?.as_str()
    }

    pub fn headword(&self) -> Option<&str> {
        self.0.get("hwi")?.get("hw")?.as_str()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Vec<Definition>),
    NotFound { suggestions: Vec<String> },
}

impl Lookup {
    /// Interprets the raw response array. An unknown headword comes back as an
    /// array of plain strings, which are spelling suggestions.
    pub fn from_entries(entries: Vec<Value>) -> Self {
        let suggestions_only = match entries.first() {
            None => true,
            Some(first) => first.is_string(),
        };
        if !suggestions_only {
            return Lookup::Found(entries.into_iter().map(Definition).collect());
        }
        let suggestions = entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(suggestion) => Some(suggestion),
                _ => None,
            })
            .collect();
        Lookup::NotFound { suggestions }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_response_is_not_found_without_suggestions() {
        assert_eq!(
            Lookup::from_entries(Vec::new()),
            Lookup::NotFound {
                suggestions: Vec::new()
            }
        );
    }

    #[test]
    fn string_response_is_read_as_suggestions() {
        let entries = vec![json!("cart"), json!("cast"), json!("cot")];
        assert_eq!(
            Lookup::from_entries(entries),
            Lookup::NotFound {
                suggestions: vec!["cart".into(), "cast".into(), "cot".into()]
            }
        );
    }

    #[test]
    fn object_response_is_found() {
        let entries = vec![
            json!({"meta": {"id": "cat:1"}, "fl": "noun", "shortdef": ["a carnivorous mammal"]}),
            json!({"meta": {"id": "cat:2"}, "fl": "verb", "shortdef": ["to hoist"]}),
        ];
        match Lookup::from_entries(entries) {
            Lookup::Found(definitions) => {
                assert_eq!(definitions.len(), 2);
                assert_eq!(definitions[1].functional_label(), Some("verb"));
            }
            other => panic!("expected definitions, got {other:?}"),
        }
    }

    #[test]
    fn short_definition_accepts_string_or_list() {
        let single = Definition(json!({"shortdef": "a small domesticated carnivore"}));
        assert_eq!(
            single.short_definition(),
            Some("a small domesticated carnivore")
        );
        assert_eq!(single.short_definitions(), vec!["a small domesticated carnivore"]);

        let list = Definition(json!({"shortdef": ["first sense", "second sense"]}));
        assert_eq!(list.short_definition(), Some("first sense"));
        assert_eq!(list.short_definitions(), vec!["first sense", "second sense"]);
    }

    #[test]
    fn missing_fields_yield_nothing() {
        let bare = Definition(json!({"meta": {}}));
        assert_eq!(bare.short_definition(), None);
        assert!(bare.short_definitions().is_empty());
        assert_eq!(bare.headword(), None);

        let empty_list = Definition(json!({"shortdef": []}));
        assert_eq!(empty_list.short_definition(), None);
    }

    #[test]
    fn entry_needs_an_object_with_shortdef() {
        assert!(Definition(json!({"shortdef": "a feline"})).is_entry());
        assert!(Definition(json!({"shortdef": ["a feline", "a person"]})).is_entry());
        assert!(Definition(json!({"shortdef": []})).is_entry());

        assert!(!Definition(json!("cart")).is_entry());
        assert!(!Definition(json!(5)).is_entry());
        assert!(!Definition(json!(null)).is_entry());
        assert!(!Definition(json!({"meta": {}})).is_entry());
        assert!(!Definition(json!({"shortdef": 5})).is_entry());
        assert!(!Definition(json!({"shortdef": ["ok", 5]})).is_entry());
    }

    #[test]
    fn headword_is_read_from_hwi() {
        let definition = Definition(json!({"hwi": {"hw": "cat"}}));
        assert_eq!(definition.headword(), Some("cat"));
    }
}
