use async_trait::async_trait;

mod collegiate_api;
mod entry;

pub use entry::{Definition, Lookup};
pub use reqwest::Url;

pub const COLLEGIATE_API_URL: &str =
    "https://www.dictionaryapi.com/api/v3/references/collegiate/json";

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to fetch the definition: {0}")]
    Fetch(reqwest::Error),
    #[error("failed to deserialize the dictionary response: {0}")]
    Deserialize(reqwest::Error),
    #[error("the dictionary base url cannot take path segments")]
    InvalidBaseUrl,
}

/// Anything that can resolve a keyword into definitions or spelling suggestions.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    async fn lookup(&self, keyword: &str) -> Result<Lookup, DictionaryError>;
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl Dictionary {
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl DefinitionSource for Dictionary {
    async fn lookup(&self, keyword: &str) -> Result<Lookup, DictionaryError> {
        if !collegiate_api::is_searchable(keyword) {
            return Ok(Lookup::NotFound {
                suggestions: Vec::new(),
            });
        }
        let url = collegiate_api::entry_url(&self.base_url, keyword)?;
        collegiate_api::get_entries(&self.client, url, &self.api_key)
            .await
            .map(Lookup::from_entries)
    }
}
