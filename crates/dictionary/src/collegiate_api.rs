// https://dictionaryapi.com/products/api-collegiate-dictionary
// an unknown headword answers with a plain array of spelling suggestions instead of entries

use reqwest::Url;
use serde_json::Value;

use crate::DictionaryError;

/// Blank keywords and dot-only keywords cannot form a path segment of their own.
pub(crate) fn is_searchable(keyword: &str) -> bool {
    let keyword = keyword.trim();
    !keyword.is_empty() && !keyword.chars().all(|c| c == '.')
}

pub(crate) fn entry_url(base_url: &Url, keyword: &str) -> Result<Url, DictionaryError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| DictionaryError::InvalidBaseUrl)?
        .pop_if_empty()
        .push(keyword);
    Ok(url)
}

pub(crate) async fn get_entries(
    client: &reqwest::Client,
    url: Url,
    api_key: &str,
) -> Result<Vec<Value>, DictionaryError> {
    tracing::debug!(%url, "looking up keyword");
    let res: reqwest::Response = client
        .get(url)
        .query(&[("key", api_key)])
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(DictionaryError::Fetch)?;
    res.json::<Vec<Value>>()
        .await
        .map_err(DictionaryError::Deserialize)
}
