use askama::Template;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use dictionary::{Definition, Lookup};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{
    error::AppError,
    pages::{error_location, DetailPage, ErrorPage, IndexPage},
    SharedState,
};
use crate::storage::ExampleEntry;

const SUCCESS: &str = "success";

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub result: &'static str,
    pub msg: String,
}

impl Envelope {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            result: SUCCESS,
            msg: msg.into(),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            result: "error",
            msg: msg.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub result: &'static str,
    pub examples: Vec<ExampleEntry>,
}

#[derive(Deserialize)]
pub struct HomeQuery {
    msg: Option<String>,
}

#[derive(Deserialize)]
pub struct ErrorQuery {
    word: Option<String>,
    suggestion: Option<String>,
}

#[derive(Deserialize)]
pub struct DetailQuery {
    status_give: Option<String>,
}

#[derive(Deserialize)]
pub struct SaveWordRequest {
    word_give: String,
    definitions_give: Vec<Definition>,
}

#[derive(Deserialize)]
pub struct DeleteWordForm {
    word_give: String,
}

#[derive(Deserialize)]
pub struct ExamplesQuery {
    word: String,
}

#[derive(Deserialize)]
pub struct SaveExampleForm {
    word: String,
    example: String,
}

#[derive(Deserialize)]
pub struct DeleteExampleForm {
    id: String,
    word: String,
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::bad_request(format!("{field} must not be empty")));
    }
    Ok(value)
}

pub async fn home(
    State(state): State<SharedState>,
    Query(params): Query<HomeQuery>,
) -> Result<Html<String>, AppError> {
    let words = state.storage.list_words().await?;
    Ok(Html(IndexPage::new(words, params.msg).render()?))
}

pub async fn error_page(Query(params): Query<ErrorQuery>) -> Result<Html<String>, AppError> {
    let page = ErrorPage::new(params.word, params.suggestion.as_deref());
    Ok(Html(page.render()?))
}

pub async fn detail(
    State(state): State<SharedState>,
    Path(keyword): Path<String>,
    Query(params): Query<DetailQuery>,
) -> Result<Response, AppError> {
    match state.dictionary.lookup(&keyword).await? {
        Lookup::NotFound { suggestions } => {
            info!(%keyword, suggestions = suggestions.len(), "word not found");
            Ok(Redirect::to(&error_location(&keyword, &suggestions)).into_response())
        }
        Lookup::Found(definitions) => {
            let status = params.status_give.as_deref().unwrap_or("new");
            let page = DetailPage::new(keyword, &definitions, status);
            Ok(Html(page.render()?).into_response())
        }
    }
}

pub async fn save_word(
    State(state): State<SharedState>,
    payload: Result<Json<SaveWordRequest>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    let Json(payload) = payload?;
    let word = required("word_give", &payload.word_give)?;
    if payload.definitions_give.is_empty() {
        return Err(AppError::bad_request("definitions_give must not be empty"));
    }
    if let Some(index) = payload.definitions_give.iter().position(|d| !d.is_entry()) {
        return Err(AppError::bad_request(format!(
            "definitions_give[{index}] must be an object with a shortdef"
        )));
    }
    state
        .storage
        .add_word(word, &payload.definitions_give)
        .await?;
    info!(word, "saved word");
    Ok(Json(Envelope::success(format!("The Word {word} was saved!"))))
}

pub async fn delete_word(
    State(state): State<SharedState>,
    form: Result<Form<DeleteWordForm>, FormRejection>,
) -> Result<Json<Envelope>, AppError> {
    let Form(form) = form?;
    let word = required("word_give", &form.word_give)?;
    let removed = state.storage.remove_word(word).await?;
    info!(word, removed, "deleted word");
    Ok(Json(Envelope::success(format!("The Word {word} was deleted!"))))
}

pub async fn get_examples(
    State(state): State<SharedState>,
    query: Result<Query<ExamplesQuery>, QueryRejection>,
) -> Result<Json<ExamplesResponse>, AppError> {
    let Query(query) = query?;
    let examples = state.storage.examples_for(query.word.trim()).await?;
    Ok(Json(ExamplesResponse {
        result: SUCCESS,
        examples,
    }))
}

pub async fn save_example(
    State(state): State<SharedState>,
    form: Result<Form<SaveExampleForm>, FormRejection>,
) -> Result<Json<Envelope>, AppError> {
    let Form(form) = form?;
    let word = required("word", &form.word)?;
    let example = required("example", &form.example)?;
    let uid = state.storage.add_example(word, example).await?;
    info!(word, uid, "saved example");
    Ok(Json(Envelope::success(format!(
        "Example \"{example}\" for word \"{word}\" was saved!"
    ))))
}

pub async fn delete_example(
    State(state): State<SharedState>,
    form: Result<Form<DeleteExampleForm>, FormRejection>,
) -> Result<Json<Envelope>, AppError> {
    let Form(form) = form?;
    let uid: i64 = form
        .id
        .trim()
        .parse()
        .map_err(|_| AppError::bad_request(format!("invalid example id {:?}", form.id)))?;
    let removed = state.storage.remove_example(uid).await?;
    info!(uid, removed, "deleted example");
    Ok(Json(Envelope::success(format!(
        "Example for word \"{}\" was deleted!",
        form.word
    ))))
}
