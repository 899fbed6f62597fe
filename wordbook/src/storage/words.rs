use chrono::Local;
use dictionary::Definition;
use serde::Serialize;
use sqlx::{query, query_as, types::Json, FromRow};

use super::Storage;

#[derive(Debug, FromRow)]
struct WordRow {
    word: String,
    definitions: Json<Vec<Definition>>,
}

/// A saved word with the short form of its first definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordSummary {
    pub word: String,
    pub definition: String,
}

impl From<WordRow> for WordSummary {
    fn from(row: WordRow) -> Self {
        let definition = row
            .definitions
            .first()
            .and_then(Definition::short_definition)
            .unwrap_or_default()
            .to_owned();
        Self {
            word: row.word,
            definition,
        }
    }
}

impl Storage {
    pub async fn list_words(&self) -> sqlx::Result<Vec<WordSummary>> {
        let rows: Vec<WordRow> = query_as("SELECT word, definitions FROM words ORDER BY uid")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(WordSummary::from).collect())
    }

    /// Saves a word stamped with today's date. Saving the same word twice keeps both rows.
    pub async fn add_word(&self, word: &str, definitions: &[Definition]) -> sqlx::Result<()> {
        let date = Local::now().format("%d%m%Y").to_string();
        query("INSERT INTO words(word, definitions, date) VALUES(?, ?, ?)")
            .bind(word)
            .bind(Json(definitions))
            .bind(date)
            .execute(&self.pool)
            .await
            .map(|_| ())
    }

    /// Removes every row of the word along with its examples, returns true if a word was removed
    pub async fn remove_word(&self, word: &str) -> sqlx::Result<bool> {
        let mut tx = self.pool.begin().await?;
        let removed = query("DELETE FROM words WHERE word = ?")
            .bind(word)
            .execute(&mut *tx)
            .await?;
        let examples = query("DELETE FROM examples WHERE word = ?")
            .bind(word)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::debug!(
            word,
            words = removed.rows_affected(),
            examples = examples.rows_affected(),
            "removed word"
        );
        Ok(removed.rows_affected() > 0)
    }
}
