use serde::Serialize;
use sqlx::{query, query_as, FromRow};

use super::Storage;

#[derive(Debug, FromRow)]
struct ExampleRow {
    uid: i64,
    example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleEntry {
    pub example: String,
    pub id: String,
}

impl From<ExampleRow> for ExampleEntry {
    fn from(row: ExampleRow) -> Self {
        Self {
            example: row.example,
            id: row.uid.to_string(),
        }
    }
}

impl Storage {
    pub async fn examples_for(&self, word: &str) -> sqlx::Result<Vec<ExampleEntry>> {
        let rows: Vec<ExampleRow> =
            query_as("SELECT uid, example FROM examples WHERE word = ? ORDER BY uid")
                .bind(word)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(ExampleEntry::from).collect())
    }

    /// Returns the id of the new example. The word itself does not have to be saved.
    pub async fn add_example(&self, word: &str, example: &str) -> sqlx::Result<i64> {
        let result = query("INSERT INTO examples(word, example) VALUES(?, ?)")
            .bind(word)
            .bind(example)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Attempt to remove an example, returns true if the example was removed
    pub async fn remove_example(&self, uid: i64) -> sqlx::Result<bool> {
        let result = query("DELETE FROM examples WHERE uid = ?")
            .bind(uid)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
