use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

mod examples;
mod words;

pub use examples::ExampleEntry;
pub use words::WordSummary;

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn connect(url: &str) -> sqlx::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = if url.contains(":memory:") {
            // every connection to :memory: is a fresh database, so keep exactly one alive
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new().connect_with(options).await?
        };
        sqlx::migrate!().run(&pool).await?;
        tracing::info!(url, "storage ready");
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("storage closed");
    }
}

#[cfg(test)]
pub(crate) async fn memory() -> Storage {
    Storage::connect("sqlite::memory:").await.unwrap()
}
