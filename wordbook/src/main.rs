use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use config::Config;
use dictionary::{Dictionary, Url};
use server::AppState;
use storage::Storage;
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod server;
mod storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::load()?;
    let storage = Storage::connect(&config.database_url).await?;

    let dictionary_url = Url::parse(&config.dictionary_url)
        .with_context(|| format!("invalid DICTIONARY_URL {:?}", config.dictionary_url))?;
    let dict = Dictionary::new(dictionary_url, config.dictionary_api_key);

    let state = Arc::new(AppState {
        storage: storage.clone(),
        dictionary: Box::new(dict),
    });
    let result = server::serve(SocketAddr::new(config.host, config.port), state).await;
    storage.close().await;
    result
}
