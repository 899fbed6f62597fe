use std::{env, fmt::Display, net::IpAddr, str::FromStr};

use anyhow::Context;
use tracing::info;

pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub dictionary_url: String,
    pub dictionary_api_key: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            host: try_load("HOST", "0.0.0.0")?,
            port: try_load("PORT", "5005")?,
            database_url: try_load("DATABASE_URL", "sqlite://wordbook.db")?,
            dictionary_url: try_load("DICTIONARY_URL", dictionary::COLLEGIATE_API_URL)?,
            dictionary_api_key: env::var("DICTIONARY_API_KEY")
                .context("DICTIONARY_API_KEY must be set")?,
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let value = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid {key} value {value:?}: {e}"))
}
