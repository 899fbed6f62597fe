use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use dictionary::DefinitionSource;
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::storage::Storage;

mod error;
mod pages;
mod routes;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub storage: Storage,
    pub dictionary: Box<dyn DefinitionSource>,
}

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/error", get(routes::error_page))
        .route("/detail/{keyword}", get(routes::detail))
        .route("/api/save_word", post(routes::save_word))
        .route("/api/delete_word", post(routes::delete_word))
        .route("/api/get_exs", get(routes::get_examples))
        .route("/api/save_ex", post(routes::save_example))
        .route("/api/delete_ex", post(routes::delete_example))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(addr: SocketAddr, state: SharedState) -> anyhow::Result<()> {
    let router = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            stream.recv().await;
            info!("received terminate signal, shutting down");
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
