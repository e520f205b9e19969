use std::sync::Arc;

pub mod config;
pub mod controllers;
pub mod routes;
pub mod store;

pub use config::Config;
pub use store::MessageStore;

/// Stato condiviso tra gli handler, passato come `Extension<Arc<AppState>>`.
#[derive(Debug)]
pub struct AppState {
    pub store: MessageStore,
}

impl AppState {
    pub fn new(store: MessageStore) -> Self {
        Self { store }
    }
}

/// Costruisce l'app completa (stato con dati di esempio + router) a partire dalla configurazione.
pub fn build_app(config: &Config) -> axum::Router {
    let state = Arc::new(AppState::new(MessageStore::seeded()));
    routes::router(state, config.allowed_origin.clone())
}

/// Attende Ctrl-C o SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
