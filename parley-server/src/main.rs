use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ri-utilizziamo le funzioni e strutture definite in lib.rs
use parley_server::{build_app, shutdown_signal, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Legge la configurazione dalle variabili d'ambiente
    let config = Config::from_env().context("load config")?;

    // Logging: filtro da RUST_LOG (default "info") + output formattato su stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Store con i dati di esempio + rotte
    let app = build_app(&config);

    tracing::info!("allowed origin: {:?}", config.allowed_origin);
    // Crea il listener TCP e lo lega all'indirizzo configurato
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .context("bind tcp listener")?;
    tracing::info!("listening on http://{}", config.bind_addr);

    /*
     * Avvia il server HTTP sul listener; with_graceful_shutdown smette di accettare
     * connessioni al Ctrl-C / SIGTERM e attende la fine delle richieste in corso.
     */
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server shutdown")?;

    Ok(())
}
