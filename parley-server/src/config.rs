use anyhow::Context;
use axum::http::HeaderValue;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_RUST_LOG: &str = "info";

/// Configurazione del server, letta una volta sola dalle variabili d'ambiente.
#[derive(Debug, Clone)]
pub struct Config {
    /// BIND_ADDR
    pub bind_addr: SocketAddr,
    /// ALLOWED_ORIGIN: unica origine ammessa dal CORS.
    pub allowed_origin: HeaderValue,
    /// RUST_LOG
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Come `from_env`, ma con una funzione di lookup esplicita (usata nei test).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        // converte la stringa in host + porta
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("parse BIND_ADDR {:?}", bind))?;

        let origin = lookup("ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin = HeaderValue::from_str(&origin)
            .with_context(|| format!("parse ALLOWED_ORIGIN {:?}", origin))?;

        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_string());

        Ok(Self { bind_addr, allowed_origin, rust_log })
    }
}
