use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Extension, Router,
};
use parley_core::protocol::http;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers;
use crate::AppState;

/// CORS per una sola origine. Nessuna protezione CSRF: le POST sono accettate senza token.
pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    // con `list` l'header viene restituito solo se l'Origin della richiesta coincide
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/*
    Ogni .layer() avvolge tutto ciò che sta sopra, quindi l'ordine di esecuzione
    per una richiesta è: TraceLayer -> CORS -> Extension -> handler.
    Il CORS risponde da solo ai preflight OPTIONS, prima di arrivare alle rotte.
*/
pub fn router(state: Arc<AppState>, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route(http::HEALTH, get(controllers::health))
        .route(http::GET_USER_MESSAGES, get(controllers::get_user_messages))
        .route(http::GET_SENDER_MESSAGES, get(controllers::get_sender_messages))
        .route(http::ADD_USER_MESSAGE, post(controllers::add_user_message))
        // lo stato condiviso arriva agli handler come Extension<Arc<AppState>>
        .layer(Extension(state))
        .layer(cors_layer(allowed_origin))
        .layer(TraceLayer::new_for_http())
}
