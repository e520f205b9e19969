use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};
use parley_core::{Error, Message, MessageList};
use std::sync::Arc;

use crate::AppState;

/// Errore degli handler: status + corpo JSON condiviso.
pub type ApiError = (StatusCode, Json<Error>);

/// Handler per GET /api/get-user-messages
pub async fn get_user_messages(Extension(state): Extension<Arc<AppState>>) -> Json<MessageList> {
    let messages = state.store.user_messages().await;
    tracing::debug!(count = messages.len(), "get user messages");
    Json(messages)
}

/// Handler per GET /api/get-sender-messages
pub async fn get_sender_messages(Extension(state): Extension<Arc<AppState>>) -> Json<MessageList> {
    let messages = state.store.sender_messages();
    tracing::debug!(count = messages.len(), "get sender messages");
    Json(messages)
}

/// Handler per POST /api/add-user-message
///
/// Nessuna validazione dei campi: il messaggio viene aggiunto così com'è.
/// Solo un body non deserializzabile viene rifiutato.
pub async fn add_user_message(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<Message>, JsonRejection>,
) -> Result<Json<MessageList>, ApiError> {
    // se il body non è un Message valido mappo il rejection di axum nel nostro Error
    let Json(message) = body.map_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "rejected add-user-message body: {}", rejection.body_text());
        (rejection.status(), Json(Error::new("invalid_body", rejection.body_text())))
    })?;

    tracing::info!(
        sender = %message.sender.first_name,
        conversation_id = message.conversation_id,
        sequence_number = message.sequence_number,
        "add user message"
    );
    let messages = state.store.append_user_message(message).await;
    Ok(Json(messages))
}

/// Handler per GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}
