/*
    Percorsi delle API HTTP, condivisi tra server e client.
    I body sono JSON: le GET e la POST rispondono sempre con la lista
    completa dei messaggi (Vec<Message>), la POST riceve un singolo Message.
*/
use crate::models::Message;

/// GET: messaggi dell'utente.
pub const GET_USER_MESSAGES: &str = "/api/get-user-messages";
/// GET: messaggi dei mittenti.
pub const GET_SENDER_MESSAGES: &str = "/api/get-sender-messages";
/// POST: aggiunge un messaggio dell'utente e restituisce la lista aggiornata.
pub const ADD_USER_MESSAGE: &str = "/api/add-user-message";
pub const HEALTH: &str = "/health";

/// Risposta di tutti gli endpoint di messaggistica.
pub type MessageList = Vec<Message>;
