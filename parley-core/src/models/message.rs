use serde::{Deserialize, Serialize};

use super::User;

/// Messaggio di una conversazione, esposto sul wire.
///
/// `sequence_number` è la posizione nella conversazione solo per convenzione:
/// né unicità né monotonia vengono controllate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub sender: User,
    // i campi mancanti vengono accettati così come sono (valori zero)
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub conversation_id: i64,
    #[serde(default)]
    pub sequence_number: i64,
}

impl Message {
    pub fn new(sender: User, text: impl Into<String>, conversation_id: i64, sequence_number: i64) -> Self {
        Self { sender, text: text.into(), conversation_id, sequence_number }
    }
}
