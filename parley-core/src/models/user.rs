use serde::{Deserialize, Serialize};

/// Partecipante di una conversazione, identificato solo dal nome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    /// Se il client non lo manda l'utente è considerato offline.
    #[serde(default)]
    pub is_online: bool,
}

impl User {
    pub fn new(first_name: impl Into<String>, is_online: bool) -> Self {
        Self { first_name: first_name.into(), is_online }
    }
}
