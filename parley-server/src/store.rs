use parley_core::{Message, MessageList, User};
use tokio::sync::RwLock;

/// Store in memoria dei messaggi, vive quanto il processo.
///
/// `user_messages` cresce solo in coda e ogni append passa dal write lock;
/// `sender_messages` non cambia dopo la costruzione.
#[derive(Debug)]
pub struct MessageStore {
    user_messages: RwLock<Vec<Message>>,
    sender_messages: Vec<Message>,
}

impl MessageStore {
    pub fn new(user_messages: Vec<Message>, sender_messages: Vec<Message>) -> Self {
        // solo i messaggi utente vengono modificati, quindi solo loro stanno dietro al lock
        Self { user_messages: RwLock::new(user_messages), sender_messages }
    }

    /// Crea lo store con i dati di esempio, prima di servire qualsiasi richiesta.
    pub fn seeded() -> Self {
        /* Dati di esempio: un messaggio utente (Aurelie) e due mittenti,
           Ludovic online e Jessica offline, in quest'ordine. */
        let user_messages = vec![Message::new(User::new("Aurelie", false), "Message from Lilly", 1, 2)];
        let sender_messages = vec![
            Message::new(User::new("Ludovic", true), "Message from Ludovic", 1, 1),
            Message::new(User::new("Jessica", false), "Message from Jessica", 2, 1),
        ];
        Self::new(user_messages, sender_messages)
    }

    /// Copia della lista corrente dei messaggi utente.
    pub async fn user_messages(&self) -> MessageList {
        // read lock: più letture in parallelo, il clone evita di tenere il lock oltre la funzione
        self.user_messages.read().await.clone()
    }

    // immutabile dopo la costruzione: nessun lock
    pub fn sender_messages(&self) -> MessageList {
        self.sender_messages.clone()
    }

    /// Aggiunge in coda e restituisce la lista aggiornata.
    /// La copia viene presa sotto lo stesso lock, quindi termina sempre con `message`.
    pub async fn append_user_message(&self, message: Message) -> MessageList {
        // write lock: gli append concorrenti vengono serializzati, nessuno va perso
        let mut guard = self.user_messages.write().await;
        guard.push(message);
        /* il clone avviene prima che il guard venga rilasciato: un altro append
           non può inserirsi tra il push e la copia restituita al chiamante */
        guard.clone()
    }
}
