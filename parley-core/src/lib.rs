//! parley-core: tipi condivisi tra client e server (modelli, percorsi HTTP, errori).
//! Niente I/O.

pub mod models;
pub mod protocol;
pub mod error;

// Re-export utili per ridurre i percorsi nei crate client/server
pub use error::Error;
pub use models::{message::Message, user::User};
pub use protocol::http::MessageList;
