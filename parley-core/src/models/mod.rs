pub mod user;
pub mod message;

// Re-export per comodità
pub use user::User;
pub use message::Message;
