//! Chat session management and request dispatch

mod chat;
mod sessions;

pub use chat::{ChatError, ChatService, SessionView};
pub use sessions::{ChatSession, SessionStore};
