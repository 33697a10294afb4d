//! Chat service: dispatches completion requests and merges results
//!
//! The service owns the session registry, the fixed system instruction, and a
//! completion backend. A submission appends the user message, fires one
//! request, and merges whatever comes back; failures never reach the visible
//! transcript, they only go to the log. Overlapping submissions are allowed and
//! resolve in arrival order, which may differ from submission order.

use std::sync::Arc;

use chrono::Duration;
use serde::Serialize;
use uuid::Uuid;

use crate::conversation::DisplayMessage;
use crate::core::sessions::{ChatSession, SessionStore};
use crate::i18n::Locale;
use crate::providers::CompletionBackend;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("unknown session: {0}")]
    UnknownSession(Uuid),
}

/// Snapshot of a session handed to the frontend.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub locale: Locale,
    pub transcript: Vec<DisplayMessage>,
    pub awaiting: bool,
}

impl SessionView {
    fn of(session: &ChatSession) -> Self {
        Self {
            session_id: session.id,
            locale: session.locale,
            transcript: session.conversation.display(),
            awaiting: session.awaiting,
        }
    }
}

pub struct ChatService {
    sessions: SessionStore,
    backend: Arc<dyn CompletionBackend>,
    system_instruction: String,
    default_locale: Locale,
}

impl ChatService {
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        system_instruction: String,
        default_locale: Locale,
    ) -> Self {
        Self {
            sessions: SessionStore::new(),
            backend,
            system_instruction,
            default_locale,
        }
    }

    /// Open a session seeded with the localized greeting.
    pub async fn create_session(&self, locale: Option<Locale>) -> SessionView {
        let locale = locale.unwrap_or(self.default_locale);
        let id = self.sessions.create(locale).await;
        self.sessions
            .read_session(id, SessionView::of)
            .await
            .expect("session just created")
    }

    pub async fn view(&self, id: Uuid) -> Result<SessionView, ChatError> {
        self.sessions
            .read_session(id, SessionView::of)
            .await
            .ok_or(ChatError::UnknownSession(id))
    }

    /// Switch a session's language: the greeting is re-localized in place and
    /// every exchange after it is preserved.
    pub async fn set_locale(&self, id: Uuid, locale: Locale) -> Result<SessionView, ChatError> {
        self.sessions
            .with_session(id, |s| {
                s.locale = locale;
                s.conversation.set_locale(locale);
                s.touch();
                SessionView::of(s)
            })
            .await
            .ok_or(ChatError::UnknownSession(id))
    }

    pub async fn remove_session(&self, id: Uuid) -> bool {
        self.sessions.remove(id).await
    }

    pub async fn purge_expired(&self, ttl: Duration) -> usize {
        self.sessions.purge_expired(ttl).await
    }

    /// Submit user input to a session.
    ///
    /// Input that trims to empty is a no-op: transcript and request state stay
    /// untouched. Otherwise the literal input text is appended as a user
    /// message and one completion request is issued with the system instruction
    /// first, then the full transcript. On success the reply is appended
    /// verbatim; on any failure the transcript is left as it is and the error
    /// goes to the log. The awaiting flag clears in both outcomes.
    ///
    /// No lock is held across the outbound request, so a second submission may
    /// proceed while the first is in flight.
    pub async fn submit(&self, id: Uuid, input: &str) -> Result<SessionView, ChatError> {
        if input.trim().is_empty() {
            return self.view(id).await;
        }

        let outbound = self
            .sessions
            .with_session(id, |s| {
                s.conversation.push_user(input);
                s.awaiting = true;
                s.touch();
                s.conversation.outbound(&self.system_instruction)
            })
            .await
            .ok_or(ChatError::UnknownSession(id))?;

        let result = self.backend.complete(&outbound).await;

        self.sessions
            .with_session(id, |s| {
                match &result {
                    Ok(reply) => s.conversation.push_assistant(&reply.content),
                    Err(err) => {
                        tracing::error!(session = %id, error = %err, "completion request failed");
                    }
                }
                s.awaiting = false;
                s.touch();
                SessionView::of(s)
            })
            .await
            .ok_or(ChatError::UnknownSession(id))
    }
}
