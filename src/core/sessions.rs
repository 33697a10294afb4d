//! In-memory chat session registry
//!
//! Transcripts are memory-only and rebuilt fresh whenever the page spawns a new
//! session; there is no persistence. Idle sessions are swept by TTL.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::conversation::Conversation;
use crate::i18n::Locale;

#[derive(Debug)]
pub struct ChatSession {
    pub id: Uuid,
    pub locale: Locale,
    pub conversation: Conversation,
    /// True between dispatching a completion request and its resolution. A
    /// plain flag, not a guard: overlapping submissions are not serialized.
    pub awaiting: bool,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl ChatSession {
    fn new(locale: Locale) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            locale,
            conversation: Conversation::new(locale),
            awaiting: false,
            created_at: now,
            last_active: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }
}

#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<Uuid, ChatSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session seeded with the localized greeting.
    pub async fn create(&self, locale: Locale) -> Uuid {
        let session = ChatSession::new(locale);
        let id = session.id;
        self.inner.write().await.insert(id, session);
        id
    }

    /// Run a closure against a session under the write lock. The lock is held
    /// only for the duration of the closure, never across a request.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut ChatSession) -> R,
    ) -> Option<R> {
        let mut guard = self.inner.write().await;
        guard.get_mut(&id).map(f)
    }

    /// Read a session without mutating it.
    pub async fn read_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&ChatSession) -> R,
    ) -> Option<R> {
        let guard = self.inner.read().await;
        guard.get(&id).map(f)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    /// Drop sessions idle longer than `ttl`. Returns the number removed.
    pub async fn purge_expired(&self, ttl: Duration) -> usize {
        let mut guard = self.inner.write().await;
        let now = Utc::now();
        let before = guard.len();
        guard.retain(|_, s| now - s.last_active < ttl);
        before - guard.len()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
