//! Conversation transcript for the portfolio chat widget
//!
//! The visible transcript always starts with a synthetic assistant greeting in
//! the session's language. The fixed system instruction is prepended at
//! request-construction time only and never stored in the transcript.

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Translation key of the assistant greeting shown at index 0.
const GREETING_KEY: &str = "about.description2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Placement hint for rendering a transcript entry as a chat bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
}

/// One entry of the render projection.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayMessage {
    pub role: Role,
    pub content: String,
    pub align: Alignment,
}

impl From<&Message> for DisplayMessage {
    fn from(msg: &Message) -> Self {
        Self {
            role: msg.role,
            content: msg.content.clone(),
            align: match msg.role {
                Role::User => Alignment::Right,
                Role::System | Role::Assistant => Alignment::Left,
            },
        }
    }
}

/// Ordered, append-only transcript. No deletion, no reordering.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a conversation with the localized greeting as its only entry.
    pub fn new(locale: Locale) -> Self {
        Self {
            messages: vec![Message {
                role: Role::Assistant,
                content: greeting(locale).to_string(),
            }],
        }
    }

    /// Re-localize the greeting in place. Everything after index 0 is kept, so
    /// switching languages mid-conversation does not reset the exchange.
    pub fn set_locale(&mut self, locale: Locale) {
        if let Some(first) = self.messages.first_mut() {
            if first.role == Role::Assistant {
                first.content = greeting(locale).to_string();
            }
        }
    }

    /// Append a user message with the literal input text.
    pub fn push_user(&mut self, content: &str) {
        self.messages.push(Message {
            role: Role::User,
            content: content.to_string(),
        });
    }

    /// Append an assistant reply verbatim.
    pub fn push_assistant(&mut self, content: &str) {
        self.messages.push(Message {
            role: Role::Assistant,
            content: content.to_string(),
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Build the outbound message list for a completion request: the system
    /// instruction first, then the full visible transcript in order.
    pub fn outbound(&self, system_instruction: &str) -> Vec<Message> {
        let mut out = Vec::with_capacity(self.messages.len() + 1);
        out.push(Message {
            role: Role::System,
            content: system_instruction.to_string(),
        });
        out.extend(self.messages.iter().cloned());
        out
    }

    /// Read-only projection for display. Pure function of transcript state.
    pub fn display(&self) -> Vec<DisplayMessage> {
        self.messages.iter().map(DisplayMessage::from).collect()
    }
}

fn greeting(locale: Locale) -> &'static str {
    crate::i18n::text(locale, GREETING_KEY).unwrap_or_default()
}
