//! Application configuration

pub mod prompts;

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,

    /// OpenAI-compatible completion endpoint
    pub openrouter_url: String,
    pub openrouter_api_key: Option<String>,
    pub chat_model: String,

    /// Form-delivery relay (EmailJS)
    pub emailjs_url: String,
    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub emailjs_user_id: Option<String>,

    /// Language used for new chat sessions that do not pick one
    pub default_locale: Locale,

    /// Idle chat sessions are dropped after this many minutes
    pub session_ttl_minutes: i64,

    /// Optional directory with the built SPA bundle to serve
    pub static_dir: Option<PathBuf>,

    /// Optional TOML persona file overriding the built-in system instruction
    pub prompt_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            openrouter_url: env::var("OPENROUTER_URL")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1".into()),
            openrouter_api_key: env::var("OPENROUTER_API_KEY").ok(),
            chat_model: env::var("CHAT_MODEL")
                .unwrap_or_else(|_| "google/gemini-2.0-flash-lite-001".into()),
            emailjs_url: env::var("EMAILJS_URL")
                .unwrap_or_else(|_| "https://api.emailjs.com/api/v1.0/email/send".into()),
            emailjs_service_id: env::var("EMAILJS_SERVICE_ID").ok(),
            emailjs_template_id: env::var("EMAILJS_TEMPLATE_ID").ok(),
            emailjs_user_id: env::var("EMAILJS_USER_ID").ok(),
            default_locale: env::var("DEFAULT_LOCALE")
                .ok()
                .and_then(|l| Locale::from_code(&l))
                .unwrap_or_default(),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(60),
            static_dir: env::var("STATIC_DIR").ok().map(PathBuf::from),
            prompt_file: env::var("PROMPT_FILE").ok().map(PathBuf::from),
        })
    }
}
