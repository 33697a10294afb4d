//! Backend API for a bilingual developer portfolio site
//!
//! Serves the site's localized content and catalogs, hosts the chat widget's
//! conversation manager backed by an OpenAI-compatible completion endpoint, and
//! relays contact-form submissions to EmailJS.

pub mod config;
pub mod contact;
pub mod content;
pub mod conversation;
pub mod core;
pub mod i18n;
pub mod providers;
pub mod routes;
