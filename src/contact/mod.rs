//! Contact form delivery through EmailJS
//!
//! The form is relayed to the EmailJS REST endpoint with the account
//! identifiers from configuration; the recipient address lives in the EmailJS
//! template, not here. A 200 means delivered, anything else is reported to the
//! caller as a failure.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// All three fields are required; blank-after-trim counts as missing.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("contact relay is not configured")]
    NotConfigured,

    #[error("delivery request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("delivery rejected: HTTP {0}")]
    Rejected(reqwest::StatusCode),
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

#[derive(Debug, Clone)]
pub struct ContactRelayConfig {
    pub url: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub user_id: Option<String>,
}

pub struct ContactRelay {
    config: ContactRelayConfig,
    client: Client,
}

impl ContactRelay {
    pub fn new(config: ContactRelayConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.service_id.is_some()
            && self.config.template_id.is_some()
            && self.config.user_id.is_some()
    }

    pub async fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        form.validate()?;

        let (Some(service_id), Some(template_id), Some(user_id)) = (
            self.config.service_id.as_deref(),
            self.config.template_id.as_deref(),
            self.config.user_id.as_deref(),
        ) else {
            return Err(ContactError::NotConfigured);
        };

        let request = EmailJsRequest {
            service_id,
            template_id,
            user_id,
            template_params: form,
        };

        let response = self
            .client
            .post(&self.config.url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ContactError::Rejected(status))
        }
    }
}
