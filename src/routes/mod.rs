//! API routes

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact::{ContactError, ContactForm, ContactRelay};
use crate::content::{self, Category, Project, SkillCategory};
use crate::core::{ChatError, ChatService, SessionView};
use crate::i18n::{self, Locale, TimelineEntry};

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
    pub contact: Arc<ContactRelay>,
    pub default_locale: Locale,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unknown session: {0}")]
    UnknownSession(Uuid),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    DeliveryFailed(String),
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::UnknownSession(id) => ApiError::UnknownSession(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownSession(_) => StatusCode::NOT_FOUND,
            ApiError::UnknownLocale(_)
            | ApiError::UnknownCategory(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::DeliveryFailed(_) => StatusCode::BAD_GATEWAY,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

fn parse_locale(code: &str) -> Result<Locale, ApiError> {
    Locale::from_code(code).ok_or_else(|| ApiError::UnknownLocale(code.to_string()))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Default, Deserialize)]
struct CreateSessionRequest {
    #[serde(default)]
    locale: Option<String>,
}

async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let locale = request.locale.as_deref().map(parse_locale).transpose()?;
    let view = state.chat.create_session(locale).await;
    Ok((StatusCode::CREATED, Json(view)))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.chat.view(id).await?))
}

#[derive(Debug, Deserialize)]
struct SetLocaleRequest {
    locale: String,
}

async fn set_session_locale(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetLocaleRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let locale = parse_locale(&request.locale)?;
    Ok(Json(state.chat.set_locale(id, locale).await?))
}

#[derive(Debug, Deserialize)]
struct SubmitRequest {
    content: String,
}

/// A completion failure is invisible here: the transcript simply comes back
/// without an assistant entry. The failure itself is logged server-side.
async fn submit_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.chat.submit(id, &request.content).await?))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.chat.remove_session(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::UnknownSession(id))
    }
}

#[derive(Debug, Deserialize)]
struct ContactRequest {
    name: String,
    email: String,
    message: String,
    #[serde(default)]
    locale: Option<String>,
}

#[derive(Debug, Serialize)]
struct ContactResponse {
    status: &'static str,
    message: &'static str,
}

async fn send_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let locale = request
        .locale
        .as_deref()
        .map(parse_locale)
        .transpose()?
        .unwrap_or(state.default_locale);

    let form = ContactForm {
        name: request.name,
        email: request.email,
        message: request.message,
    };

    match state.contact.send(&form).await {
        Ok(()) => Ok(Json(ContactResponse {
            status: "success",
            message: i18n::text(locale, "contact.success").unwrap_or_default(),
        })),
        Err(ContactError::MissingField(field)) => {
            Err(ApiError::BadRequest(format!("missing field: {field}")))
        }
        Err(err) => {
            tracing::error!(error = %err, "contact delivery failed");
            Err(ApiError::DeliveryFailed(
                i18n::text(locale, "contact.error")
                    .unwrap_or_default()
                    .to_string(),
            ))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ProjectsQuery {
    #[serde(default)]
    category: Option<String>,
}

async fn list_projects(
    Query(query): Query<ProjectsQuery>,
) -> Result<Json<Vec<&'static Project>>, ApiError> {
    match query.category.as_deref() {
        None => Ok(Json(content::projects().iter().collect())),
        Some(raw) => {
            let category: Category = raw
                .parse()
                .map_err(|_| ApiError::UnknownCategory(raw.to_string()))?;
            Ok(Json(content::filtered(category)))
        }
    }
}

async fn list_skills() -> Json<&'static [SkillCategory]> {
    Json(content::skill_categories())
}

async fn get_resume(
    Path(locale): Path<String>,
) -> Result<Json<&'static [TimelineEntry]>, ApiError> {
    let locale = parse_locale(&locale)?;
    Ok(Json(i18n::timeline(locale)))
}

async fn get_translations(
    Path(locale): Path<String>,
) -> Result<Json<BTreeMap<&'static str, &'static str>>, ApiError> {
    let locale = parse_locale(&locale)?;
    Ok(Json(i18n::strings(locale).iter().copied().collect()))
}

async fn get_site(State(state): State<AppState>) -> Json<content::SiteMeta> {
    Json(content::site_meta(state.default_locale))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat/sessions", post(create_session))
        .route(
            "/api/chat/sessions/:id",
            get(get_session).delete(delete_session),
        )
        .route("/api/chat/sessions/:id/locale", axum::routing::put(set_session_locale))
        .route("/api/chat/sessions/:id/messages", post(submit_message))
        .route("/api/contact", post(send_contact))
        .route("/api/projects", get(list_projects))
        .route("/api/skills", get(list_skills))
        .route("/api/resume/:locale", get(get_resume))
        .route("/api/translations/:locale", get(get_translations))
        .route("/api/site", get(get_site))
}
