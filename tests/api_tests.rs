use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use portfolio_api::contact::{ContactRelay, ContactRelayConfig};
use portfolio_api::conversation::{Message, Role};
use portfolio_api::core::ChatService;
use portfolio_api::i18n::Locale;
use portfolio_api::providers::{CompletionBackend, ProviderError};
use portfolio_api::routes::{self, AppState};

/// Completion backend that answers from a fixed queue.
struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<Message, ProviderError>>>,
}

impl ScriptedBackend {
    fn replying(replies: Vec<&str>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| {
                        Ok(Message {
                            role: Role::Assistant,
                            content: r.to_string(),
                        })
                    })
                    .collect(),
            ),
        })
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, _messages: &[Message]) -> Result<Message, ProviderError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::InvalidResponse("no reply scripted".into())))
    }
}

fn app(backend: Arc<dyn CompletionBackend>) -> axum::Router {
    let chat = Arc::new(ChatService::new(
        backend,
        "persona".to_string(),
        Locale::En,
    ));
    let contact = Arc::new(ContactRelay::new(ContactRelayConfig {
        url: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
        service_id: None,
        template_id: None,
        user_id: None,
    }));
    routes::router().with_state(AppState {
        chat,
        contact,
        default_locale: Locale::En,
    })
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app(ScriptedBackend::replying(vec![]));
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn chat_flow_create_submit_switch_locale() {
    let app = app(ScriptedBackend::replying(vec!["He builds web apps."]));

    // Open a session: the transcript starts with the English greeting.
    let response = app
        .clone()
        .oneshot(post("/api/chat/sessions", r#"{"locale": "en"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();
    assert_eq!(body["transcript"].as_array().unwrap().len(), 1);
    assert_eq!(body["transcript"][0]["role"], "assistant");
    assert_eq!(body["transcript"][0]["align"], "left");
    assert_eq!(body["awaiting"], false);

    // Ask a question.
    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/chat/sessions/{session_id}/messages"),
            r#"{"content": "what does he do?"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let transcript = body["transcript"].as_array().unwrap();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[1]["role"], "user");
    assert_eq!(transcript[1]["align"], "right");
    assert_eq!(transcript[2]["content"], "He builds web apps.");
    assert_eq!(body["awaiting"], false);

    // Switch to French: only the greeting changes, the exchange stays.
    let greeting_en = transcript[0]["content"].as_str().unwrap().to_string();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/chat/sessions/{session_id}/locale"))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"locale": "fr"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let transcript = body["transcript"].as_array().unwrap();
    assert_eq!(transcript.len(), 3);
    assert_ne!(transcript[0]["content"].as_str().unwrap(), greeting_en);
    assert_eq!(transcript[1]["content"], "what does he do?");
    assert_eq!(body["locale"], "fr");
}

#[tokio::test]
async fn blank_message_is_a_no_op() {
    let app = app(ScriptedBackend::replying(vec![]));

    let response = app
        .clone()
        .oneshot(post("/api/chat/sessions", "{}"))
        .await
        .unwrap();
    let body = json_body(response).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(post(
            &format!("/api/chat/sessions/{session_id}/messages"),
            r#"{"content": "   "}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["transcript"].as_array().unwrap().len(), 1);
    assert_eq!(body["awaiting"], false);
}

#[tokio::test]
async fn completion_failure_stays_out_of_the_transcript() {
    // The scripted backend errors once the queue is empty.
    let app = app(ScriptedBackend::replying(vec![]));

    let response = app
        .clone()
        .oneshot(post("/api/chat/sessions", "{}"))
        .await
        .unwrap();
    let body = json_body(response).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(post(
            &format!("/api/chat/sessions/{session_id}/messages"),
            r#"{"content": "hello"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let transcript = body["transcript"].as_array().unwrap();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1]["role"], "user");
    assert_eq!(body["awaiting"], false);
}

#[tokio::test]
async fn deleting_a_session_then_using_it_is_404() {
    let app = app(ScriptedBackend::replying(vec![]));

    let response = app
        .clone()
        .oneshot(post("/api/chat/sessions", "{}"))
        .await
        .unwrap();
    let body = json_body(response).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/chat/sessions/{session_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get(&format!("/api/chat/sessions/{session_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_locale_is_rejected() {
    let app = app(ScriptedBackend::replying(vec![]));

    let response = app
        .clone()
        .oneshot(post("/api/chat/sessions", r#"{"locale": "de"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/api/resume/de")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn projects_endpoint_filters_by_category() {
    let app = app(ScriptedBackend::replying(vec![]));

    let response = app.clone().oneshot(get("/api/projects")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let all = json_body(response).await;
    assert_eq!(all.as_array().unwrap().len(), 13);

    let response = app
        .clone()
        .oneshot(get("/api/projects?category=game"))
        .await
        .unwrap();
    let games = json_body(response).await;
    assert!(!games.as_array().unwrap().is_empty());
    for project in games.as_array().unwrap() {
        let categories = project["categories"].as_array().unwrap();
        assert!(categories.iter().any(|c| c == "game"));
    }

    let response = app
        .oneshot(get("/api/projects?category=desktop"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn content_endpoints_serve_localized_data() {
    let app = app(ScriptedBackend::replying(vec![]));

    let response = app.clone().oneshot(get("/api/skills")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let skills = json_body(response).await;
    assert_eq!(skills.as_array().unwrap().len(), 6);

    let response = app.clone().oneshot(get("/api/resume/fr")).await.unwrap();
    let timeline = json_body(response).await;
    assert!(timeline
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["type"] == "education"));

    let response = app
        .clone()
        .oneshot(get("/api/translations/en"))
        .await
        .unwrap();
    let table = json_body(response).await;
    assert_eq!(table["nav.home"], "Home");

    let response = app.oneshot(get("/api/site")).await.unwrap();
    let site = json_body(response).await;
    assert_eq!(site["theme_storage_key"], "theme");
    assert_eq!(site["locales"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unconfigured_contact_relay_returns_an_error_banner() {
    let app = app(ScriptedBackend::replying(vec![]));

    let response = app
        .clone()
        .oneshot(post(
            "/api/contact",
            r#"{"name": "Jane", "email": "jane@example.com", "message": "Hi", "locale": "fr"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    // Blank fields are rejected before any delivery attempt.
    let response = app
        .oneshot(post(
            "/api/contact",
            r#"{"name": "", "email": "jane@example.com", "message": "Hi"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
