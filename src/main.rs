//! Portfolio API server
//!
//! Backend for a bilingual single-page portfolio site: localized content,
//! the chat widget's conversation manager, and contact-form delivery.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_api::config::{prompts, Config};
use portfolio_api::contact::{ContactRelay, ContactRelayConfig};
use portfolio_api::core::ChatService;
use portfolio_api::providers::{OpenRouterBackend, OpenRouterConfig};
use portfolio_api::routes::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let system_instruction = prompts::system_instruction(config.prompt_file.as_deref())?;

    let backend = Arc::new(OpenRouterBackend::new(OpenRouterConfig {
        base_url: config.openrouter_url.clone(),
        api_key: config.openrouter_api_key.clone().unwrap_or_default(),
        model: config.chat_model.clone(),
    }));

    let chat = Arc::new(ChatService::new(
        backend,
        system_instruction,
        config.default_locale,
    ));

    let contact = Arc::new(ContactRelay::new(ContactRelayConfig {
        url: config.emailjs_url.clone(),
        service_id: config.emailjs_service_id.clone(),
        template_id: config.emailjs_template_id.clone(),
        user_id: config.emailjs_user_id.clone(),
    }));
    if !contact.is_configured() {
        tracing::warn!("contact relay not configured, /api/contact will refuse submissions");
    }

    // Sweep idle chat sessions in the background.
    let ttl = chrono::Duration::minutes(config.session_ttl_minutes);
    let sweeper = chat.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            let removed = sweeper.purge_expired(ttl).await;
            if removed > 0 {
                tracing::debug!(removed, "purged idle chat sessions");
            }
        }
    });

    let state = AppState {
        chat,
        contact,
        default_locale: config.default_locale,
    };

    let mut app = Router::new().merge(routes::router());

    // Optionally serve the built SPA bundle alongside the API.
    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    let app = app
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("portfolio API running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
