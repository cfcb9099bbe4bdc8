//! PCDentro application composition root
//!
//! Wires the session context (restored once at boot), the API client, and
//! the route gate in front of the page routes. The pages themselves are
//! stubs — rendering is outside this subsystem — but the gate and the
//! session context they sit on are the real thing.

use std::sync::Arc;

use axum::{
    extract::State,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use pcdentro_api::ApiClient;
use pcdentro_common::Config;
use pcdentro_session::{FileStore, MemoryMirror, SessionContext, SessionStore};

/// Shared application state handed to page handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionContext>,
    pub api: Arc<ApiClient>,
}

/// Build the application router.
///
/// The session context is initialized here — restoring any persisted
/// session — before a single request is served, so no handler ever sees
/// the loading state.
pub async fn create_app(config: &Config) -> anyhow::Result<Router> {
    let durable = Arc::new(FileStore::new(&config.session_store_path));
    let mirrors = Arc::new(MemoryMirror::default());
    let store = SessionStore::new(durable, mirrors);

    let session = Arc::new(SessionContext::new(store));
    session.initialize().await;

    let state = AppState {
        session,
        api: Arc::new(ApiClient::new(config.api_base_url.clone())),
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "PCDentro" }))
        .route("/login", get(pages::login))
        .route("/login/admin", get(pages::admin_login))
        .route("/cadastro", get(pages::register))
        .route("/vaga", get(pages::job_listings))
        .route("/perfil", get(pages::profile))
        .route("/admin", get(pages::admin_home))
        .route("/admin/{*rest}", get(pages::admin_home))
        .route("/minhas-vagas", get(pages::company_jobs))
        .route("/vaga/create", get(pages::job_create))
        .layer(middleware::from_fn(pcdentro_gate::route_gate))
        .with_state(state);

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

mod pages {
    use super::*;

    // Stub pages. The profile page shows the one thing pages actually do
    // with the session context: read the derived authentication state.

    pub(crate) async fn login() -> &'static str {
        "login"
    }

    pub(crate) async fn admin_login() -> &'static str {
        "admin login"
    }

    pub(crate) async fn register() -> &'static str {
        "cadastro"
    }

    pub(crate) async fn job_listings() -> &'static str {
        "vagas"
    }

    pub(crate) async fn profile(State(state): State<AppState>) -> Json<Value> {
        let session = state.session.session().await;
        Json(json!({
            "authenticated": session.is_authenticated(),
            "role": session.role().map(|role| role.as_tag()),
        }))
    }

    pub(crate) async fn admin_home() -> &'static str {
        "admin"
    }

    pub(crate) async fn company_jobs() -> &'static str {
        "minhas vagas"
    }

    pub(crate) async fn job_create() -> &'static str {
        "criar vaga"
    }
}
