//! Route gate integration tests
//!
//! Drives the real router with `tower::ServiceExt::oneshot`, asserting
//! redirects, Location targets, and mirror clearance straight off the HTTP
//! surface.

use axum::{
    body::Body,
    http::{header::COOKIE, header::LOCATION, header::SET_COOKIE, Request, StatusCode},
    Router,
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use pcdentro_common::Config;
use serde_json::json;
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        api_base_url: "http://localhost:3001".to_string(),
        session_store_path: std::env::temp_dir()
            .join(format!("pcdentro-gate-test-{}.json", uuid::Uuid::new_v4()))
            .display()
            .to_string(),
        rust_log: String::new(),
        port: 0,
    }
}

async fn app() -> Router {
    pcdentro_app::create_app(&test_config())
        .await
        .expect("app construction")
}

fn forge_token(role: &str, exp: i64) -> String {
    let claims = json!({ "id": "42", "role": role, "exp": exp });
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"integration-secret"),
    )
    .expect("token encoding")
}

async fn navigate(app: Router, path: &str, token: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().uri(path);
    if let Some(token) = token {
        builder = builder.header(COOKIE, format!("pcd_token={token}; pcd_role=whatever"));
    }
    app.oneshot(builder.body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("Location header")
        .to_str()
        .expect("utf-8 Location")
}

fn cleared_mirrors(response: &axum::response::Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| value.to_str().expect("utf-8 Set-Cookie").to_string())
        .collect()
}

#[tokio::test]
async fn test_admin_area_without_token_redirects_to_admin_login() {
    let response = navigate(app().await, "/admin", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login/admin");
    assert!(cleared_mirrors(&response).is_empty());
}

#[tokio::test]
async fn test_company_areas_without_token_redirect_to_general_login() {
    for path in ["/minhas-vagas", "/vaga/create"] {
        let response = navigate(app().await, path, None).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/login");
    }
}

#[tokio::test]
async fn test_public_paths_pass_without_token() {
    for path in ["/", "/login", "/cadastro", "/vaga", "/perfil", "/health"] {
        let response = navigate(app().await, path, None).await;
        assert_eq!(response.status(), StatusCode::OK, "path {path}");
    }
}

#[tokio::test]
async fn test_company_token_is_rejected_from_admin_area() {
    let token = forge_token("empresa", Utc::now().timestamp() + 3600);

    let response = navigate(app().await, "/admin", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login/admin");
    // a valid session for another role: mirrors stay put
    assert!(cleared_mirrors(&response).is_empty());

    // the same token walks straight into the company job area
    let response = navigate(app().await, "/minhas-vagas", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_candidate_token_on_job_creation_redirects_to_profile() {
    let token = forge_token("candidato", Utc::now().timestamp() + 10);

    let response = navigate(app().await, "/vaga/create", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/perfil");
    assert!(cleared_mirrors(&response).is_empty());
}

#[tokio::test]
async fn test_expired_admin_token_redirects_and_clears_mirrors() {
    let token = forge_token("administrador", Utc::now().timestamp() - 10);

    let response = navigate(app().await, "/admin/x", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login/admin");

    let cleared = cleared_mirrors(&response);
    assert_eq!(cleared.len(), 2);
    assert!(cleared.iter().any(|c| c.starts_with("pcd_token=;")));
    assert!(cleared.iter().any(|c| c.starts_with("pcd_role=;")));
    assert!(cleared
        .iter()
        .all(|c| c.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT")));
}

#[tokio::test]
async fn test_malformed_token_on_protected_path_forces_edge_logout() {
    let response = navigate(app().await, "/minhas-vagas", Some("not.a-token")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
    assert_eq!(cleared_mirrors(&response).len(), 2);
}

#[tokio::test]
async fn test_admin_token_reaches_admin_area() {
    let token = forge_token("administrador", Utc::now().timestamp() + 3600);

    for path in ["/admin", "/admin/analitycs"] {
        let response = navigate(app().await, path, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::OK, "path {path}");
    }
}
