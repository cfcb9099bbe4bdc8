//! Session lifecycle integration tests
//!
//! Exercises the full login/reload/logout loop across the durable store,
//! the mirrors, and the gate — the same state the client and the edge see.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use pcdentro_auth::Role;
use pcdentro_common::keys::{ROLE_COOKIE, TOKEN_COOKIE};
use pcdentro_gate::{evaluate, GateDecision};
use pcdentro_session::{
    CandidateIdentity, CompanyIdentity, Identity, MemoryMirror, MemoryStore, SessionContext,
    SessionStore,
};
use serde_json::json;

fn forge_token(role: &str, exp: i64) -> String {
    let claims = json!({ "id": "42", "role": role, "exp": exp });
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"integration-secret"),
    )
    .expect("token encoding")
}

fn candidate() -> Identity {
    Identity::Candidate(CandidateIdentity {
        id: "305079".to_string(),
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        cpf: "000.000.000-00".to_string(),
        phone: "(11) 90000-0000".to_string(),
        birth_date: "1990-01-01".to_string(),
        disability: Some("DMOTO-305079".to_string()),
        subtype: None,
    })
}

fn company() -> Identity {
    Identity::Company(CompanyIdentity {
        id: "9".to_string(),
        trade_name: "Acme".to_string(),
        company_name: "Acme LTDA".to_string(),
        email: "rh@acme.com".to_string(),
        cnpj: "00.000.000/0001-00".to_string(),
        phone: "(11) 3000-0000".to_string(),
    })
}

#[tokio::test]
async fn test_login_then_reload_reconstructs_the_same_identity() {
    let durable = Arc::new(MemoryStore::default());
    let mirrors = Arc::new(MemoryMirror::default());

    let context = SessionContext::new(SessionStore::new(durable.clone(), mirrors.clone()));
    context.initialize().await;

    let token = forge_token("candidato", Utc::now().timestamp() + 3600);
    context
        .login(candidate(), token.clone(), Role::Candidate)
        .await
        .unwrap();
    assert!(context.is_authenticated().await);

    // both mirrors hold the minimal subset with their 7-day lifetime
    assert_eq!(mirrors.get(TOKEN_COOKIE), Some(token.clone()));
    assert_eq!(mirrors.get(ROLE_COOKIE), Some("candidate".to_string()));

    // simulate a full page reload: a fresh context over the same durable store
    let reloaded = SessionContext::new(SessionStore::new(
        durable,
        Arc::new(MemoryMirror::default()),
    ));
    assert!(reloaded.is_loading().await);
    reloaded.initialize().await;

    assert!(reloaded.is_authenticated().await);
    let session = reloaded.session().await;
    assert_eq!(session.identity(), Some(&candidate()));
    assert_eq!(session.token(), Some(token.as_str()));
    assert_eq!(session.role(), Some(Role::Candidate));
}

#[tokio::test]
async fn test_logout_empties_every_copy() {
    let durable = Arc::new(MemoryStore::default());
    let mirrors = Arc::new(MemoryMirror::default());

    let context = SessionContext::new(SessionStore::new(durable.clone(), mirrors.clone()));
    context.initialize().await;

    let token = forge_token("empresa", Utc::now().timestamp() + 3600);
    context.login(company(), token, Role::Company).await.unwrap();
    context.logout().await.unwrap();

    assert!(!context.is_authenticated().await);
    assert_eq!(mirrors.get(TOKEN_COOKIE), None);
    assert_eq!(mirrors.get(ROLE_COOKIE), None);

    let reloaded = SessionContext::new(SessionStore::new(
        durable,
        Arc::new(MemoryMirror::default()),
    ));
    reloaded.initialize().await;
    assert!(!reloaded.is_authenticated().await);
    assert_eq!(reloaded.session().await.identity(), None);
}

#[tokio::test]
async fn test_persisted_mirror_satisfies_the_gate() {
    let mirrors = Arc::new(MemoryMirror::default());
    let context = SessionContext::new(SessionStore::new(
        Arc::new(MemoryStore::default()),
        mirrors.clone(),
    ));
    context.initialize().await;

    let token = forge_token("empresa", Utc::now().timestamp() + 3600);
    context.login(company(), token, Role::Company).await.unwrap();

    // the gate reads only the mirror, never the context
    let mirrored = mirrors.get(TOKEN_COOKIE);
    assert_eq!(
        evaluate("/minhas-vagas", mirrored.as_deref()),
        GateDecision::Next
    );
    assert_eq!(
        evaluate("/admin", mirrored.as_deref()),
        GateDecision::Redirect {
            location: "/login/admin",
            clear_mirrors: false,
        }
    );

    // after logout the mirror reads as absent and the gate bounces
    context.logout().await.unwrap();
    assert_eq!(mirrors.get(TOKEN_COOKIE), None);
    assert_eq!(
        evaluate("/minhas-vagas", None),
        GateDecision::Redirect {
            location: "/login",
            clear_mirrors: false,
        }
    );
}

#[tokio::test]
async fn test_relogin_follows_logout_then_login() {
    let durable = Arc::new(MemoryStore::default());
    let context = SessionContext::new(SessionStore::new(
        durable.clone(),
        Arc::new(MemoryMirror::default()),
    ));
    context.initialize().await;

    let candidate_token = forge_token("candidato", Utc::now().timestamp() + 3600);
    context
        .login(candidate(), candidate_token, Role::Candidate)
        .await
        .unwrap();

    // switching account type: logout first, then login as the other role
    context.logout().await.unwrap();
    let company_token = forge_token("empresa", Utc::now().timestamp() + 3600);
    context
        .login(company(), company_token, Role::Company)
        .await
        .unwrap();

    let session = context.session().await;
    assert_eq!(session.role(), Some(Role::Company));
    assert_eq!(session.identity(), Some(&company()));
}
