//! The HTTP client
//!
//! The login endpoints answer `{ "message": { "user": {...}, "token": "..." } }`
//! with Portuguese field names on the user record; this client maps them
//! into [`Identity`] variants. Error payloads carry `message` either as a
//! string or nested one level deeper.

use pcdentro_auth::Role;
use pcdentro_session::{AdminIdentity, CandidateIdentity, CompanyIdentity, Identity};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Credentials accepted by the three login endpoints.
#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    senha: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginEnvelope<U> {
    message: LoginMessage<U>,
}

#[derive(Debug, Deserialize)]
struct LoginMessage<U> {
    user: U,
    token: String,
}

#[derive(Debug, Deserialize)]
struct CandidateWire {
    id: String,
    nome: String,
    email: String,
    cpf: String,
    telefone: String,
    data_nascimento: String,
    #[serde(default)]
    deficiencia: Option<String>,
    #[serde(default)]
    subtipo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompanyWire {
    id: String,
    nome_fantasia: String,
    razao_social: String,
    email: String,
    cnpj: String,
    telefone: String,
}

#[derive(Debug, Deserialize)]
struct AdminWire {
    id: String,
    nome: String,
    email: String,
}

/// What a successful login gives the caller: exactly the triple the session
/// context's `login` takes.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub identity: Identity,
    pub token: String,
    pub role: Role,
}

/// Client for the remote PCDentro REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST candidate credentials to `/login/candidato`.
    pub async fn login_candidate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, ApiError> {
        let (user, token): (CandidateWire, String) =
            self.login_request("login/candidato", email, password).await?;
        Ok(LoginOutcome {
            identity: map_candidate(user),
            token,
            role: Role::Candidate,
        })
    }

    /// POST employer credentials to `/login/contratante`.
    pub async fn login_company(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, ApiError> {
        let (user, token): (CompanyWire, String) = self
            .login_request("login/contratante", email, password)
            .await?;
        Ok(LoginOutcome {
            identity: map_company(user),
            token,
            role: Role::Company,
        })
    }

    /// POST administrator credentials to `/login/administrador`.
    pub async fn login_admin(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let (user, token): (AdminWire, String) = self
            .login_request("login/administrador", email, password)
            .await?;
        Ok(LoginOutcome {
            identity: map_admin(user),
            token,
            role: Role::Admin,
        })
    }

    /// GET a JSON resource, attaching `Authorization: Bearer` when a token
    /// is at hand.
    pub async fn get_authenticated<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut request = self.http.get(&url).header(ACCEPT, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status,
                message: format!("request to {path} failed"),
            });
        }

        Ok(response.json().await?)
    }

    async fn login_request<U: DeserializeOwned>(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<(U, String), ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, "logging in");

        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&Credentials {
                email,
                senha: password,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .map(rejection_message)
                .unwrap_or_else(|| "login rejected".to_string());
            tracing::debug!(%status, %message, "login rejected");
            return Err(ApiError::Rejected { status, message });
        }

        let envelope: LoginEnvelope<U> = response
            .json()
            .await
            .map_err(|_| ApiError::UnexpectedShape)?;
        Ok((envelope.message.user, envelope.message.token))
    }
}

// The error body carries `message` as a string, or nested one level
// (`{ message: { message: "..." } }`) on validation failures.
fn rejection_message(body: Value) -> String {
    match &body["message"] {
        Value::String(message) => message.clone(),
        Value::Object(inner) => match inner.get("message") {
            Some(Value::String(message)) => message.clone(),
            _ => "login rejected".to_string(),
        },
        _ => "login rejected".to_string(),
    }
}

fn map_candidate(wire: CandidateWire) -> Identity {
    Identity::Candidate(CandidateIdentity {
        id: wire.id,
        name: wire.nome,
        email: wire.email,
        cpf: wire.cpf,
        phone: wire.telefone,
        birth_date: wire.data_nascimento,
        disability: wire.deficiencia,
        subtype: wire.subtipo,
    })
}

fn map_company(wire: CompanyWire) -> Identity {
    Identity::Company(CompanyIdentity {
        id: wire.id,
        trade_name: wire.nome_fantasia,
        company_name: wire.razao_social,
        email: wire.email,
        cnpj: wire.cnpj,
        phone: wire.telefone,
    })
}

fn map_admin(wire: AdminWire) -> Identity {
    Identity::Admin(AdminIdentity {
        id: wire.id,
        name: wire.nome,
        email: wire.email,
    })
}
