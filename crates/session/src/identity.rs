//! Identity variants

use pcdentro_auth::Role;
use serde::{Deserialize, Serialize};

/// The authenticated subject, exactly one variant active at a time.
///
/// Serialized with an explicit `kind` tag whose values match the role tags
/// (`candidate` | `company` | `admin`), so a persisted identity and the
/// persisted role tag can be cross-checked on restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Identity {
    Candidate(CandidateIdentity),
    Company(CompanyIdentity),
    Admin(AdminIdentity),
}

/// A candidate account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub birth_date: String,
    /// Disability category reference, used to filter job listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disability: Option<String>,
    /// Legacy sub-category field; kept so older persisted sessions still load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

/// An employer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub id: String,
    pub trade_name: String,
    pub company_name: String,
    pub email: String,
    pub cnpj: String,
    pub phone: String,
}

/// A platform administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Role implied by the active variant.
    pub fn role(&self) -> Role {
        match self {
            Identity::Candidate(_) => Role::Candidate,
            Identity::Company(_) => Role::Company,
            Identity::Admin(_) => Role::Admin,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Identity::Candidate(c) => &c.id,
            Identity::Company(c) => &c.id,
            Identity::Admin(a) => &a.id,
        }
    }
}
