//! Account role vocabulary

use serde::{Deserialize, Serialize};

/// Account role, discriminating the three identity variants.
///
/// Two string vocabularies exist for historical reasons and both are kept
/// explicit: tokens carry Portuguese claim strings, while storage and the
/// role mirror carry English tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Company,
    Admin,
}

impl Role {
    /// Parse the raw `role` claim carried inside tokens.
    ///
    /// Anything other than the three known strings is "no recognized role".
    pub fn from_claim(raw: &str) -> Option<Role> {
        match raw {
            "candidato" => Some(Role::Candidate),
            "empresa" => Some(Role::Company),
            "administrador" => Some(Role::Admin),
            _ => None,
        }
    }

    /// The claim string the remote API puts in tokens for this role.
    pub fn as_claim(&self) -> &'static str {
        match self {
            Role::Candidate => "candidato",
            Role::Company => "empresa",
            Role::Admin => "administrador",
        }
    }

    /// Parse the tag persisted in storage and the role mirror.
    pub fn from_tag(raw: &str) -> Option<Role> {
        match raw {
            "candidate" => Some(Role::Candidate),
            "company" => Some(Role::Company),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// The tag persisted in storage and the role mirror.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Company => "company",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
