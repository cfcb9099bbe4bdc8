//! Decoded token claims

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::role::Role;

/// Claims decoded from a session token.
///
/// Untrusted: produced by [`crate::decode`] without any signature check,
/// and produced fresh on every call — never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject identifier. Shape varies by backend, so it is kept raw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Raw role claim (`"administrador"` | `"empresa"` | `"candidato"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Expiry, unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Fields this layer does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenClaims {
    /// The recognized role named by the `role` claim, if any.
    pub fn claimed_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::from_claim)
    }
}
