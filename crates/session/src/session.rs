//! The session value

use pcdentro_auth::Role;

use crate::identity::Identity;

/// Client-held session state.
///
/// `identity` and `token` are both present or both absent — login and
/// logout are atomic, so construction goes through
/// [`Session::authenticated`] or [`Session::default`] only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
    token: Option<String>,
    role: Option<Role>,
}

impl Session {
    /// A fully-populated session.
    pub fn authenticated(identity: Identity, token: String, role: Role) -> Session {
        Session {
            identity: Some(identity),
            token: Some(token),
            role: Some(role),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Derived, never stored: identity and token both present.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some() && self.token.is_some()
    }
}
