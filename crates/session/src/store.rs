//! Write-through session persistence
//!
//! One session, five entries: three durable (raw token, serialized
//! identity, role tag) plus the two request-visible mirrors. This store is
//! the only writer of all five.

use std::sync::Arc;

use chrono::{Duration, Utc};
use pcdentro_auth::Role;
use pcdentro_common::keys::{MIRROR_TTL_DAYS, ROLE_COOKIE, TOKEN_COOKIE};

use crate::error::SessionError;
use crate::identity::Identity;
use crate::mirror::MirrorJar;
use crate::session::Session;
use crate::storage::KeyValueStore;

/// Durable entry holding the raw token.
pub const TOKEN_KEY: &str = "@PCDentro:token";
/// Durable entry holding the serialized identity.
pub const USER_KEY: &str = "@PCDentro:user";
/// Durable entry holding the role tag.
pub const ROLE_KEY: &str = "@PCDentro:userType";

/// Owner of the persisted session and its request-visible mirrors.
pub struct SessionStore {
    durable: Arc<dyn KeyValueStore>,
    mirrors: Arc<dyn MirrorJar>,
}

impl SessionStore {
    pub fn new(durable: Arc<dyn KeyValueStore>, mirrors: Arc<dyn MirrorJar>) -> Self {
        Self { durable, mirrors }
    }

    /// Persist a session.
    ///
    /// The three durable writes must all land — their errors propagate. The
    /// two mirror writes are attempted afterwards and failures are
    /// swallowed: there may simply be no request context to write into.
    pub async fn persist(
        &self,
        identity: &Identity,
        token: &str,
        role: Role,
    ) -> Result<(), SessionError> {
        let serialized = serde_json::to_string(identity)?;

        self.durable.set(TOKEN_KEY, token).await?;
        self.durable.set(USER_KEY, &serialized).await?;
        self.durable.set(ROLE_KEY, role.as_tag()).await?;

        let expires_at = Utc::now() + Duration::days(MIRROR_TTL_DAYS);
        if let Err(e) = self.mirrors.set(TOKEN_COOKIE, token, expires_at) {
            tracing::debug!(error = %e, "token mirror write skipped");
        }
        if let Err(e) = self.mirrors.set(ROLE_COOKIE, role.as_tag(), expires_at) {
            tracing::debug!(error = %e, "role mirror write skipped");
        }

        Ok(())
    }

    /// Rebuild the session from the durable entries.
    ///
    /// The sole moment a stale session is reconstructed after a reload.
    /// Anything short of all three entries with a well-formed identity whose
    /// variant agrees with the stored role tag degrades to logged out —
    /// this never errors.
    pub async fn restore(&self) -> Session {
        let (token, user, role_tag) = match (
            self.read_entry(TOKEN_KEY).await,
            self.read_entry(USER_KEY).await,
            self.read_entry(ROLE_KEY).await,
        ) {
            (Some(token), Some(user), Some(role_tag)) => (token, user, role_tag),
            _ => return Session::default(),
        };

        let identity: Identity = match serde_json::from_str(&user) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "stored identity is corrupt, discarding session");
                return Session::default();
            }
        };

        let Some(role) = Role::from_tag(&role_tag) else {
            tracing::warn!(role_tag = %role_tag, "stored role tag is unrecognized, discarding session");
            return Session::default();
        };
        if identity.role() != role {
            tracing::warn!(
                stored = %role,
                implied = %identity.role(),
                "stored role tag disagrees with identity variant, discarding session"
            );
            return Session::default();
        }

        Session::authenticated(identity, token, role)
    }

    /// Drop the durable entries and expire both mirrors.
    ///
    /// Safe to call with no session active.
    pub async fn clear(&self) -> Result<(), SessionError> {
        self.durable.remove(TOKEN_KEY).await?;
        self.durable.remove(USER_KEY).await?;
        self.durable.remove(ROLE_KEY).await?;

        if let Err(e) = self.mirrors.expire(TOKEN_COOKIE) {
            tracing::debug!(error = %e, "token mirror expiry skipped");
        }
        if let Err(e) = self.mirrors.expire(ROLE_COOKIE) {
            tracing::debug!(error = %e, "role mirror expiry skipped");
        }

        Ok(())
    }

    async fn read_entry(&self, key: &str) -> Option<String> {
        match self.durable.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, key, "durable read failed, treating as absent");
                None
            }
        }
    }
}
