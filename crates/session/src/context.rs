//! Process-wide access point for the current identity
//!
//! Constructed once at application boot and passed around explicitly (an
//! `Arc` in practice); there is no module-level global. Lives for the
//! process's lifetime, never torn down explicitly.

use pcdentro_auth::Role;
use tokio::sync::RwLock;

use crate::error::SessionError;
use crate::identity::Identity;
use crate::session::Session;
use crate::store::SessionStore;

#[derive(Debug)]
struct ContextState {
    session: Session,
    loading: bool,
}

/// The live in-memory session, plus the lifecycle that keeps it and the
/// persisted copy moving together.
pub struct SessionContext {
    store: SessionStore,
    state: RwLock<ContextState>,
}

impl SessionContext {
    /// Build an uninitialized context. Callers run [`initialize`] once at
    /// boot; until then the context reports loading.
    ///
    /// [`initialize`]: SessionContext::initialize
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            state: RwLock::new(ContextState {
                session: Session::default(),
                loading: true,
            }),
        }
    }

    /// Restore any persisted session into memory.
    ///
    /// While this is pending the context is loading, which means "identity
    /// unknown" — redirecting a user during this window is a defect, not a
    /// feature.
    pub async fn initialize(&self) {
        let restored = self.store.restore().await;
        let mut state = self.state.write().await;
        state.session = restored;
        state.loading = false;
    }

    /// Establish a new session.
    ///
    /// The in-memory update is applied before the durable write is awaited,
    /// so the UI sees the new identity immediately; both have settled when
    /// this returns, and only then may the caller navigate.
    pub async fn login(
        &self,
        identity: Identity,
        token: String,
        role: Role,
    ) -> Result<(), SessionError> {
        if identity.role() != role {
            return Err(SessionError::RoleMismatch {
                identity: identity.role(),
                role,
            });
        }

        {
            let mut state = self.state.write().await;
            state.session = Session::authenticated(identity.clone(), token.clone(), role);
            state.loading = false;
        }

        self.store.persist(&identity, &token, role).await
    }

    /// Tear the session down in memory and in the store.
    ///
    /// Switching accounts is always logout-then-login; there is no in-place
    /// identity swap.
    pub async fn logout(&self) -> Result<(), SessionError> {
        {
            let mut state = self.state.write().await;
            state.session = Session::default();
            state.loading = false;
        }

        self.store.clear().await
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Derived from the session, never stored independently.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.session.is_authenticated()
    }

    /// Snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.state.read().await.session.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.state
            .read()
            .await
            .session
            .token()
            .map(str::to_string)
    }

    pub async fn role(&self) -> Option<Role> {
        self.state.read().await.session.role()
    }
}
