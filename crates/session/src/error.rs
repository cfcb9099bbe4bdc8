//! Session errors

use pcdentro_auth::Role;
use thiserror::Error;

/// Errors from the durable key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors from the request-visible mirror jar.
///
/// Always swallowed by the session store: mirror writes are best-effort.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("no request context available for mirror writes")]
    Unavailable,
}

/// Session lifecycle errors surfaced to the calling UI layer.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("identity serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("identity variant `{identity}` does not match login role `{role}`")]
    RoleMismatch { identity: Role, role: Role },
}
