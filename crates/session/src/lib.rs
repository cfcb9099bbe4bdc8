//! Session state for the PCDentro client
//!
//! Three layers, each with a single owner:
//! - the durable key-value store holds the persisted session across reloads
//!   (owned by [`SessionStore`], together with the two request-visible
//!   mirrors the route gate reads),
//! - [`SessionContext`] holds the live in-memory session the UI reads,
//! - login/logout mutate both together; nothing else writes either.

mod context;
mod error;
mod identity;
mod mirror;
mod session;
mod storage;
mod store;

pub use context::SessionContext;
pub use error::{MirrorError, SessionError, StorageError};
pub use identity::{AdminIdentity, CandidateIdentity, CompanyIdentity, Identity};
pub use mirror::{MemoryMirror, MirrorJar, NoMirror};
pub use session::Session;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{SessionStore, ROLE_KEY, TOKEN_KEY, USER_KEY};
