//! Client for the remote PCDentro REST API
//!
//! Only the login endpoints and the bearer-token attachment live here; the
//! CRUD surface is plumbing that callers build on top of
//! [`ApiClient::get_authenticated`]. Login failures are the one place this
//! subsystem lets errors cross to the calling UI layer.

mod client;
mod error;

pub use client::{ApiClient, LoginOutcome};
pub use error::ApiError;
