//! Route gating for PCDentro
//!
//! Runs once per incoming navigation, before any page code, and decides
//! allow / redirect from the request-visible token mirror alone. It cannot
//! see the durable store or the in-memory session — a deliberate isolation
//! boundary. Claims are read without signature verification, so this gate
//! is routing hygiene, not an authorization authority.

mod cookies;
mod decision;
mod middleware;

pub use decision::{evaluate, evaluate_at, GateDecision, ADMIN_LOGIN, LOGIN, PROFILE};
pub use middleware::route_gate;
