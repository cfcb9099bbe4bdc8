//! The per-navigation gate decision
//!
//! A pure function of the path, the token mirror value, and the clock.
//! States: no token, invalid-or-expired, role mismatch, allowed.

use chrono::Utc;
use pcdentro_auth::{decode, is_expired_at, Role};

// Protected prefixes, fixed at startup. Everything else is public from the
// gate's point of view; pages enforce their own checks via the session
// context if they want any.
const ADMIN_AREA: &str = "/admin";
const COMPANY_JOBS_AREA: &str = "/minhas-vagas";
const JOB_CREATE_AREA: &str = "/vaga/create";

/// Login entry point for the admin area.
pub const ADMIN_LOGIN: &str = "/login/admin";
/// General login entry point.
pub const LOGIN: &str = "/login";
/// Authenticated landing page, the fallback for company-area mismatches.
pub const PROFILE: &str = "/perfil";

/// Outcome of gating one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Request proceeds unmodified.
    Next,
    /// Request is answered with a redirect. `clear_mirrors` forces a logout
    /// at the edge: both mirrors are expired, while the durable store stays
    /// stale until the next client-side load notices.
    Redirect {
        location: &'static str,
        clear_mirrors: bool,
    },
}

fn is_protected(path: &str) -> bool {
    path.starts_with(ADMIN_AREA)
        || path.starts_with(COMPANY_JOBS_AREA)
        || path.starts_with(JOB_CREATE_AREA)
}

fn login_entry(path: &str) -> &'static str {
    if path.starts_with(ADMIN_AREA) {
        ADMIN_LOGIN
    } else {
        LOGIN
    }
}

/// Decide a navigation against the token mirror, at `now_unix`.
pub fn evaluate_at(path: &str, token: Option<&str>, now_unix: i64) -> GateDecision {
    if !is_protected(path) {
        return GateDecision::Next;
    }

    let Some(token) = token else {
        return GateDecision::Redirect {
            location: login_entry(path),
            clear_mirrors: false,
        };
    };

    let claims = decode(token);
    if is_expired_at(claims.as_ref(), now_unix) {
        // malformed and expired tokens are indistinguishable here, and both
        // force a logout at the edge
        return GateDecision::Redirect {
            location: login_entry(path),
            clear_mirrors: true,
        };
    }

    let role = claims.as_ref().and_then(|c| c.claimed_role());

    if path.starts_with(ADMIN_AREA) && role != Some(Role::Admin) {
        return GateDecision::Redirect {
            location: ADMIN_LOGIN,
            clear_mirrors: false,
        };
    }

    if (path.starts_with(COMPANY_JOBS_AREA) || path.starts_with(JOB_CREATE_AREA))
        && role != Some(Role::Company)
    {
        // the visitor may hold a perfectly good session for another role, so
        // the mirrors stay put
        return GateDecision::Redirect {
            location: PROFILE,
            clear_mirrors: false,
        };
    }

    GateDecision::Next
}

/// [`evaluate_at`] against the current clock.
pub fn evaluate(path: &str, token: Option<&str>) -> GateDecision {
    evaluate_at(path, token, Utc::now().timestamp())
}
