//! Unverified token payload decoding and expiry computation
//!
//! Splits the compact three-segment token form, base64url-decodes the
//! middle segment and parses it as a JSON object. The signature segment is
//! never checked — a documented trust boundary, not an oversight.

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, Engine as _};
use chrono::Utc;

use crate::claims::TokenClaims;

// Tokens arrive with or without payload padding depending on the issuer.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a token's claims without verifying its signature.
///
/// Returns `None` for anything that is not a three-segment token whose
/// middle segment is a base64url JSON object. No failure here is louder
/// than that: callers treat `None` exactly like an expired token.
pub fn decode(token: &str) -> Option<TokenClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload = match URL_SAFE_LENIENT.decode(parts[1]) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "token payload is not valid base64url");
            return None;
        }
    };

    match serde_json::from_slice::<TokenClaims>(&payload) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!(error = %e, "token payload is not a JSON object");
            None
        }
    }
}

/// Whether the claims should be treated as expired, against the current clock.
pub fn is_expired(claims: Option<&TokenClaims>) -> bool {
    is_expired_at(claims, Utc::now().timestamp())
}

/// Whether the claims should be treated as expired at `now_unix`.
///
/// Missing claims and a missing `exp` both count as expired: callers cannot
/// distinguish "no claims" from "stale claims", and should not.
pub fn is_expired_at(claims: Option<&TokenClaims>, now_unix: i64) -> bool {
    match claims.and_then(|c| c.exp) {
        Some(exp) => exp < now_unix,
        None => true,
    }
}
