//! Claims parsing for PCDentro session tokens
//!
//! Decodes a token's payload segment and computes expiry. The signature is
//! **never** verified here: this is a claims-parsing component, not a
//! trust-establishing one. Claims are informational, used for routing and
//! display; real authorization is enforced by the remote API.

mod claims;
mod codec;
mod role;

pub use claims::TokenClaims;
pub use codec::{decode, is_expired, is_expired_at};
pub use role::Role;
