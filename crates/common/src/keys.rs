//! Fixed names of the request-visible mirrors
//!
//! The session store writes these two cookies and the route gate reads
//! them; neither side may rename them independently, so the names live
//! here instead of in either crate.

/// Cookie mirroring the raw session token.
pub const TOKEN_COOKIE: &str = "pcd_token";

/// Cookie mirroring the role tag (`candidate` | `company` | `admin`).
pub const ROLE_COOKIE: &str = "pcd_role";

/// Absolute lifetime of both mirrors, counted from the persist call.
pub const MIRROR_TTL_DAYS: i64 = 7;
