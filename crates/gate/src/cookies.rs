//! Minimal cookie header handling
//!
//! The gate needs exactly two things from cookies: reading one value out of
//! a `Cookie` request header, and emitting a `Set-Cookie` line that expires
//! a mirror.

/// Extract a cookie's value from a `Cookie` header line.
pub(crate) fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// `Set-Cookie` line that expires a mirror immediately.
pub(crate) fn expired_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
}
