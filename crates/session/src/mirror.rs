//! Request-visible mirrors of the token and role
//!
//! The route gate runs in a context that cannot reach the durable store or
//! the in-memory session; these two small entries are everything it gets to
//! see. Only the session store writes them.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

use crate::error::MirrorError;

/// Writer for the request-visible mirror entries.
///
/// Writes are best-effort from the session store's point of view: a jar may
/// legitimately have no request context to write into.
pub trait MirrorJar: Send + Sync {
    /// Write a mirror entry with an absolute expiry.
    fn set(&self, name: &str, value: &str, expires_at: DateTime<Utc>) -> Result<(), MirrorError>;

    /// Expire a mirror entry immediately.
    fn expire(&self, name: &str) -> Result<(), MirrorError>;
}

/// In-process jar modeling a browser cookie store.
///
/// Entries past their expiry read as absent, the way a browser would treat
/// them; [`MemoryMirror::cookie_header`] renders the live entries as a
/// `Cookie` request header line for handing to the gate.
#[derive(Debug, Default)]
pub struct MemoryMirror {
    entries: Mutex<BTreeMap<String, (String, DateTime<Utc>)>>,
}

impl MemoryMirror {
    /// Read a live (unexpired) entry.
    pub fn get(&self, name: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(name)
            .filter(|(_, expires_at)| *expires_at > Utc::now())
            .map(|(value, _)| value.clone())
    }

    /// Render the live entries as a `Cookie` request header value.
    pub fn cookie_header(&self) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now();
        let live: Vec<String> = entries
            .iter()
            .filter(|(_, (_, expires_at))| *expires_at > now)
            .map(|(name, (value, _))| format!("{name}={value}"))
            .collect();
        if live.is_empty() {
            None
        } else {
            Some(live.join("; "))
        }
    }
}

impl MirrorJar for MemoryMirror {
    fn set(&self, name: &str, value: &str, expires_at: DateTime<Utc>) -> Result<(), MirrorError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(name.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    fn expire(&self, name: &str) -> Result<(), MirrorError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((_, expires_at)) = entries.get_mut(name) {
            *expires_at = DateTime::<Utc>::UNIX_EPOCH;
        }
        Ok(())
    }
}

/// Jar for contexts with no request attached; every write reports failure.
#[derive(Debug, Default)]
pub struct NoMirror;

impl MirrorJar for NoMirror {
    fn set(&self, _name: &str, _value: &str, _expires_at: DateTime<Utc>) -> Result<(), MirrorError> {
        Err(MirrorError::Unavailable)
    }

    fn expire(&self, _name: &str) -> Result<(), MirrorError> {
        Err(MirrorError::Unavailable)
    }
}
