//! Shared pieces of the PCDentro client
//!
//! This crate carries what more than one crate needs:
//! - Environment-based configuration
//! - The fixed external names (storage mirror cookies and their lifetime)
//!   that the session store writes and the route gate reads

pub mod config;
pub mod keys;

pub use config::Config;
