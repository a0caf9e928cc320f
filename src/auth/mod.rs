//! Registration, login and session gating.
//!
//! Passwords are stored only as salted Argon2 hashes. A successful register
//! or login opens a server-side session and hands back a signed token; the
//! presentation layer presents that token to
//! [`services::AuthService::require_session`] before any mutating request.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
