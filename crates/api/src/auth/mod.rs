//! Bearer token verification.
//!
//! - [`jwt`] -- verifier configuration, claims and signature/claim checks.
//! - [`error`] -- the failure kinds a request can hit before its handler runs.

pub mod error;
pub mod jwt;

pub use error::AuthError;
pub use jwt::{TokenClaims, TokenVerifier};
