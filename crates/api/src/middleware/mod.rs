//! Request gates composed around individual method routes.
//!
//! - [`permission::requires_auth`] -- Requires a bearer token carrying a permission.

pub mod permission;

pub use permission::requires_auth;
