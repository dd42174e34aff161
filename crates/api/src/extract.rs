//! Request extractors whose rejections use the [`AppError`] envelope.
//!
//! axum's own `Json`, `Path` and `Query` reject with plain-text bodies;
//! these wrap them so a malformed body, id or query string yields the same
//! JSON failure shape as every other error.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

/// JSON request body. Missing body, bad syntax, a missing required field or
/// a wrong type all become 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. A non-numeric id becomes 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string. A repeated or mistyped parameter becomes 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
