use axum::http::StatusCode;

/// Why a request was refused by the permission gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header at all.
    #[error("Authorization header is expected")]
    Missing,

    /// Header present but not `Bearer <token>`, or the token failed
    /// signature, issuer, audience or format checks.
    #[error("{0}")]
    Malformed(String),

    #[error("Token expired")]
    Expired,

    /// Valid token without the required permission.
    #[error("Permission not granted: {0}")]
    InsufficientScope(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InsufficientScope(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthError::Missing => "AUTH_HEADER_MISSING",
            AuthError::Malformed(_) => "INVALID_TOKEN",
            AuthError::Expired => "TOKEN_EXPIRED",
            AuthError::InsufficientScope(_) => "INSUFFICIENT_SCOPE",
        }
    }
}
