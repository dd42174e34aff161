//! Permission gate for bearer-token protected routes.
//!
//! ```ignore
//! let route = get(drinks::list)
//!     .merge(requires_auth(&state, POST_DRINKS, post(drinks::create)));
//! ```
//!
//! The wrapped handlers can read the verified claims with
//! `Extension<TokenClaims>`.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::MethodRouter;
use quintet_core::permissions::grants;

use crate::auth::{AuthError, TokenClaims};
use crate::error::AppError;
use crate::state::AppState;

/// Wrap `route` so every method on it requires a token granting `permission`.
///
/// Only the methods already registered on `route` are gated; merge public
/// methods in afterwards to mix both on one path.
pub fn requires_auth(
    state: &AppState,
    permission: &'static str,
    route: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(
        state.clone(),
        move |State(state): State<AppState>, req: Request, next: Next| {
            authorize(state, permission, req, next)
        },
    ))
}

async fn authorize(
    state: AppState,
    permission: &'static str,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())?;
    let claims = state.verifier.verify(token)?;

    if !grants(&claims.permissions, permission) {
        tracing::debug!(sub = %claims.sub, permission, "Token lacks required permission");
        return Err(AuthError::InsufficientScope(permission.to_string()).into());
    }

    req.extensions_mut().insert::<TokenClaims>(claims);
    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::Missing)?
        .to_str()
        .map_err(|_| AuthError::Malformed("Authorization header is not valid text".into()))?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        (Some(scheme), _, _) if !scheme.eq_ignore_ascii_case("bearer") => Err(
            AuthError::Malformed("Authorization header must start with \"Bearer\"".into()),
        ),
        (Some(_), None, _) => Err(AuthError::Malformed("Token not found".into())),
        _ => Err(AuthError::Malformed(
            "Authorization header must be bearer token".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn accepts_bearer_scheme_case_insensitively() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
        assert_eq!(bearer_token(&headers("bearer abc")), Ok("abc"));
    }

    #[test]
    fn missing_header_is_missing() {
        assert_eq!(bearer_token(&HeaderMap::new()), Err(AuthError::Missing));
    }

    #[test]
    fn wrong_scheme_is_malformed() {
        assert_matches!(
            bearer_token(&headers("Basic dXNlcjpwYXNz")),
            Err(AuthError::Malformed(msg)) if msg.contains("Bearer")
        );
    }

    #[test]
    fn scheme_without_token_is_malformed() {
        assert_matches!(
            bearer_token(&headers("Bearer")),
            Err(AuthError::Malformed(msg)) if msg == "Token not found"
        );
    }

    #[test]
    fn extra_segments_are_malformed() {
        assert_matches!(
            bearer_token(&headers("Bearer a b")),
            Err(AuthError::Malformed(_))
        );
    }
}
