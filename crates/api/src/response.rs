//! Shared response envelope for API handlers.
//!
//! Every successful response is `{ "success": true, ...payload }`. Payload
//! structs name their own keys, so each family keeps the field names its
//! clients expect (`todos`, `areas`, `drinks`, `result`, ...).

use axum::Json;
use serde::Serialize;

/// Standard `{ "success": true, ... }` response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

/// Wrap `payload` in a success envelope.
///
/// ```ignore
/// Ok(success(TodoBody { todo }))
/// ```
pub fn success<T: Serialize>(payload: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        payload,
    })
}

/// Handler return type for enveloped JSON responses.
pub type Reply<T> = crate::error::AppResult<Json<Envelope<T>>>;
