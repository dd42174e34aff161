//! Presence checks for request payloads.
//!
//! Create DTOs derive `validator::Validate`; this module turns the resulting
//! error map into a single readable message and covers the "at least one
//! field" rule that partial updates share.

use validator::ValidationErrors;

use crate::error::CoreError;

/// Flatten `validator` errors into `"field: reason; field: reason"`.
///
/// Fields are sorted so the message is stable across runs.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let reason = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {reason}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Reject an update payload in which none of the named fields is present.
///
/// `fields` pairs each accepted field name with whether the payload set it.
pub fn require_any_field(fields: &[(&str, bool)]) -> Result<(), CoreError> {
    if fields.iter().any(|(_, present)| *present) {
        return Ok(());
    }
    let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    Err(CoreError::Validation(format!(
        "at least one of [{}] must be provided",
        names.join(", ")
    )))
}
