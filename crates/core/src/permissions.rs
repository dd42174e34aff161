//! Permission names checked by the auth gateway.
//!
//! These must match the `permissions` claim issued by the identity provider.

pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const POST_DRINKS: &str = "post:drinks";
pub const PATCH_DRINKS: &str = "patch:drinks";
pub const DELETE_DRINKS: &str = "delete:drinks";

pub const READ_RECIPES: &str = "read:recipes";
pub const CREATE_RECIPES: &str = "create:recipes";
pub const UPDATE_RECIPES: &str = "update:recipes";
pub const DELETE_RECIPES: &str = "delete:recipes";

/// Whether `granted` contains `required` verbatim. Scopes are case-sensitive.
pub fn grants<S: AsRef<str>>(granted: &[S], required: &str) -> bool {
    granted.iter().any(|p| p.as_ref() == required)
}
