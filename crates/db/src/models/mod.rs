//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//! - Joined or projected views where a listing needs them

pub mod artist;
pub mod category;
pub mod drink;
pub mod question;
pub mod recipe;
pub mod show;
pub mod todo;
pub mod venue;
