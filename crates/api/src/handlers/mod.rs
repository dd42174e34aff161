//! HTTP handlers, one module per resource.
//!
//! Each handler decodes its input, makes one repository call (or one
//! transaction) and wraps the result in the success envelope.

pub mod artist;
pub mod category;
pub mod drink;
pub mod ingredient;
pub mod question;
pub mod quiz;
pub mod recipe;
pub mod show;
pub mod todo;
pub mod venue;
