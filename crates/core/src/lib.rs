//! Domain types and pure helpers shared by the persistence and HTTP layers.
//!
//! Nothing in here touches the database or the network.

pub mod drink;
pub mod error;
pub mod pagination;
pub mod permissions;
pub mod schedule;
pub mod search;
pub mod types;
pub mod validation;
