//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` params struct for list filters where the entity has any

pub mod application;
pub mod contract;
pub mod gig;
pub mod message;
pub mod report;
pub mod talent;
pub mod venue;
