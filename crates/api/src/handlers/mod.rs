//! Request handlers, one module per resource.

pub mod applications;
pub mod contracts;
pub mod gigs;
pub mod messages;
pub mod reports;
pub mod schema;
pub mod seed;
pub mod talent;
pub mod venues;

use nightshift_core::types::Id;
use uuid::Uuid;

use crate::error::AppError;

/// Parse a caller-supplied id string, naming the field on failure.
///
/// Malformed ids fail with a 400 before any lookup runs.
pub(crate) fn parse_id(value: &str, field: &str) -> Result<Id, AppError> {
    Uuid::parse_str(value).map_err(|_| AppError::BadRequest(format!("Invalid {field}")))
}
