//! Application status constants and validation.

use crate::error::CoreError;

/// Initial status for a newly submitted application.
pub const STATUS_PENDING: &str = "pending";
/// The venue accepted the applicant for the gig.
pub const STATUS_APPROVED: &str = "approved";
/// The venue declined the applicant.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid application statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid application status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "Status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(validate_status("waitlisted").is_err());
        assert!(validate_status("").is_err());
    }
}
