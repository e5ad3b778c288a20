//! Contract lifecycle: status constants, transition guards, and the
//! agreement-text template.
//!
//! The lifecycle is `pending -> active -> completed`. A contract becomes
//! active only once both parties have signed, check-in requires an active
//! contract, and check-out requires a recorded check-in. Out-of-order
//! requests are rejected as conflicts.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status: created, awaiting signatures.
pub const STATUS_PENDING: &str = "pending";
/// Both parties have signed; the shift can be worked.
pub const STATUS_ACTIVE: &str = "active";
/// The shift was worked and checked out.
pub const STATUS_COMPLETED: &str = "completed";

/// All valid contract statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_ACTIVE, STATUS_COMPLETED];

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid contract status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

// ---------------------------------------------------------------------------
// Signing parties
// ---------------------------------------------------------------------------

pub const PARTY_TALENT: &str = "talent";
pub const PARTY_CLIENT: &str = "client";

/// A signing party on a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Talent,
    Client,
}

impl Party {
    pub fn as_str(self) -> &'static str {
        match self {
            Party::Talent => PARTY_TALENT,
            Party::Client => PARTY_CLIENT,
        }
    }
}

/// Parse a caller-supplied actor string.
pub fn parse_party(value: &str) -> Result<Party, CoreError> {
    match value {
        PARTY_TALENT => Ok(Party::Talent),
        PARTY_CLIENT => Ok(Party::Client),
        other => Err(CoreError::Validation(format!(
            "Invalid actor '{other}'. Must be '{PARTY_TALENT}' or '{PARTY_CLIENT}'"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Transition guards
// ---------------------------------------------------------------------------

/// Validate that `party` may sign a contract in `status`.
///
/// Signing is allowed until the contract completes, once per party.
pub fn validate_sign(status: &str, party: Party, already_signed: bool) -> Result<(), CoreError> {
    if status == STATUS_COMPLETED {
        return Err(CoreError::Conflict(
            "Completed contracts can no longer be signed".into(),
        ));
    }
    if already_signed {
        return Err(CoreError::Conflict(format!(
            "The {} has already signed this contract",
            party.as_str()
        )));
    }
    Ok(())
}

/// Status after a signature lands: active once both parties have signed,
/// pending otherwise.
pub fn status_after_sign(talent_signed: bool, client_signed: bool) -> &'static str {
    if talent_signed && client_signed {
        STATUS_ACTIVE
    } else {
        STATUS_PENDING
    }
}

/// Validate a check-in: the contract must be active (both signatures in)
/// and not already checked in.
pub fn validate_check_in(status: &str, already_checked_in: bool) -> Result<(), CoreError> {
    if status != STATUS_ACTIVE {
        return Err(CoreError::Conflict(format!(
            "Cannot check in while contract is '{status}'; both parties must sign first"
        )));
    }
    if already_checked_in {
        return Err(CoreError::Conflict("Shift is already checked in".into()));
    }
    Ok(())
}

/// Validate a check-out: the contract must be active with a recorded
/// check-in, and not already checked out.
pub fn validate_check_out(
    status: &str,
    checked_in: bool,
    already_checked_out: bool,
) -> Result<(), CoreError> {
    if status != STATUS_ACTIVE {
        return Err(CoreError::Conflict(format!(
            "Cannot check out while contract is '{status}'"
        )));
    }
    if !checked_in {
        return Err(CoreError::Conflict(
            "Cannot check out before checking in".into(),
        ));
    }
    if already_checked_out {
        return Err(CoreError::Conflict("Shift is already checked out".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Agreement text template
// ---------------------------------------------------------------------------

/// Terms substituted into the templated agreement text.
///
/// Every field is optional except the talent id; missing values fall back
/// to literal placeholders so a partially specified contract still renders.
#[derive(Debug, Default)]
pub struct ContractTerms<'a> {
    pub client_name: Option<&'a str>,
    pub venue: Option<&'a str>,
    pub city: Option<&'a str>,
    pub talent_id: &'a str,
    pub role: Option<&'a str>,
    pub date: Option<&'a str>,
    pub start_time: Option<&'a str>,
    pub end_time: Option<&'a str>,
    pub base_pay: Option<&'a str>,
    pub gratuity: Option<&'a str>,
}

/// Render the standard work agreement from the given terms.
pub fn render_contract_text(terms: &ContractTerms<'_>) -> String {
    let client = terms.client_name.unwrap_or("Client");
    let venue = terms.venue.unwrap_or("Venue");
    let city = terms.city.unwrap_or("TBD");
    let role = terms.role.unwrap_or("TBD");
    let date = terms.date.unwrap_or("TBD");
    let start = terms.start_time.unwrap_or("TBD");
    let end = terms.end_time.unwrap_or("TBD");
    let base_pay = terms.base_pay.unwrap_or("TBD");
    let gratuity = terms.gratuity.unwrap_or("none");

    format!(
        "WORK AGREEMENT\n\n\
         {client} (\"Client\") engages talent {talent_id} (\"Talent\") for the role \
         of {role} at {venue}, {city}.\n\n\
         Date: {date}\n\
         Hours: {start} to {end}\n\
         Base pay: {base_pay}\n\
         Gratuity: {gratuity}\n\n\
         This agreement becomes active once signed by both parties and is \
         completed when the Talent checks out of the shift.",
        talent_id = terms.talent_id,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
