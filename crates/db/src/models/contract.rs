//! Contract entity model and DTOs.

use nightshift_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contracts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contract {
    pub id: Id,
    pub client_id: Option<Id>,
    pub client_name: Option<String>,
    pub talent_id: Id,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub role: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub base_pay: Option<String>,
    pub gratuity: Option<String>,
    pub contract_text: String,
    pub status: String,
    pub signed_talent_at: Option<Timestamp>,
    pub signed_client_at: Option<Timestamp>,
    pub check_in: Option<Timestamp>,
    pub check_out: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Contract {
    pub fn signed_at(&self, party: nightshift_core::contract::Party) -> Option<Timestamp> {
        match party {
            nightshift_core::contract::Party::Talent => self.signed_talent_at,
            nightshift_core::contract::Party::Client => self.signed_client_at,
        }
    }
}

/// DTO for creating a contract. When `contract_text` is absent the handler
/// renders it from the agreement template.
#[derive(Debug, Deserialize)]
pub struct CreateContract {
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub talent_id: String,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub role: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub base_pay: Option<String>,
    pub gratuity: Option<String>,
    pub contract_text: Option<String>,
}

/// Body for `POST /contracts/{id}/sign`.
#[derive(Debug, Deserialize)]
pub struct SignRequest {
    /// `"talent"` or `"client"`.
    pub actor: String,
    /// Signature timestamp; defaults to now.
    pub at: Option<Timestamp>,
}

/// Body for check-in / check-out stamping.
#[derive(Debug, Default, Deserialize)]
pub struct StampRequest {
    /// Stamp timestamp; defaults to now.
    pub at: Option<Timestamp>,
}

/// Query parameters for listing contracts.
#[derive(Debug, Deserialize)]
pub struct ContractListParams {
    pub talent_id: Option<String>,
    pub client_id: Option<String>,
    pub status: Option<String>,
}
