//! Handlers for work contracts, served under `/api/contracts`.
//!
//! Lifecycle rules live in `nightshift_core::contract`; each mutating
//! endpoint fetches the current row, validates the transition, then stamps
//! it. The check is per-request -- concurrent signers race last-write-wins.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use nightshift_core::contract::{self, ContractTerms, Party};
use nightshift_core::error::CoreError;
use nightshift_core::types::Id;
use nightshift_db::models::contract::{
    Contract, ContractListParams, CreateContract, SignRequest, StampRequest,
};
use nightshift_db::repositories::contract_repo::NewContract;
use nightshift_db::repositories::ContractRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::state::AppState;

/// Fetch a contract or fail with 404.
async fn find_contract(pool: &sqlx::PgPool, id: Id) -> AppResult<Contract> {
    ContractRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))
}

// ---------------------------------------------------------------------------
// POST /api/contracts
// ---------------------------------------------------------------------------

/// Create a contract in `pending` status. When no agreement text is
/// supplied, it is rendered from the standard template with placeholder
/// fallbacks for missing terms.
pub async fn create_contract(
    State(state): State<AppState>,
    Json(input): Json<CreateContract>,
) -> AppResult<impl IntoResponse> {
    let talent_id = parse_id(&input.talent_id, "talent_id")?;
    let client_id = input
        .client_id
        .as_deref()
        .map(|v| parse_id(v, "client_id"))
        .transpose()?;

    let talent_id_str = talent_id.to_string();
    let contract_text = match input.contract_text.as_deref() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => contract::render_contract_text(&ContractTerms {
            client_name: input.client_name.as_deref(),
            venue: input.venue.as_deref(),
            city: input.city.as_deref(),
            talent_id: &talent_id_str,
            role: input.role.as_deref(),
            date: input.date.as_deref(),
            start_time: input.start_time.as_deref(),
            end_time: input.end_time.as_deref(),
            base_pay: input.base_pay.as_deref(),
            gratuity: input.gratuity.as_deref(),
        }),
    };

    let created = ContractRepo::create(
        &state.pool,
        &NewContract {
            client_id,
            client_name: input.client_name.as_deref(),
            talent_id,
            venue: input.venue.as_deref(),
            city: input.city.as_deref(),
            role: input.role.as_deref(),
            date: input.date.as_deref(),
            start_time: input.start_time.as_deref(),
            end_time: input.end_time.as_deref(),
            base_pay: input.base_pay.as_deref(),
            gratuity: input.gratuity.as_deref(),
            contract_text: &contract_text,
        },
    )
    .await?;

    tracing::info!(contract_id = %created.id, talent_id = %talent_id, "Contract created");

    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /api/contracts
// ---------------------------------------------------------------------------

/// List contracts newest first, with optional `talent_id`, `client_id`,
/// and `status` filters.
pub async fn list_contracts(
    State(state): State<AppState>,
    Query(params): Query<ContractListParams>,
) -> AppResult<Json<Vec<Contract>>> {
    let talent_id = params
        .talent_id
        .as_deref()
        .map(|v| parse_id(v, "talent_id"))
        .transpose()?;
    let client_id = params
        .client_id
        .as_deref()
        .map(|v| parse_id(v, "client_id"))
        .transpose()?;
    if let Some(ref status) = params.status {
        contract::validate_status(status)?;
    }

    let contracts =
        ContractRepo::list_filtered(&state.pool, talent_id, client_id, params.status.as_deref())
            .await?;

    Ok(Json(contracts))
}

// ---------------------------------------------------------------------------
// POST /api/contracts/{id}/sign
// ---------------------------------------------------------------------------

/// Record one party's signature. The contract activates once both parties
/// have signed; a repeat signature from the same party is a conflict.
pub async fn sign_contract(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(input): Json<SignRequest>,
) -> AppResult<Json<Contract>> {
    let party = contract::parse_party(&input.actor)?;
    let current = find_contract(&state.pool, id).await?;

    contract::validate_sign(&current.status, party, current.signed_at(party).is_some())?;

    let (talent_signed, client_signed) = match party {
        Party::Talent => (true, current.signed_client_at.is_some()),
        Party::Client => (current.signed_talent_at.is_some(), true),
    };
    let new_status = contract::status_after_sign(talent_signed, client_signed);
    let at = input.at.unwrap_or_else(Utc::now);

    let updated = ContractRepo::record_signature(&state.pool, id, party, at, new_status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;

    tracing::info!(
        contract_id = %id,
        actor = party.as_str(),
        status = %updated.status,
        "Contract signed",
    );

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// POST /api/contracts/{id}/checkin
// ---------------------------------------------------------------------------

/// Stamp the shift check-in. Requires an active (fully signed) contract.
pub async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    body: Option<Json<StampRequest>>,
) -> AppResult<Json<Contract>> {
    let input = body.map(|Json(b)| b).unwrap_or_default();
    let current = find_contract(&state.pool, id).await?;

    contract::validate_check_in(&current.status, current.check_in.is_some())?;

    let at = input.at.unwrap_or_else(Utc::now);
    let updated = ContractRepo::record_check_in(&state.pool, id, at)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;

    tracing::info!(contract_id = %id, "Shift checked in");

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// POST /api/contracts/{id}/checkout
// ---------------------------------------------------------------------------

/// Stamp the shift check-out and complete the contract. Requires an active
/// contract with a recorded check-in.
pub async fn check_out(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    body: Option<Json<StampRequest>>,
) -> AppResult<Json<Contract>> {
    let input = body.map(|Json(b)| b).unwrap_or_default();
    let current = find_contract(&state.pool, id).await?;

    contract::validate_check_out(
        &current.status,
        current.check_in.is_some(),
        current.check_out.is_some(),
    )?;

    let at = input.at.unwrap_or_else(Utc::now);
    let updated =
        ContractRepo::record_check_out(&state.pool, id, at, contract::STATUS_COMPLETED)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Contract",
                id,
            }))?;

    tracing::info!(contract_id = %id, "Shift checked out, contract completed");

    Ok(Json(updated))
}
