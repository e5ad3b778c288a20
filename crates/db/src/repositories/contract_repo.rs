//! Repository for the `contracts` table.
//!
//! Lifecycle guards live in `nightshift_core::contract`; this layer only
//! persists the transitions the handler has already validated.

use nightshift_core::contract::Party;
use nightshift_core::types::{Id, Timestamp};
use sqlx::PgPool;

use crate::models::contract::Contract;

/// Column list for `contracts` queries.
const COLUMNS: &str = "\
    id, client_id, client_name, talent_id, venue, city, role, date, \
    start_time, end_time, base_pay, gratuity, contract_text, status, \
    signed_talent_at, signed_client_at, check_in, check_out, created_at";

/// Insert values for a new contract, after handler-side id parsing and
/// template rendering.
pub struct NewContract<'a> {
    pub client_id: Option<Id>,
    pub client_name: Option<&'a str>,
    pub talent_id: Id,
    pub venue: Option<&'a str>,
    pub city: Option<&'a str>,
    pub role: Option<&'a str>,
    pub date: Option<&'a str>,
    pub start_time: Option<&'a str>,
    pub end_time: Option<&'a str>,
    pub base_pay: Option<&'a str>,
    pub gratuity: Option<&'a str>,
    pub contract_text: &'a str,
}

/// Provides contract persistence and lifecycle stamping.
pub struct ContractRepo;

impl ContractRepo {
    /// Create a new contract in `pending` status, returning the full row.
    pub async fn create(pool: &PgPool, input: &NewContract<'_>) -> Result<Contract, sqlx::Error> {
        let query = format!(
            "INSERT INTO contracts \
                (client_id, client_name, talent_id, venue, city, role, date, \
                 start_time, end_time, base_pay, gratuity, contract_text) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(input.client_id)
            .bind(input.client_name)
            .bind(input.talent_id)
            .bind(input.venue)
            .bind(input.city)
            .bind(input.role)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.base_pay)
            .bind(input.gratuity)
            .bind(input.contract_text)
            .fetch_one(pool)
            .await
    }

    /// Find a contract by ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contracts WHERE id = $1");
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List contracts with optional filters, newest first.
    pub async fn list_filtered(
        pool: &PgPool,
        talent_id: Option<Id>,
        client_id: Option<Id>,
        status: Option<&str>,
    ) -> Result<Vec<Contract>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if talent_id.is_some() {
            conditions.push(format!("talent_id = ${param_idx}"));
            param_idx += 1;
        }
        if client_id.is_some() {
            conditions.push(format!("client_id = ${param_idx}"));
            param_idx += 1;
        }
        if status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query =
            format!("SELECT {COLUMNS} FROM contracts {where_clause} ORDER BY created_at DESC");

        let mut q = sqlx::query_as::<_, Contract>(&query);

        if let Some(t) = talent_id {
            q = q.bind(t);
        }
        if let Some(c) = client_id {
            q = q.bind(c);
        }
        if let Some(s) = status {
            q = q.bind(s.to_string());
        }

        q.fetch_all(pool).await
    }

    /// Stamp a party's signature and set the resulting status.
    /// Returns the updated row if the contract exists.
    pub async fn record_signature(
        pool: &PgPool,
        id: Id,
        party: Party,
        at: Timestamp,
        new_status: &str,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let column = match party {
            Party::Talent => "signed_talent_at",
            Party::Client => "signed_client_at",
        };
        let query = format!(
            "UPDATE contracts SET {column} = $1, status = $2 WHERE id = $3 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(at)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Stamp the shift check-in. Returns the updated row if found.
    pub async fn record_check_in(
        pool: &PgPool,
        id: Id,
        at: Timestamp,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("UPDATE contracts SET check_in = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Contract>(&query)
            .bind(at)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Stamp the shift check-out and complete the contract.
    /// Returns the updated row if found.
    pub async fn record_check_out(
        pool: &PgPool,
        id: Id,
        at: Timestamp,
        new_status: &str,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!(
            "UPDATE contracts SET check_out = $1, status = $2 WHERE id = $3 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(at)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
