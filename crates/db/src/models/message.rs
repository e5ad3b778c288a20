//! Message entity model and DTOs.
//!
//! `thread_id` is an opaque caller-supplied string; no thread entity exists
//! independently of its messages.

use nightshift_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: Id,
    pub thread_id: String,
    pub sender: String,
    pub text: String,
    pub pii_flag: bool,
    pub pii_reason: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for sending a message. The PII annotation is computed at write time,
/// never accepted from the caller.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMessage {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub thread_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub sender: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub text: String,
}

/// Query parameters for listing a thread. `thread_id` is required; the
/// handler rejects requests without it.
#[derive(Debug, Deserialize)]
pub struct MessageListParams {
    pub thread_id: Option<String>,
}

/// Query parameters for thread summaries.
#[derive(Debug, Deserialize)]
pub struct ThreadSummaryParams {
    pub limit: Option<i64>,
}

/// One row of the thread-summary aggregation: the latest message per thread
/// plus the total message count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ThreadSummary {
    pub thread_id: String,
    pub last_sender: String,
    pub last_message: String,
    pub last_message_at: Timestamp,
    pub message_count: i64,
}
