//! Handlers for in-thread messaging, served under `/api/messages`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use nightshift_core::pii;
use nightshift_db::models::message::{
    CreateMessage, Message, MessageListParams, ThreadSummary, ThreadSummaryParams,
};
use nightshift_db::repositories::MessageRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Maximum page size for thread summaries.
const MAX_THREAD_LIMIT: i64 = 100;

/// Default page size for thread summaries.
const DEFAULT_THREAD_LIMIT: i64 = 20;

/// POST /api/messages
///
/// Send a message. The text is scanned for contact details at write time;
/// a match annotates the stored row but never blocks it.
pub async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<CreateMessage>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::validation)?;

    let reasons = pii::scan(&input.text);
    let pii_flag = !reasons.is_empty();
    let pii_reason = pii::reason_string(&reasons);

    let message = MessageRepo::create(
        &state.pool,
        &input.thread_id,
        &input.sender,
        &input.text,
        pii_flag,
        pii_reason.as_deref(),
    )
    .await?;

    if pii_flag {
        tracing::info!(
            message_id = %message.id,
            thread_id = %message.thread_id,
            reason = %pii_reason.unwrap_or_default(),
            "Message flagged for possible contact details",
        );
    }

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/messages?thread_id=...
///
/// List a thread's messages oldest first. `thread_id` is required.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<MessageListParams>,
) -> AppResult<Json<Vec<Message>>> {
    let thread_id = params
        .thread_id
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("thread_id is required".into()))?;

    let messages = MessageRepo::list_thread(&state.pool, thread_id).await?;

    Ok(Json(messages))
}

/// GET /api/messages/threads
///
/// Summarize threads: latest message and total count per thread, ordered
/// by latest activity. `limit` defaults to 20, capped at 100.
pub async fn list_threads(
    State(state): State<AppState>,
    Query(params): Query<ThreadSummaryParams>,
) -> AppResult<Json<Vec<ThreadSummary>>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_THREAD_LIMIT)
        .clamp(1, MAX_THREAD_LIMIT);

    let summaries = MessageRepo::thread_summaries(&state.pool, limit).await?;

    Ok(Json(summaries))
}
