//! Repository for the `messages` table, including the thread-summary
//! aggregation.

use sqlx::PgPool;

use crate::models::message::{Message, ThreadSummary};

/// Column list for `messages` queries.
const COLUMNS: &str = "id, thread_id, sender, text, pii_flag, pii_reason, created_at";

/// Provides message persistence and thread aggregation.
pub struct MessageRepo;

impl MessageRepo {
    /// Store a message with its PII annotation, returning the full row.
    pub async fn create(
        pool: &PgPool,
        thread_id: &str,
        sender: &str,
        text: &str,
        pii_flag: bool,
        pii_reason: Option<&str>,
    ) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (thread_id, sender, text, pii_flag, pii_reason) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(thread_id)
            .bind(sender)
            .bind(text)
            .bind(pii_flag)
            .bind(pii_reason)
            .fetch_one(pool)
            .await
    }

    /// List a thread's messages, oldest first.
    pub async fn list_thread(pool: &PgPool, thread_id: &str) -> Result<Vec<Message>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM messages WHERE thread_id = $1 ORDER BY created_at ASC");
        sqlx::query_as::<_, Message>(&query)
            .bind(thread_id)
            .fetch_all(pool)
            .await
    }

    /// Summarize threads: latest message per thread plus total count,
    /// ordered by latest activity, capped at `limit`.
    ///
    /// Ties on `created_at` within a thread are broken arbitrarily by the
    /// store; the window count runs over the whole thread before the
    /// DISTINCT ON picks the newest row.
    pub async fn thread_summaries(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ThreadSummary>, sqlx::Error> {
        sqlx::query_as::<_, ThreadSummary>(
            "SELECT * FROM ( \
                SELECT DISTINCT ON (thread_id) \
                    thread_id, \
                    sender AS last_sender, \
                    text AS last_message, \
                    created_at AS last_message_at, \
                    COUNT(*) OVER (PARTITION BY thread_id) AS message_count \
                FROM messages \
                ORDER BY thread_id, created_at DESC \
             ) summaries \
             ORDER BY last_message_at DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
