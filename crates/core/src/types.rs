/// Row identifiers are store-generated UUIDs, surfaced to clients as strings.
pub type Id = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
