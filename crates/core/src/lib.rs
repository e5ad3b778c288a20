//! Domain logic for the Nightshift talent marketplace.
//!
//! No database or HTTP dependencies live here -- only the error taxonomy,
//! shared type aliases, message PII scanning, and the contract lifecycle.

pub mod application;
pub mod contract;
pub mod error;
pub mod pii;
pub mod types;
