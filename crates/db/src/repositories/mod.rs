//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod application_repo;
pub mod contract_repo;
pub mod gig_repo;
pub mod message_repo;
pub mod report_repo;
pub mod talent_repo;
pub mod venue_repo;

pub use application_repo::ApplicationRepo;
pub use contract_repo::ContractRepo;
pub use gig_repo::GigRepo;
pub use message_repo::MessageRepo;
pub use report_repo::ReportRepo;
pub use talent_repo::TalentRepo;
pub use venue_repo::VenueRepo;
