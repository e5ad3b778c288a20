//! Demo-data loader, served at `POST /api/seed`.
//!
//! Idempotent by threshold: each collection is only topped up while its
//! count is below the fixture size. Individual insert failures are
//! swallowed and only the aggregate counts are reported (best-effort
//! bulk load, by policy).

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use nightshift_db::models::gig::CreateGig;
use nightshift_db::models::talent::CreateTalentProfile;
use nightshift_db::models::venue::CreateVenue;
use nightshift_db::repositories::{GigRepo, TalentRepo, VenueRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// Seed until this many talent profiles exist.
const MODEL_THRESHOLD: i64 = 10;
/// Seed until this many venues exist.
const CLUB_THRESHOLD: i64 = 5;
/// Seed until this many gigs exist.
const GIG_THRESHOLD: i64 = 5;

/// Aggregate result of a seed run.
#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub models_before: i64,
    pub models_created: i64,
    pub total_models: i64,
    pub clubs_before: i64,
    pub clubs_created: i64,
    pub total_clubs: i64,
    pub gigs_before: i64,
    pub gigs_created: i64,
    pub total_gigs: i64,
}

/// POST /api/seed
pub async fn seed_demo(State(state): State<AppState>) -> AppResult<Json<SeedReport>> {
    let models_before = TalentRepo::count(&state.pool).await?;
    let clubs_before = VenueRepo::count(&state.pool).await?;
    let gigs_before = GigRepo::count(&state.pool).await?;

    let mut models_created = 0;
    if models_before < MODEL_THRESHOLD {
        for profile in demo_profiles() {
            match TalentRepo::create(&state.pool, &profile).await {
                Ok(_) => models_created += 1,
                Err(err) => tracing::warn!(error = %err, name = %profile.name, "Skipped demo profile"),
            }
        }
    }

    let mut clubs_created = 0;
    if clubs_before < CLUB_THRESHOLD {
        for venue in demo_venues() {
            match VenueRepo::create(&state.pool, &venue).await {
                Ok(_) => clubs_created += 1,
                Err(err) => tracing::warn!(error = %err, name = %venue.name, "Skipped demo venue"),
            }
        }
    }

    let mut gigs_created = 0;
    if gigs_before < GIG_THRESHOLD {
        for gig in demo_gigs() {
            match GigRepo::create(&state.pool, &gig).await {
                Ok(_) => gigs_created += 1,
                Err(err) => tracing::warn!(error = %err, title = %gig.title, "Skipped demo gig"),
            }
        }
    }

    let report = SeedReport {
        models_before,
        models_created,
        total_models: TalentRepo::count(&state.pool).await?,
        clubs_before,
        clubs_created,
        total_clubs: VenueRepo::count(&state.pool).await?,
        gigs_before,
        gigs_created,
        total_gigs: GigRepo::count(&state.pool).await?,
    };

    tracing::info!(
        models_created = report.models_created,
        clubs_created = report.clubs_created,
        gigs_created = report.gigs_created,
        "Seed run finished",
    );

    Ok(Json(report))
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn profile(
    name: &str,
    city: &str,
    skills: &[&str],
    experience_years: i32,
    hourly_rate: f64,
) -> CreateTalentProfile {
    CreateTalentProfile {
        name: name.to_string(),
        city: city.to_string(),
        bio: None,
        experience_years,
        hourly_rate: Some(hourly_rate),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        photos: Vec::new(),
        instagram: None,
        phone: None,
    }
}

fn demo_profiles() -> Vec<CreateTalentProfile> {
    vec![
        profile("Ava Collins", "Miami", &["VIP", "Bottle Service", "Promo"], 3, 45.0),
        profile("Mia Lopez", "New York", &["Hostess", "Bilingual"], 2, 40.0),
        profile("Sofia Rossi", "Las Vegas", &["VIP", "Front Desk"], 4, 55.0),
        profile("Isabella Nguyen", "Los Angeles", &["Registration", "Promo", "Greeter"], 1, 35.0),
        profile("Layla Patel", "Chicago", &["Model", "VIP", "Check-in"], 5, 50.0),
        profile("Zoe Martin", "Austin", &["Promo", "Sampling"], 2, 38.0),
        profile("Emily Carter", "San Diego", &["VIP", "Hostess"], 3, 42.0),
        profile("Aria Kim", "Seattle", &["Registration", "Greeter"], 1, 32.0),
        profile("Victoria Adams", "Houston", &["Bottle Service", "VIP"], 6, 60.0),
        profile("Nina Petrova", "Miami", &["Model", "Promo"], 3, 45.0),
    ]
}

fn venue(name: &str, city: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        city: city.to_string(),
        contact_name: None,
        contact_email: None,
        contact_phone: None,
    }
}

fn demo_venues() -> Vec<CreateVenue> {
    vec![
        venue("Blue Flame", "Miami"),
        venue("Neon Room", "Las Vegas"),
        venue("Skyline", "New York"),
        venue("Echo", "Los Angeles"),
        venue("Aurora", "Chicago"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn gig(
    title: &str,
    club_name: &str,
    city: &str,
    date: &str,
    pay: &str,
    requirements: &[&str],
    spots: i32,
    notes: &str,
) -> CreateGig {
    CreateGig {
        title: title.to_string(),
        club_name: club_name.to_string(),
        city: city.to_string(),
        date: date.to_string(),
        location: None,
        pay: Some(pay.to_string()),
        dress_code: None,
        requirements: requirements.iter().map(|s| s.to_string()).collect(),
        spots,
        notes: Some(notes.to_string()),
    }
}

fn demo_gigs() -> Vec<CreateGig> {
    vec![
        gig(
            "VIP Hostess - Grand Opening",
            "Blue Flame",
            "Miami",
            "Fri 10PM-2AM",
            "$45/hr + tips",
            &["VIP experience", "All black attire"],
            3,
            "4-hour shift for opening night.",
        ),
        gig(
            "Bottle Service Model",
            "Neon Room",
            "Las Vegas",
            "Sat 9PM-4AM",
            "$55/hr + bonus",
            &["Bottle service", "Friendly, energetic"],
            4,
            "All-night set, peak hours 11PM-2AM.",
        ),
        gig(
            "Check-in & Greeter",
            "Skyline",
            "New York",
            "Thu 7PM-11PM",
            "$35/hr",
            &["Registration", "Bilingual preferred"],
            2,
            "Short 4-hour evening event.",
        ),
        gig(
            "Promo Team - Launch Party",
            "Echo",
            "Los Angeles",
            "Fri 8PM-12AM",
            "$40/hr + merch",
            &["Promo", "Comfortable on camera"],
            5,
            "Half-night promo push.",
        ),
        gig(
            "VIP Table Host",
            "Aurora",
            "Chicago",
            "Sat 10PM-3AM",
            "$50/hr + tips",
            &["VIP", "High-end service"],
            2,
            "Full-night coverage for VIP tables.",
        ),
    ]
}
