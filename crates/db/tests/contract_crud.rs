//! Integration tests for contract persistence and lifecycle stamping.

use assert_matches::assert_matches;
use chrono::Utc;
use nightshift_core::contract::{Party, STATUS_ACTIVE, STATUS_COMPLETED, STATUS_PENDING};
use nightshift_db::models::contract::Contract;
use nightshift_db::repositories::contract_repo::NewContract;
use nightshift_db::repositories::ContractRepo;
use sqlx::PgPool;
use uuid::Uuid;

fn new_contract(talent_id: Uuid) -> NewContract<'static> {
    NewContract {
        client_id: None,
        client_name: Some("Blue Flame"),
        talent_id,
        venue: Some("Blue Flame Miami"),
        city: Some("Miami"),
        role: Some("VIP Hostess"),
        date: Some("Fri 10PM-2AM"),
        start_time: Some("22:00"),
        end_time: Some("02:00"),
        base_pay: Some("$45/hr"),
        gratuity: None,
        contract_text: "WORK AGREEMENT",
    }
}

async fn create(pool: &PgPool) -> Contract {
    ContractRepo::create(pool, &new_contract(Uuid::new_v4()))
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn create_starts_pending(pool: PgPool) {
    let contract = create(&pool).await;
    assert_eq!(contract.status, STATUS_PENDING);
    assert!(contract.signed_talent_at.is_none());
    assert!(contract.signed_client_at.is_none());
    assert!(contract.check_in.is_none());
    assert!(contract.check_out.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_round_trips(pool: PgPool) {
    let contract = create(&pool).await;
    let found = ContractRepo::find_by_id(&pool, contract.id).await.unwrap();
    assert_matches!(found, Some(c) if c.id == contract.id);

    let missing = ContractRepo::find_by_id(&pool, Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn signatures_stamp_the_right_column(pool: PgPool) {
    let contract = create(&pool).await;
    let now = Utc::now();

    let after_talent =
        ContractRepo::record_signature(&pool, contract.id, Party::Talent, now, STATUS_PENDING)
            .await
            .unwrap()
            .unwrap();
    assert!(after_talent.signed_talent_at.is_some());
    assert!(after_talent.signed_client_at.is_none());
    assert_eq!(after_talent.status, STATUS_PENDING);

    let after_client =
        ContractRepo::record_signature(&pool, contract.id, Party::Client, now, STATUS_ACTIVE)
            .await
            .unwrap()
            .unwrap();
    assert!(after_client.signed_client_at.is_some());
    assert_eq!(after_client.status, STATUS_ACTIVE);
}

#[sqlx::test(migrations = "./migrations")]
async fn check_in_and_out_stamping(pool: PgPool) {
    let contract = create(&pool).await;
    let now = Utc::now();

    let checked_in = ContractRepo::record_check_in(&pool, contract.id, now)
        .await
        .unwrap()
        .unwrap();
    assert!(checked_in.check_in.is_some());

    let checked_out = ContractRepo::record_check_out(&pool, contract.id, now, STATUS_COMPLETED)
        .await
        .unwrap()
        .unwrap();
    assert!(checked_out.check_out.is_some());
    assert_eq!(checked_out.status, STATUS_COMPLETED);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_filters_by_talent_and_status(pool: PgPool) {
    let talent_id = Uuid::new_v4();
    let a = ContractRepo::create(&pool, &new_contract(talent_id)).await.unwrap();
    let b = ContractRepo::create(&pool, &new_contract(talent_id)).await.unwrap();
    ContractRepo::create(&pool, &new_contract(Uuid::new_v4()))
        .await
        .unwrap();

    let for_talent = ContractRepo::list_filtered(&pool, Some(talent_id), None, None)
        .await
        .unwrap();
    assert_eq!(for_talent.len(), 2);
    // Newest first.
    assert_eq!(for_talent[0].id, b.id);
    assert_eq!(for_talent[1].id, a.id);

    ContractRepo::record_check_out(&pool, a.id, Utc::now(), STATUS_COMPLETED)
        .await
        .unwrap();
    let completed = ContractRepo::list_filtered(&pool, Some(talent_id), None, Some(STATUS_COMPLETED))
        .await
        .unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, a.id);
}
