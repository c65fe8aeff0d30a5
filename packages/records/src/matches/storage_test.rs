// ABOUTME: Tests for the matching workflow
// ABOUTME: Verifies status propagation, rollback on unresolvable ids, and review listing

use sqlx::SqlitePool;

use super::storage::MatchStorage;
use super::types::MatchStatus;
use crate::donations::{Category, DonationCreateInput, DonationStatus, DonationStorage};
use crate::requests::{RequestCreateInput, RequestStatus, RequestStorage};
use crate::storage::{StorageError, MIGRATOR};
use crate::users::{Role, UserCreateInput, UserStorage};

struct Fixture {
    pool: SqlitePool,
    admin_id: String,
    donation_id: String,
    request_id: String,
}

async fn create_user(pool: &SqlitePool, name: &str, email: &str, role: Role) -> String {
    UserStorage::new(pool.clone())
        .create_user(UserCreateInput {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$fake-hash".to_string(),
            role,
            phone: None,
            organization: None,
            language: None,
        })
        .await
        .unwrap()
        .id
}

/// One approved donation, one approved request, one admin
async fn setup_fixture() -> Fixture {
    let pool = SqlitePool::connect(":memory:").await.unwrap();
    MIGRATOR.run(&pool).await.unwrap();

    let admin_id = create_user(&pool, "Ada Admin", "ada@example.com", Role::Admin).await;
    let donor_id = create_user(&pool, "Dana Donor", "dana@example.com", Role::Donor).await;
    let receiver_id = create_user(&pool, "Rae Receiver", "rae@example.com", Role::Receiver).await;

    let donations = DonationStorage::new(pool.clone());
    let donation = donations
        .create_donation(
            &donor_id,
            DonationCreateInput {
                title: "Winter coats".to_string(),
                description: None,
                category: Category::Clothes,
                quantity: Some(3),
                photos: None,
            },
        )
        .await
        .unwrap();
    donations.approve_donation(&donation.id).await.unwrap();

    let requests = RequestStorage::new(pool.clone());
    let request = requests
        .create_request(
            &receiver_id,
            RequestCreateInput {
                title: "Warm clothing".to_string(),
                description: None,
                category: Category::Clothes,
                quantity: Some(2),
            },
        )
        .await
        .unwrap();
    requests.approve_request(&request.id).await.unwrap();

    Fixture {
        pool,
        admin_id,
        donation_id: donation.id,
        request_id: request.id,
    }
}

#[tokio::test]
async fn test_create_match_flips_both_sides_to_matched() {
    let fx = setup_fixture().await;
    let storage = MatchStorage::new(fx.pool.clone());

    let created = storage
        .create_match(&fx.donation_id, &fx.request_id, &fx.admin_id)
        .await
        .unwrap();

    assert_eq!(created.status, MatchStatus::Approved);
    assert_eq!(created.admin_id, fx.admin_id);

    let donation = DonationStorage::new(fx.pool.clone())
        .get_donation(&fx.donation_id)
        .await
        .unwrap();
    assert_eq!(donation.status, DonationStatus::Matched);

    let request = RequestStorage::new(fx.pool.clone())
        .get_request(&fx.request_id)
        .await
        .unwrap();
    assert_eq!(request.status, RequestStatus::Matched);
}

#[tokio::test]
async fn test_match_with_missing_donation_rolls_back() {
    let fx = setup_fixture().await;
    let storage = MatchStorage::new(fx.pool.clone());

    let result = storage
        .create_match("no-such-donation", &fx.request_id, &fx.admin_id)
        .await;
    assert!(matches!(result, Err(StorageError::NotFound)));

    // No partial writes: no match row, request untouched
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM matches")
        .fetch_one(&fx.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    let request = RequestStorage::new(fx.pool.clone())
        .get_request(&fx.request_id)
        .await
        .unwrap();
    assert_eq!(request.status, RequestStatus::Approved);
}

#[tokio::test]
async fn test_match_with_missing_request_rolls_back() {
    let fx = setup_fixture().await;
    let storage = MatchStorage::new(fx.pool.clone());

    let result = storage
        .create_match(&fx.donation_id, "no-such-request", &fx.admin_id)
        .await;
    assert!(matches!(result, Err(StorageError::NotFound)));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM matches")
        .fetch_one(&fx.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    let donation = DonationStorage::new(fx.pool.clone())
        .get_donation(&fx.donation_id)
        .await
        .unwrap();
    assert_eq!(donation.status, DonationStatus::Approved);
}

// Regression guard, not an endorsement: nothing stops a second match
// against a donation that is already matched.
#[tokio::test]
async fn test_second_match_against_same_donation_succeeds() {
    let fx = setup_fixture().await;
    let storage = MatchStorage::new(fx.pool.clone());

    let receiver_id = create_user(&fx.pool, "Second Receiver", "second@example.com", Role::Receiver).await;
    let other_request = RequestStorage::new(fx.pool.clone())
        .create_request(
            &receiver_id,
            RequestCreateInput {
                title: "Coats for shelter".to_string(),
                description: None,
                category: Category::Clothes,
                quantity: None,
            },
        )
        .await
        .unwrap();

    storage
        .create_match(&fx.donation_id, &fx.request_id, &fx.admin_id)
        .await
        .unwrap();
    storage
        .create_match(&fx.donation_id, &other_request.id, &fx.admin_id)
        .await
        .unwrap();

    let matches = storage.list_matches().await.unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches
        .iter()
        .all(|m| m.r#match.donation_id == fx.donation_id));
}

#[tokio::test]
async fn test_list_matches_joins_titles_and_owner_names() {
    let fx = setup_fixture().await;
    let storage = MatchStorage::new(fx.pool.clone());

    storage
        .create_match(&fx.donation_id, &fx.request_id, &fx.admin_id)
        .await
        .unwrap();

    let matches = storage.list_matches().await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].donation_title, "Winter coats");
    assert_eq!(matches[0].donor_name, "Dana Donor");
    assert_eq!(matches[0].request_title, "Warm clothing");
    assert_eq!(matches[0].receiver_name, "Rae Receiver");
}
