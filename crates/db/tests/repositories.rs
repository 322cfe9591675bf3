//! Repository tests against a migrated PostgreSQL database.

use shotweave_db::models::user::CreateUser;
use shotweave_db::models::vendor::seed_vendors;
use shotweave_db::repositories::{UserRepo, VendorRepo};
use sqlx::PgPool;

fn new_user(username: &str, email: &str) -> CreateUser {
    CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        username: username.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role: "Line Producer".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_passes(pool: PgPool) {
    shotweave_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_user_is_found_by_username(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("meera", "meera@set.in"))
        .await
        .unwrap();

    let found = UserRepo::find_by_username(&pool, "meera")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.role, "Line Producer");

    assert!(UserRepo::find_by_username(&pool, "MEERA").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn existence_check_matches_username_or_email(pool: PgPool) {
    UserRepo::create(&pool, &new_user("meera", "meera@set.in"))
        .await
        .unwrap();

    assert!(UserRepo::exists_by_username_or_email(&pool, "meera", "other@set.in").await.unwrap());
    assert!(UserRepo::exists_by_username_or_email(&pool, "other", "meera@set.in").await.unwrap());
    assert!(!UserRepo::exists_by_username_or_email(&pool, "other", "other@set.in").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_violates_named_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("meera", "meera@set.in"))
        .await
        .unwrap();

    let err = UserRepo::create(&pool, &new_user("meera", "second@set.in"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("uq_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeding_is_idempotent(pool: PgPool) {
    assert_eq!(VendorRepo::seed_if_empty(&pool).await.unwrap(), 4);
    assert_eq!(VendorRepo::seed_if_empty(&pool).await.unwrap(), 0);
    assert_eq!(VendorRepo::count(&pool).await.unwrap(), 4);

    let vendors = VendorRepo::list(&pool).await.unwrap();
    assert_eq!(vendors, seed_vendors());
}
