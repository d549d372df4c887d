#![cfg(feature = "e2e")]

use meetly_core::{
    ProfileError,
    database::{PostgresProfilesRepository, ProfileRepository},
    model::{EventType, Gender, Region},
};
use sqlx::PgPool;
use uuid::Uuid;

async fn insert_user(pool: &PgPool, email: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, email, password_hash) VALUES ($1, $2, 'secret-hash')")
        .bind(id)
        .bind(email)
        .execute(pool)
        .await
        .expect("insert user");
    id
}

#[sqlx::test(migrator = "meetly_core::MIGRATOR")]
async fn missing_profile_reads_as_none(pool: PgPool) {
    let repo = PostgresProfilesRepository::new(pool);
    let found = repo.find_profile(Uuid::new_v4()).await.expect("query ok");
    assert!(found.is_none());
}

#[sqlx::test(migrator = "meetly_core::MIGRATOR")]
async fn save_round_trips_canonical_values(pool: PgPool) {
    let id = insert_user(&pool, "zhang@example.com").await;
    let repo = PostgresProfilesRepository::new(pool.clone());

    let mut profile = repo.find_profile(id).await.unwrap().expect("profile");
    profile.gender = Some(Gender::Female);
    profile.preferred_regions = vec![Region::Online, Region::Beijing];
    profile.preferred_event_types = vec![EventType::Workshop];
    profile.nickname = Some("小张".into());
    repo.save_profile(&profile).await.expect("save");

    let stored: (Option<String>, Vec<String>) =
        sqlx::query_as("SELECT gender, preferred_regions FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored.0.as_deref(), Some("FEMALE"));
    assert_eq!(stored.1, vec!["ONLINE".to_string(), "BEIJING".to_string()]);

    let reread = repo.find_profile(id).await.unwrap().expect("profile");
    assert_eq!(reread.nickname.as_deref(), Some("小张"));
    assert_eq!(reread.preferred_event_types, vec![EventType::Workshop]);
    assert!(reread.updated_at >= profile.updated_at);
}

#[sqlx::test(migrator = "meetly_core::MIGRATOR")]
async fn non_canonical_stored_values_degrade(pool: PgPool) {
    let id = insert_user(&pool, "li@example.com").await;
    sqlx::query(
        "UPDATE users SET gender = '女', preferred_regions = ARRAY['BEIJING', 'MARS'] WHERE id = $1",
    )
    .bind(id)
    .execute(&pool)
    .await
    .unwrap();

    let repo = PostgresProfilesRepository::new(pool);
    let profile = repo.find_profile(id).await.unwrap().expect("profile");
    assert_eq!(profile.gender, None);
    assert_eq!(profile.preferred_regions, vec![Region::Beijing]);
}

#[sqlx::test(migrator = "meetly_core::MIGRATOR")]
async fn saving_unknown_profile_is_not_found(pool: PgPool) {
    let repo = PostgresProfilesRepository::new(pool);
    let profile = meetly_core::UserProfile::new(Uuid::new_v4(), "nobody@example.com");
    let err = repo.save_profile(&profile).await.unwrap_err();
    assert!(matches!(err, ProfileError::NotFound(_)));
}

#[sqlx::test(migrator = "meetly_core::MIGRATOR")]
async fn closed_pool_surfaces_database_error(pool: PgPool) {
    let repo = PostgresProfilesRepository::new(pool.clone());
    pool.close().await;

    let err = repo.find_profile(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ProfileError::Database(_)));
    let profile = meetly_core::UserProfile::new(Uuid::new_v4(), "closed@example.com");
    let err = repo.save_profile(&profile).await.unwrap_err();
    assert!(matches!(err, ProfileError::Database(_)));
}
