use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use meetly_model::{EventType, Gender, Localized, Region};
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    database::ports::profiles::ProfileRepository,
    error::{ProfileError, Result},
    profile::UserProfile,
};

/// Columns a profile read may touch. `password_hash` is deliberately absent.
pub const PROFILE_COLUMNS: &[&str] = &[
    "id",
    "email",
    "name",
    "nickname",
    "phone",
    "birthday",
    "gender",
    "address",
    "country",
    "preferred_regions",
    "preferred_event_types",
    "role",
    "avatar",
    "is_verified",
    "auth_providers",
    "search_history",
    "created_at",
    "updated_at",
];

static SELECT_PROFILE_BY_ID: LazyLock<String> = LazyLock::new(|| {
    format!(
        "SELECT {} FROM users WHERE id = $1",
        PROFILE_COLUMNS.join(", ")
    )
});

/// PostgreSQL-backed implementation of the `ProfileRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresProfilesRepository {
    pool: PgPool,
}

impl PostgresProfilesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    email: String,
    name: Option<String>,
    nickname: Option<String>,
    phone: Option<String>,
    birthday: Option<NaiveDate>,
    gender: Option<String>,
    address: Option<String>,
    country: Option<String>,
    preferred_regions: Vec<String>,
    preferred_event_types: Vec<String>,
    role: String,
    avatar: Option<String>,
    is_verified: bool,
    auth_providers: Vec<String>,
    search_history: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        let gender = row.gender.as_deref().and_then(|stored| {
            let parsed = Gender::from_canonical(stored);
            if parsed.is_none() {
                warn!(user_id = %row.id, value = stored, "stored gender is not canonical");
            }
            parsed
        });

        UserProfile {
            id: row.id,
            email: row.email,
            name: row.name,
            nickname: row.nickname,
            phone: row.phone,
            birthday: row.birthday,
            gender,
            address: row.address,
            country: row.country,
            preferred_regions: canonical_members(row.id, "preferred_regions", &row.preferred_regions),
            preferred_event_types: canonical_members(
                row.id,
                "preferred_event_types",
                &row.preferred_event_types,
            ),
            role: row.role,
            avatar: row.avatar,
            is_verified: row.is_verified,
            auth_providers: row.auth_providers,
            search_history: row.search_history,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn canonical_members<T: Localized>(user_id: Uuid, column: &str, stored: &[String]) -> Vec<T> {
    stored
        .iter()
        .filter_map(|value| {
            let parsed = T::from_canonical(value);
            if parsed.is_none() {
                warn!(%user_id, column, value = %value, "dropping non-canonical stored value");
            }
            parsed
        })
        .collect()
}

fn canonical_keys<T: Localized>(members: &[T]) -> Vec<String> {
    members
        .iter()
        .map(|member| member.canonical().to_string())
        .collect()
}

#[async_trait]
impl ProfileRepository for PostgresProfilesRepository {
    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(SELECT_PROFILE_BY_ID.as_str())
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(row.map(UserProfile::from))
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, nickname = $3, phone = $4, birthday = $5,
                gender = $6, address = $7, country = $8,
                preferred_regions = $9, preferred_event_types = $10,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(&profile.nickname)
        .bind(&profile.phone)
        .bind(profile.birthday)
        .bind(profile.gender.map(|gender| gender.canonical()))
        .bind(&profile.address)
        .bind(&profile.country)
        .bind(canonical_keys::<Region>(&profile.preferred_regions))
        .bind(canonical_keys::<EventType>(&profile.preferred_event_types))
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(ProfileError::NotFound("User not found".to_string()));
        }

        debug!("Saved profile {}", profile.id);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(self.pool()).await?;
        Ok(())
    }
}
