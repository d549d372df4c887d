//! In-memory profile store for tests that should not need PostgreSQL.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    database::ports::profiles::ProfileRepository,
    error::{ProfileError, Result},
    profile::UserProfile,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        let map = profiles
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect();
        Self {
            profiles: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        let Some(slot) = profiles.get_mut(&profile.id) else {
            return Err(ProfileError::NotFound("User not found".to_string()));
        };
        let mut stored = profile.clone();
        stored.updated_at = Utc::now();
        *slot = stored;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
