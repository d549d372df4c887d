//! Profile use cases.
//!
//! [`ProfileService`] is what the HTTP layer calls. It owns the
//! fetch/validate/apply/persist/re-read sequence for updates so handlers only
//! deal with extraction and response shaping.

use std::sync::Arc;

use meetly_model::ProfileUpdateRequest;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    database::ports::profiles::ProfileRepository,
    error::{ProfileError, Result},
    profile::UserProfile,
    update::ProfileChanges,
};

#[derive(Clone)]
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
}

impl std::fmt::Debug for ProfileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileService").finish_non_exhaustive()
    }
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile> {
        self.repository
            .find_profile(user_id)
            .await?
            .ok_or_else(|| ProfileError::NotFound("用户不存在".to_string()))
    }

    /// Applies a partial update and returns the profile as stored afterwards.
    ///
    /// The whole payload is validated before the entity is touched. A missing
    /// profile wins over an invalid payload.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: ProfileUpdateRequest,
    ) -> Result<UserProfile> {
        let mut profile = self.get_profile(user_id).await?;

        let changes = ProfileChanges::from_request(request)?;
        let fields = changes.changed_fields();
        changes.apply_to(&mut profile);

        self.repository.save_profile(&profile).await?;

        let updated = self.repository.find_profile(user_id).await?.ok_or_else(|| {
            warn!(%user_id, "profile vanished after update");
            ProfileError::Internal("更新后无法读取用户资料".to_string())
        })?;

        info!(%user_id, ?fields, "profile updated");
        Ok(updated)
    }

    pub async fn health(&self) -> Result<()> {
        self.repository.ping().await
    }
}
