use async_trait::async_trait;
use uuid::Uuid;

use crate::{error::Result, profile::UserProfile};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Loads the allow-listed profile columns for `id`.
    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>>;

    /// Persists the mutable profile fields in a single write.
    ///
    /// Returns `NotFound` when no row matches `profile.id`.
    async fn save_profile(&self, profile: &UserProfile) -> Result<()>;

    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> Result<()>;
}
