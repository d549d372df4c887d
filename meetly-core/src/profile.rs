//! Stored user profile.
//!
//! The entity mirrors the allow-listed columns of the `users` table. It never
//! carries credential material, so it is safe to hand to any layer.

use chrono::{DateTime, NaiveDate, Utc};
use meetly_model::{EventType, Gender, Localized, ProfileView, Region};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub preferred_regions: Vec<Region>,
    pub preferred_event_types: Vec<EventType>,
    pub role: String,
    pub avatar: Option<String>,
    pub is_verified: bool,
    pub auth_providers: Vec<String>,
    pub search_history: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Fresh profile with only the identity fields populated.
    pub fn new(id: Uuid, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            name: None,
            nickname: None,
            phone: None,
            birthday: None,
            gender: None,
            address: None,
            country: None,
            preferred_regions: Vec::new(),
            preferred_event_types: Vec::new(),
            role: "user".to_string(),
            avatar: None,
            is_verified: false,
            auth_providers: Vec::new(),
            search_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Client view with gender translated to its localized label.
    pub fn to_view(&self) -> ProfileView {
        ProfileView {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            nickname: self.nickname.clone(),
            phone: self.phone.clone(),
            birthday: self.birthday,
            gender: self.gender.map(|gender| gender.label().to_string()),
            address: self.address.clone(),
            country: self.country.clone(),
            preferred_regions: self.preferred_regions.clone(),
            preferred_event_types: self.preferred_event_types.clone(),
            role: self.role.clone(),
            avatar: self.avatar.clone(),
            is_verified: self.is_verified,
            auth_providers: self.auth_providers.clone(),
            search_history: self.search_history.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
