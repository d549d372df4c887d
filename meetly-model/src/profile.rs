//! Wire shapes for the profile endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{EventType, Region};

/// Profile as returned to the owning user.
///
/// `gender` carries the localized label, not the canonical key. Region and
/// event-type preferences stay canonical so clients can submit them back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
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

/// Partial profile update as submitted by a client.
///
/// Outer `None` means the field was absent and stays untouched. For the plain
/// text fields `Some(None)` clears the column. The four validated fields keep
/// the raw JSON so that wrong types and empty strings can be rejected with a
/// precise message instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub preferred_regions: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub preferred_event_types: Option<Value>,
}

impl ProfileUpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.nickname.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.country.is_none()
            && self.birthday.is_none()
            && self.gender.is_none()
            && self.preferred_regions.is_none()
            && self.preferred_event_types.is_none()
    }
}

// Only invoked when the key exists, so an explicit `null` survives as
// `Some(Value::Null)` / `Some(None)` instead of collapsing into "absent".
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
