//! Validation of partial profile updates.
//!
//! A [`ProfileUpdateRequest`] is turned into a [`ProfileChanges`] in one pass.
//! Every field is checked before anything is written to the entity, so a
//! rejected payload never leaves a half-applied profile behind.

use chrono::{DateTime, Datelike, NaiveDate};
use meetly_model::{EventType, Gender, Localized, ProfileUpdateRequest, Region};
use serde_json::Value;

use crate::{
    error::{ProfileError, Result},
    profile::UserProfile,
};

/// Tri-state update for a nullable column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    Clear,
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, FieldUpdate::Unchanged)
    }

    /// Writes the update into `slot`, leaving it alone when unchanged.
    pub fn apply(self, slot: &mut Option<T>) {
        match self {
            FieldUpdate::Unchanged => {}
            FieldUpdate::Clear => *slot = None,
            FieldUpdate::Set(value) => *slot = Some(value),
        }
    }
}

impl<T> From<Option<Option<T>>> for FieldUpdate<T> {
    fn from(value: Option<Option<T>>) -> Self {
        match value {
            None => FieldUpdate::Unchanged,
            Some(None) => FieldUpdate::Clear,
            Some(Some(value)) => FieldUpdate::Set(value),
        }
    }
}

/// Fully validated set of profile mutations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub name: FieldUpdate<String>,
    pub nickname: FieldUpdate<String>,
    pub phone: FieldUpdate<String>,
    pub address: FieldUpdate<String>,
    pub country: FieldUpdate<String>,
    pub birthday: FieldUpdate<NaiveDate>,
    pub gender: FieldUpdate<Gender>,
    pub preferred_regions: Option<Vec<Region>>,
    pub preferred_event_types: Option<Vec<EventType>>,
}

impl ProfileChanges {
    pub fn from_request(request: ProfileUpdateRequest) -> Result<Self> {
        let birthday = match request.birthday {
            None => FieldUpdate::Unchanged,
            Some(value) => parse_birthday(&value)?,
        };
        let gender = match request.gender {
            None => FieldUpdate::Unchanged,
            Some(value) => parse_gender(&value)?,
        };
        let preferred_regions = request
            .preferred_regions
            .map(|value| parse_canonical_list::<Region>(&value, "preferredRegions", "地区"))
            .transpose()?;
        let preferred_event_types = request
            .preferred_event_types
            .map(|value| {
                parse_canonical_list::<EventType>(&value, "preferredEventTypes", "活动类型")
            })
            .transpose()?;

        Ok(Self {
            name: request.name.into(),
            nickname: request.nickname.into(),
            phone: request.phone.into(),
            address: request.address.into(),
            country: request.country.into(),
            birthday,
            gender,
            preferred_regions,
            preferred_event_types,
        })
    }

    /// Names of the fields this change set touches, in wire spelling.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        let scalar = [
            ("name", self.name.is_unchanged()),
            ("nickname", self.nickname.is_unchanged()),
            ("phone", self.phone.is_unchanged()),
            ("address", self.address.is_unchanged()),
            ("country", self.country.is_unchanged()),
            ("birthday", self.birthday.is_unchanged()),
            ("gender", self.gender.is_unchanged()),
        ];
        for (field, unchanged) in scalar {
            if !unchanged {
                fields.push(field);
            }
        }
        if self.preferred_regions.is_some() {
            fields.push("preferredRegions");
        }
        if self.preferred_event_types.is_some() {
            fields.push("preferredEventTypes");
        }
        fields
    }

    pub fn apply_to(self, profile: &mut UserProfile) {
        self.name.apply(&mut profile.name);
        self.nickname.apply(&mut profile.nickname);
        self.phone.apply(&mut profile.phone);
        self.address.apply(&mut profile.address);
        self.country.apply(&mut profile.country);
        self.birthday.apply(&mut profile.birthday);
        self.gender.apply(&mut profile.gender);
        if let Some(regions) = self.preferred_regions {
            profile.preferred_regions = regions;
        }
        if let Some(event_types) = self.preferred_event_types {
            profile.preferred_event_types = event_types;
        }
    }
}

fn parse_birthday(value: &Value) -> Result<FieldUpdate<NaiveDate>> {
    let raw = match value {
        Value::Null => return Ok(FieldUpdate::Clear),
        Value::String(raw) => raw,
        _ => {
            return Err(ProfileError::InvalidData(
                "生日格式无效，应为日期字符串".to_string(),
            ));
        }
    };

    if raw.is_empty() {
        return Err(ProfileError::InvalidData("生日不能为空字符串".to_string()));
    }

    let date = parse_date(raw)
        .ok_or_else(|| ProfileError::InvalidData(format!("生日格式无效: {raw}")))?;
    if !BIRTHDAY_YEARS.contains(&date.year()) {
        return Err(ProfileError::InvalidData(format!("生日超出有效范围: {raw}")));
    }
    Ok(FieldUpdate::Set(date))
}

/// Four-digit years only. chrono parses far wider than the `date` column stores.
const BIRTHDAY_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only its date.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn parse_gender(value: &Value) -> Result<FieldUpdate<Gender>> {
    let raw = match value {
        Value::Null => return Ok(FieldUpdate::Clear),
        Value::String(raw) => raw,
        _ => {
            return Err(ProfileError::InvalidData(format!(
                "性别值类型无效，可选值: {}",
                Gender::label_list()
            )));
        }
    };

    if raw.is_empty() {
        return Err(ProfileError::InvalidData("性别不能为空字符串".to_string()));
    }

    Gender::resolve(raw).map(FieldUpdate::Set).ok_or_else(|| {
        ProfileError::InvalidData(format!(
            "无效的性别值: {raw}，可选值: {}",
            Gender::label_list()
        ))
    })
}

fn parse_canonical_list<T: Localized>(
    value: &Value,
    field: &str,
    noun: &str,
) -> Result<Vec<T>> {
    let Value::Array(items) = value else {
        return Err(ProfileError::InvalidData(format!("{field} 必须是数组")));
    };

    items
        .iter()
        .map(|item| {
            item.as_str()
                .and_then(|key| T::from_canonical(key))
                .ok_or_else(|| {
                    ProfileError::InvalidData(format!("{field} 包含无效的{noun}: {item}"))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn changes(body: Value) -> Result<ProfileChanges> {
        let request: ProfileUpdateRequest =
            serde_json::from_value(body).expect("request deserializes");
        ProfileChanges::from_request(request)
    }

    fn invalid_message(result: Result<ProfileChanges>) -> String {
        match result {
            Err(ProfileError::InvalidData(message)) => message,
            other => panic!("expected invalid data, got {other:?}"),
        }
    }

    #[test]
    fn birthday_null_clears_and_valid_date_sets() {
        assert_eq!(
            changes(json!({ "birthday": null })).unwrap().birthday,
            FieldUpdate::Clear
        );
        assert_eq!(
            changes(json!({ "birthday": "2020-01-01" })).unwrap().birthday,
            FieldUpdate::Set(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        );
    }

    #[test]
    fn birthday_accepts_rfc3339_timestamp() {
        assert_eq!(
            changes(json!({ "birthday": "1995-07-14T08:00:00+08:00" }))
                .unwrap()
                .birthday,
            FieldUpdate::Set(NaiveDate::from_ymd_opt(1995, 7, 14).unwrap())
        );
    }

    #[test]
    fn birthday_rejects_empty_garbage_and_impossible_dates() {
        invalid_message(changes(json!({ "birthday": "" })));
        invalid_message(changes(json!({ "birthday": "not-a-date" })));
        invalid_message(changes(json!({ "birthday": "2021-02-30" })));
        invalid_message(changes(json!({ "birthday": 20200101 })));
    }

    #[test]
    fn birthday_outside_storable_years_is_invalid_data() {
        let message = invalid_message(changes(json!({ "birthday": "-5000-01-01" })));
        assert!(message.contains("-5000-01-01"));
        invalid_message(changes(json!({ "birthday": "+12000-01-01" })));
        invalid_message(changes(json!({ "birthday": "0000-12-31" })));

        assert_eq!(
            changes(json!({ "birthday": "0001-01-01" })).unwrap().birthday,
            FieldUpdate::Set(NaiveDate::from_ymd_opt(1, 1, 1).unwrap())
        );
    }

    #[test]
    fn gender_accepts_canonical_and_localized_values() {
        assert_eq!(
            changes(json!({ "gender": "FEMALE" })).unwrap().gender,
            FieldUpdate::Set(Gender::Female)
        );
        assert_eq!(
            changes(json!({ "gender": "男" })).unwrap().gender,
            FieldUpdate::Set(Gender::Male)
        );
        assert_eq!(
            changes(json!({ "gender": null })).unwrap().gender,
            FieldUpdate::Clear
        );
    }

    #[test]
    fn gender_rejection_names_value_and_accepted_labels() {
        let message = invalid_message(changes(json!({ "gender": "不存在" })));
        assert!(message.contains("不存在"));
        assert!(message.contains("男、女、其他"));

        invalid_message(changes(json!({ "gender": "" })));
        invalid_message(changes(json!({ "gender": 1 })));
        invalid_message(changes(json!({ "gender": ["男"] })));
    }

    #[test]
    fn region_list_preserves_order() {
        let parsed = changes(json!({
            "preferredRegions": ["ONLINE", "BEIJING", "HONG_KONG"]
        }))
        .unwrap();
        assert_eq!(
            parsed.preferred_regions,
            Some(vec![Region::Online, Region::Beijing, Region::HongKong])
        );
    }

    #[test]
    fn region_list_rejects_unknown_members_and_non_arrays() {
        let message = invalid_message(changes(json!({
            "preferredRegions": ["BEIJING", "NOT_A_REGION"]
        })));
        assert!(message.contains("NOT_A_REGION"));

        invalid_message(changes(json!({ "preferredRegions": "BEIJING" })));
        invalid_message(changes(json!({ "preferredRegions": null })));
        // Localized labels are not accepted in list fields.
        invalid_message(changes(json!({ "preferredRegions": ["北京"] })));
    }

    #[test]
    fn event_type_list_validates_each_member() {
        let parsed = changes(json!({
            "preferredEventTypes": ["WORKSHOP", "MEETUP"]
        }))
        .unwrap();
        assert_eq!(
            parsed.preferred_event_types,
            Some(vec![EventType::Workshop, EventType::Meetup])
        );

        invalid_message(changes(json!({ "preferredEventTypes": [1, 2] })));
    }

    #[test]
    fn empty_list_is_valid_and_clears_preferences() {
        let parsed = changes(json!({ "preferredEventTypes": [] })).unwrap();
        assert_eq!(parsed.preferred_event_types, Some(vec![]));
    }

    #[test]
    fn apply_touches_only_present_fields() {
        let mut profile = UserProfile::new(Uuid::new_v4(), "wei@example.com");
        profile.name = Some("Wei".into());
        profile.phone = Some("13800000000".into());
        profile.gender = Some(Gender::Male);

        let parsed = changes(json!({
            "phone": null,
            "nickname": "小伟",
            "gender": "其他",
            "preferredRegions": ["SHENZHEN"],
        }))
        .unwrap();
        assert_eq!(
            parsed.changed_fields(),
            vec!["nickname", "phone", "gender", "preferredRegions"]
        );
        parsed.apply_to(&mut profile);

        assert_eq!(profile.name.as_deref(), Some("Wei"));
        assert_eq!(profile.nickname.as_deref(), Some("小伟"));
        assert_eq!(profile.phone, None);
        assert_eq!(profile.gender, Some(Gender::Other));
        assert_eq!(profile.preferred_regions, vec![Region::Shenzhen]);
        assert!(profile.preferred_event_types.is_empty());
    }

    #[test]
    fn rejected_payload_reports_first_invalid_field() {
        let message = invalid_message(changes(json!({
            "birthday": "2020-01-01",
            "gender": "不存在",
            "preferredRegions": ["NOT_A_REGION"],
        })));
        assert!(message.contains("不存在"));
    }
}
