use serde::{Deserialize, Serialize};

use crate::localized::Localized;

/// Gender recorded on a user profile.
///
/// Persisted by canonical key (`MALE`, `FEMALE`, `OTHER`); clients see the
/// Chinese label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Localized for Gender {
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female, Gender::Other];
    const SUB_LABELS: &'static [(&'static str, &'static str)] = &[
        ("MALE", "Male"),
        ("FEMALE", "Female"),
        ("OTHER", "Other"),
    ];

    fn canonical(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
            Gender::Other => "其他",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
