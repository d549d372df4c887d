use serde::{Deserialize, Serialize};

use crate::localized::Localized;

/// Kinds of events a user can follow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Conference,
    Meetup,
    Workshop,
    Exhibition,
    Performance,
    Sports,
    Networking,
    Volunteer,
    Other,
}

impl Localized for EventType {
    const ALL: &'static [Self] = &[
        EventType::Conference,
        EventType::Meetup,
        EventType::Workshop,
        EventType::Exhibition,
        EventType::Performance,
        EventType::Sports,
        EventType::Networking,
        EventType::Volunteer,
        EventType::Other,
    ];

    const SUB_LABELS: &'static [(&'static str, &'static str)] = &[
        ("CONFERENCE", "Conference"),
        ("MEETUP", "Meetup"),
        ("WORKSHOP", "Workshop"),
        ("EXHIBITION", "Exhibition"),
        ("PERFORMANCE", "Performance"),
        ("SPORTS", "Sports"),
        ("NETWORKING", "Networking"),
        ("VOLUNTEER", "Volunteer"),
        ("OTHER", "Other"),
    ];

    fn canonical(self) -> &'static str {
        match self {
            EventType::Conference => "CONFERENCE",
            EventType::Meetup => "MEETUP",
            EventType::Workshop => "WORKSHOP",
            EventType::Exhibition => "EXHIBITION",
            EventType::Performance => "PERFORMANCE",
            EventType::Sports => "SPORTS",
            EventType::Networking => "NETWORKING",
            EventType::Volunteer => "VOLUNTEER",
            EventType::Other => "OTHER",
        }
    }

    fn label(self) -> &'static str {
        match self {
            EventType::Conference => "会议",
            EventType::Meetup => "聚会",
            EventType::Workshop => "工作坊",
            EventType::Exhibition => "展览",
            EventType::Performance => "演出",
            EventType::Sports => "体育",
            EventType::Networking => "社交",
            EventType::Volunteer => "志愿活动",
            EventType::Other => "其他",
        }
    }
}
