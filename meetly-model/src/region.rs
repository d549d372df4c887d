use serde::{Deserialize, Serialize};

use crate::localized::Localized;

/// Regions a user can mark as preferred for discovering events.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Beijing,
    Shanghai,
    Guangzhou,
    Shenzhen,
    Hangzhou,
    Chengdu,
    HongKong,
    Singapore,
    Overseas,
    Online,
}

impl Localized for Region {
    const ALL: &'static [Self] = &[
        Region::Beijing,
        Region::Shanghai,
        Region::Guangzhou,
        Region::Shenzhen,
        Region::Hangzhou,
        Region::Chengdu,
        Region::HongKong,
        Region::Singapore,
        Region::Overseas,
        Region::Online,
    ];

    const SUB_LABELS: &'static [(&'static str, &'static str)] = &[
        ("BEIJING", "Beijing"),
        ("SHANGHAI", "Shanghai"),
        ("GUANGZHOU", "Guangzhou"),
        ("SHENZHEN", "Shenzhen"),
        ("HANGZHOU", "Hangzhou"),
        ("CHENGDU", "Chengdu"),
        ("HONG_KONG", "Hong Kong"),
        ("SINGAPORE", "Singapore"),
        ("OVERSEAS", "Overseas"),
        ("ONLINE", "Online"),
    ];

    fn canonical(self) -> &'static str {
        match self {
            Region::Beijing => "BEIJING",
            Region::Shanghai => "SHANGHAI",
            Region::Guangzhou => "GUANGZHOU",
            Region::Shenzhen => "SHENZHEN",
            Region::Hangzhou => "HANGZHOU",
            Region::Chengdu => "CHENGDU",
            Region::HongKong => "HONG_KONG",
            Region::Singapore => "SINGAPORE",
            Region::Overseas => "OVERSEAS",
            Region::Online => "ONLINE",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Region::Beijing => "北京",
            Region::Shanghai => "上海",
            Region::Guangzhou => "广州",
            Region::Shenzhen => "深圳",
            Region::Hangzhou => "杭州",
            Region::Chengdu => "成都",
            Region::HongKong => "香港",
            Region::Singapore => "新加坡",
            Region::Overseas => "海外",
            Region::Online => "线上",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_its_own_english_sub_label() {
        for region in Region::ALL {
            assert_ne!(region.sub_label(), region.canonical());
            assert!(!region.sub_label().is_empty());
        }
        assert_eq!(Region::HongKong.sub_label(), "Hong Kong");
    }

    #[test]
    fn canonical_keys_match_serde_representation() {
        for region in Region::ALL {
            let encoded = serde_json::to_value(region).unwrap();
            assert_eq!(encoded, serde_json::json!(region.canonical()));
        }
    }

    #[test]
    fn canonical_lookup_is_case_sensitive() {
        assert_eq!(Region::from_canonical("HONG_KONG"), Some(Region::HongKong));
        assert_eq!(Region::from_canonical("hong_kong"), None);
        assert_eq!(Region::from_canonical("NOT_A_REGION"), None);
    }
}
