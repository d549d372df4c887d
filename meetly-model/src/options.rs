use serde::Serialize;

use crate::localized::Localized;

/// One selectable entry in a picker list.
///
/// Clients submit back the canonical key, but the picker shows and echoes the
/// localized label, so `label` and `value` carry the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionEntry {
    pub label: &'static str,
    pub value: &'static str,
    pub sub_label: &'static str,
}

impl OptionEntry {
    pub fn from_member<T: Localized>(member: T) -> Self {
        Self {
            label: member.label(),
            value: member.label(),
            sub_label: member.sub_label(),
        }
    }

    /// Builds the full option list for an enumeration, in display order.
    pub fn list<T: Localized>() -> Vec<Self> {
        T::ALL.iter().copied().map(Self::from_member).collect()
    }
}
