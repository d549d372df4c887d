/// A closed enumeration whose members are stored by canonical key and shown
/// to users by a Chinese display label.
///
/// Translation is total in the canonical → label direction and partial in the
/// other: arbitrary input text resolves to `None` when no member matches.
pub trait Localized: Copy + Eq + 'static {
    /// Every member, in display order.
    const ALL: &'static [Self];

    /// English sub-labels keyed by canonical value. Members missing from this
    /// table fall back to their canonical key.
    const SUB_LABELS: &'static [(&'static str, &'static str)];

    /// Canonical key persisted in the data store.
    fn canonical(self) -> &'static str;

    /// Localized display label.
    fn label(self) -> &'static str;

    fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.canonical() == value)
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.label() == label)
    }

    /// Accepts either a canonical key or a localized label, canonical first.
    fn resolve(input: &str) -> Option<Self> {
        Self::from_canonical(input).or_else(|| Self::from_label(input))
    }

    fn sub_label(self) -> &'static str {
        let key = self.canonical();
        Self::SUB_LABELS
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, sub_label)| *sub_label)
            .unwrap_or(key)
    }

    /// All localized labels joined for use in error messages.
    fn label_list() -> String {
        Self::ALL
            .iter()
            .map(|member| member.label())
            .collect::<Vec<_>>()
            .join("、")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Sample {
        Listed,
        Unlisted,
    }

    impl Localized for Sample {
        const ALL: &'static [Self] = &[Sample::Listed, Sample::Unlisted];
        const SUB_LABELS: &'static [(&'static str, &'static str)] =
            &[("LISTED", "Listed")];

        fn canonical(self) -> &'static str {
            match self {
                Sample::Listed => "LISTED",
                Sample::Unlisted => "UNLISTED",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Sample::Listed => "列出",
                Sample::Unlisted => "未列出",
            }
        }
    }

    #[test]
    fn sub_label_falls_back_to_canonical_key() {
        assert_eq!(Sample::Listed.sub_label(), "Listed");
        assert_eq!(Sample::Unlisted.sub_label(), "UNLISTED");
    }

    #[test]
    fn resolve_prefers_canonical_then_label() {
        assert_eq!(Sample::resolve("LISTED"), Some(Sample::Listed));
        assert_eq!(Sample::resolve("未列出"), Some(Sample::Unlisted));
        assert_eq!(Sample::resolve("listed"), None);
        assert_eq!(Sample::resolve(""), None);
    }

    #[test]
    fn label_list_keeps_display_order() {
        assert_eq!(Sample::label_list(), "列出、未列出");
    }
}
