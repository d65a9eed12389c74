use std::fmt;

/// State prefixes a utility can be wrapped in (`hover:bg-ctp-mauve`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    Hover,
    Focus,
    FocusVisible,
    Active,
    Disabled,
    GroupHover,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Hover,
        Variant::Focus,
        Variant::FocusVisible,
        Variant::Active,
        Variant::Disabled,
        Variant::GroupHover,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Hover => "hover",
            Variant::Focus => "focus",
            Variant::FocusVisible => "focus-visible",
            Variant::Active => "active",
            Variant::Disabled => "disabled",
            Variant::GroupHover => "group-hover",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// Wrap an already-escaped class selector.
    pub fn apply(self, selector: &str) -> String {
        match self {
            Variant::GroupHover => format!(".group:hover {selector}"),
            other => format!("{selector}:{}", other.name()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_name(variant.name()), Some(variant));
        }
        assert_eq!(Variant::from_name("sm"), None);
    }

    #[test]
    fn selectors() {
        assert_eq!(
            Variant::Hover.apply(".hover\\:text-ctp-mauve"),
            ".hover\\:text-ctp-mauve:hover"
        );
        assert_eq!(
            Variant::GroupHover.apply(".group-hover\\:opacity"),
            ".group:hover .group-hover\\:opacity"
        );
    }
}
