//! Two-state visibility flag for the profile block.

/// Whether the profile details are currently displayed.
///
/// The only transition is [`Visibility::toggled`], which maps each state to
/// the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Profile block omitted (initial state)
    #[default]
    Hidden,
    /// Profile block displayed
    Shown,
}

impl Visibility {
    /// The other state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown)
    }

    /// Display name for logs
    pub fn display_name(self) -> &'static str {
        match self {
            Visibility::Hidden => "hidden",
            Visibility::Shown => "shown",
        }
    }
}

impl From<bool> for Visibility {
    fn from(shown: bool) -> Self {
        if shown {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

impl From<Visibility> for bool {
    fn from(visibility: Visibility) -> Self {
        visibility.is_shown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hidden() {
        assert_eq!(Visibility::default(), Visibility::Hidden);
        assert!(!Visibility::default().is_shown());
    }

    #[test]
    fn test_toggled_swaps_states() {
        assert_eq!(Visibility::Hidden.toggled(), Visibility::Shown);
        assert_eq!(Visibility::Shown.toggled(), Visibility::Hidden);
    }

    #[test]
    fn test_bool_conversions_agree() {
        for shown in [false, true] {
            let visibility = Visibility::from(shown);
            assert_eq!(bool::from(visibility), shown);
            // Toggling the enum matches negating the bool
            assert_eq!(bool::from(visibility.toggled()), !shown);
        }
    }
}
