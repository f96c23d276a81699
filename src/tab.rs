//! The fixed set of sections a tab bar switches between.

use core::fmt::Debug;

/// An ordered, compile-time set of tabs.
///
/// Implement this for an application's own enum to give the bar its
/// sections. `Default` must be the first entry of [`ALL`](Self::ALL); it is
/// the selection before any tap.
pub trait TabItem: Copy + Eq + Debug + Default + 'static {
    /// Every tab in display order, leading to trailing.
    const ALL: &'static [Self];

    /// Symbol name of the tab's icon.
    fn icon(self) -> &'static str;

    /// Human-readable name, used for accessibility labels and logs.
    fn title(self) -> &'static str;

    /// True for the leading tab.
    fn is_first(self) -> bool {
        Self::ALL.first() == Some(&self)
    }
}

/// The default four-section layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Home feed.
    #[default]
    Home,
    /// Search.
    Search,
    /// Notifications.
    Notifications,
    /// The user's account.
    Account,
}

impl TabItem for Tab {
    const ALL: &'static [Self] = &[Self::Home, Self::Search, Self::Notifications, Self::Account];

    fn icon(self) -> &'static str {
        match self {
            Self::Home => "house.fill",
            Self::Search => "magnifyingglass",
            Self::Notifications => "bell.fill",
            Self::Account => "person.fill",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Notifications => "Notifications",
            Self::Account => "Account",
        }
    }
}

impl core::str::FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.title().eq_ignore_ascii_case(s) || tab.icon() == s)
            .ok_or_else(|| UnknownTab(s.to_owned()))
    }
}

/// Returned when a string names no known [`Tab`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab `{0}`")]
pub struct UnknownTab(pub String);
