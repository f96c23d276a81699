//! Safe-area insets and the fallbacks used when the platform cannot report them.
//!
//! A live device reports how much of the screen edge is reserved for system
//! chrome (home indicator, status bar). Previews and headless hosts report
//! nothing, so the bar falls back to fixed paddings instead of failing.

use serde::{Deserialize, Serialize};

/// Insets reserved by the platform on each edge, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Top inset.
    pub top: f32,
    /// Leading inset.
    pub leading: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Trailing inset.
    pub trailing: f32,
}

impl EdgeInsets {
    /// No insets on any edge.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates insets from explicit values.
    #[must_use]
    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Insets with only a bottom value, the common phone case.
    #[must_use]
    pub const fn bottom(bottom: f32) -> Self {
        Self::new(0.0, 0.0, bottom, 0.0)
    }
}

/// Source of the current safe-area insets.
pub trait SafeAreaProvider {
    /// Current insets, or `None` when the platform cannot tell.
    fn insets(&self) -> Option<EdgeInsets>;
}

/// Insets known up front, as reported by a live window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedSafeArea(pub EdgeInsets);

impl SafeAreaProvider for FixedSafeArea {
    fn insets(&self) -> Option<EdgeInsets> {
        Some(self.0)
    }
}

/// A host that never knows its insets, like a design preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewSafeArea;

impl SafeAreaProvider for PreviewSafeArea {
    fn insets(&self) -> Option<EdgeInsets> {
        None
    }
}

impl SafeAreaProvider for Option<EdgeInsets> {
    fn insets(&self) -> Option<EdgeInsets> {
        *self
    }
}

/// Paddings derived from the bottom inset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BottomPadding {
    /// Bar padding below the buttons when no inset is known.
    pub bar_fallback: f32,
    /// Amount the bar tucks into a known inset.
    pub bar_overlap: f32,
    /// Space scrollable content reserves for the bar itself.
    pub content_bar_clearance: f32,
    /// Extra content padding when no inset is known.
    pub content_fallback: f32,
}

impl Default for BottomPadding {
    fn default() -> Self {
        Self {
            bar_fallback: 10.0,
            bar_overlap: 10.0,
            content_bar_clearance: 60.0,
            content_fallback: 15.0,
        }
    }
}

impl BottomPadding {
    /// Padding below the bar's buttons.
    ///
    /// A missing or zero inset resolves to [`bar_fallback`](Self::bar_fallback).
    /// A known inset is reduced by [`bar_overlap`](Self::bar_overlap), never below zero.
    #[must_use]
    pub fn bar(&self, insets: Option<EdgeInsets>) -> f32 {
        match known_bottom(insets) {
            Some(bottom) => (bottom - self.bar_overlap).max(0.0),
            None => self.bar_fallback,
        }
    }

    /// Bottom padding scrollable content needs so the bar never covers it.
    #[must_use]
    pub fn content(&self, insets: Option<EdgeInsets>) -> f32 {
        self.content_bar_clearance + known_bottom(insets).unwrap_or(self.content_fallback)
    }
}

fn known_bottom(insets: Option<EdgeInsets>) -> Option<f32> {
    insets
        .map(|insets| insets.bottom)
        .filter(|bottom| bottom.is_finite() && *bottom > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_insets_use_fallback() {
        let padding = BottomPadding::default();
        assert_eq!(padding.bar(PreviewSafeArea.insets()), 10.0);
        assert_eq!(padding.content(PreviewSafeArea.insets()), 75.0);
    }

    #[test]
    fn zero_inset_counts_as_unavailable() {
        let padding = BottomPadding::default();
        assert_eq!(padding.bar(Some(EdgeInsets::ZERO)), 10.0);
    }

    #[test]
    fn known_inset_tucks_the_bar_in() {
        let padding = BottomPadding::default();
        let phone = FixedSafeArea(EdgeInsets::bottom(34.0));
        assert_eq!(padding.bar(phone.insets()), 24.0);
        assert_eq!(padding.content(phone.insets()), 94.0);
    }

    #[test]
    fn small_inset_never_goes_negative() {
        let padding = BottomPadding::default();
        assert_eq!(padding.bar(Some(EdgeInsets::bottom(4.0))), 0.0);
    }
}
