//! What a backend draws for one frame of the bar.

use crate::animation::Circle;
use crate::backdrop::{Backdrop, Material};
use crate::button::ButtonAppearance;
use crate::geometry::Rect;

/// The shared highlight circle behind the active icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    /// Current circle in bar coordinates.
    pub circle: Circle,
    /// Material to fill it with.
    pub material: Material,
}

/// A resolved frame of a [`CurvedTabBar`](crate::CurvedTabBar).
///
/// Everything except [`frame`](Self::frame) is in bar coordinates, with the
/// origin at the bar's top-left corner. Raised icons and the highlight may
/// have negative y values; they overhang the bar's top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct BarScene<T> {
    /// The bar's frame in screen coordinates.
    pub frame: Rect,
    /// Notched material backdrop.
    pub backdrop: Backdrop,
    /// Highlight circle, absent until the bar has been laid out.
    pub highlight: Option<Highlight>,
    /// One entry per button, leading to trailing.
    pub buttons: Vec<ButtonAppearance<T>>,
    /// The selected tab.
    pub selected: T,
    /// Presentation value of the notch anchor.
    pub anchor: Option<f32>,
    /// Bottom padding scrollable content should reserve for the bar.
    pub content_bottom_inset: f32,
}

impl<T: PartialEq> BarScene<T> {
    /// The drawing state of `tab`'s button.
    #[must_use]
    pub fn button(&self, tab: &T) -> Option<&ButtonAppearance<T>> {
        self.buttons.iter().find(|button| button.tab == *tab)
    }
}
