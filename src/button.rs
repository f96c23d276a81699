//! A single tab button: measurement, taps and the raised/lowered visual state.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{Animated, Circle, Spring};
use crate::controller::SelectionController;
use crate::geometry::{Point, Rect, Size};
use crate::tab::TabItem;

/// Fixed sizes of the button row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonMetrics {
    /// Side of the square icon box.
    pub icon_size: f32,
    /// Padding around the active icon; also the highlight ring's thickness.
    pub selected_padding: f32,
    /// How far the active icon rises above its resting position.
    pub elevation: f32,
    /// Height of the button row.
    pub row_height: f32,
    /// Bar padding above and below the button row.
    pub vertical_padding: f32,
}

impl Default for ButtonMetrics {
    fn default() -> Self {
        Self {
            icon_size: 25.0,
            selected_padding: 15.0,
            elevation: 50.0,
            row_height: 30.0,
            vertical_padding: 16.0,
        }
    }
}

impl ButtonMetrics {
    /// Radius of the highlight circle behind the active icon.
    #[must_use]
    pub fn highlight_radius(&self) -> f32 {
        self.icon_size / 2.0 + self.selected_padding
    }
}

/// Everything a backend needs to draw one button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonAppearance<T> {
    /// The tab this button selects.
    pub tab: T,
    /// Icon symbol name.
    pub icon: &'static str,
    /// Center of the icon in bar coordinates, vertical offset included.
    pub icon_center: Point,
    /// Size of the icon box.
    pub icon_size: Size,
    /// Current vertical offset; negative values are raised.
    pub offset_y: f32,
    /// Current padding around the icon.
    pub padding: f32,
    /// Whether this button's tab is selected.
    pub selected: bool,
}

/// One button of the bar.
#[derive(Debug, Clone)]
pub struct TabButton<T> {
    tab: T,
    frame: Option<Rect>,
    selected: bool,
    offset: Animated,
    padding: Animated,
}

impl<T: TabItem> TabButton<T> {
    /// Creates a button, already in its selected or resting state.
    #[must_use]
    pub fn new(tab: T, selected: bool, metrics: &ButtonMetrics, spring: Spring) -> Self {
        let (offset, padding) = resting_state(selected, metrics);
        Self {
            tab,
            frame: None,
            selected,
            offset: Animated::new(offset, spring),
            padding: Animated::new(padding, spring),
        }
    }

    /// The tab this button selects.
    #[must_use]
    pub const fn tab(&self) -> T {
        self.tab
    }

    /// Frame in bar coordinates, once laid out.
    #[must_use]
    pub const fn frame(&self) -> Option<Rect> {
        self.frame
    }

    /// Horizontal midpoint in bar coordinates, once laid out.
    #[must_use]
    pub fn midpoint(&self) -> Option<f32> {
        self.frame.map(|frame| frame.mid_x())
    }

    /// Whether this button currently shows the selected state.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Records the measured frame.
    ///
    /// `frame` is in global coordinates and `container` is the bar's global
    /// origin. The leading button seeds the controller's anchor when none
    /// exists yet; returns `true` when it did.
    pub fn on_layout(
        &mut self,
        frame: Rect,
        container: Point,
        controller: &SelectionController<T>,
    ) -> bool {
        let local = Rect::new(
            Point::new(frame.x() - container.x, frame.y() - container.y),
            frame.size(),
        );
        self.frame = Some(local);

        self.tab.is_first() && controller.seed_anchor(local.mid_x())
    }

    /// Selects this button's tab with its current midpoint as the anchor.
    ///
    /// A button that has not been laid out yet has no midpoint and ignores
    /// the tap. Returns whether a selection happened.
    pub fn on_tap(&self, controller: &SelectionController<T>) -> bool {
        let Some(mid) = self.midpoint() else {
            tracing::debug!(tab = self.tab.title(), "tap before layout ignored");
            return false;
        };
        controller.select_tab(self.tab, mid);
        true
    }

    /// Hit-test in bar coordinates.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.frame.is_some_and(|frame| frame.contains(point))
    }

    /// Switches between the raised and resting state with a spring.
    pub(crate) fn set_selected(&mut self, selected: bool, metrics: &ButtonMetrics) {
        self.selected = selected;
        let (offset, padding) = resting_state(selected, metrics);
        self.offset.retarget(offset);
        self.padding.retarget(padding);
    }

    /// Advances the button's springs; returns whether they are still moving.
    pub(crate) fn tick(&mut self, dt: Duration) -> bool {
        let offset = self.offset.tick(dt);
        let padding = self.padding.tick(dt);
        offset || padding
    }

    /// True while the raise or lower animation is running.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        !(self.offset.is_settled() && self.padding.is_settled())
    }

    /// Where the highlight circle sits once this button is fully raised.
    #[must_use]
    pub fn highlight_target(&self, metrics: &ButtonMetrics) -> Option<Circle> {
        let frame = self.frame?;
        Some(Circle::new(
            Point::new(frame.mid_x(), frame.mid_y() - metrics.elevation),
            metrics.highlight_radius(),
        ))
    }

    /// The current drawing state, or `None` before layout.
    #[must_use]
    pub fn appearance(&self, metrics: &ButtonMetrics) -> Option<ButtonAppearance<T>> {
        let frame = self.frame?;
        let offset_y = self.offset.value();
        Some(ButtonAppearance {
            tab: self.tab,
            icon: self.tab.icon(),
            icon_center: frame.center().offset(0.0, offset_y),
            icon_size: Size::new(metrics.icon_size, metrics.icon_size),
            offset_y,
            padding: self.padding.value(),
            selected: self.selected,
        })
    }
}

/// Offset and padding a button settles at.
fn resting_state(selected: bool, metrics: &ButtonMetrics) -> (f32, f32) {
    if selected {
        (-metrics.elevation, metrics.selected_padding)
    } else {
        (0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::Tab;

    fn laid_out(tab: Tab, x: f32, controller: &SelectionController<Tab>) -> TabButton<Tab> {
        let metrics = ButtonMetrics::default();
        let mut button = TabButton::new(tab, false, &metrics, Spring::default());
        let frame = Rect::new(Point::new(x, 816.0), Size::new(100.0, 30.0));
        button.on_layout(frame, Point::new(0.0, 800.0), controller);
        button
    }

    #[test]
    fn layout_converts_to_bar_coordinates() {
        let controller = SelectionController::new();
        let button = laid_out(Tab::Search, 100.0, &controller);
        assert_eq!(
            button.frame(),
            Some(Rect::new(Point::new(100.0, 16.0), Size::new(100.0, 30.0)))
        );
        assert_eq!(button.midpoint(), Some(150.0));
    }

    #[test]
    fn only_the_first_button_bootstraps() {
        let controller = SelectionController::new();
        laid_out(Tab::Search, 100.0, &controller);
        assert_eq!(controller.anchor(), None);

        laid_out(Tab::Home, 0.0, &controller);
        assert_eq!(controller.anchor(), Some(50.0));

        // A second layout pass does not move an established anchor.
        laid_out(Tab::Home, 10.0, &controller);
        assert_eq!(controller.anchor(), Some(50.0));
    }

    #[test]
    fn tap_selects_with_midpoint() {
        let controller = SelectionController::new();
        let button = laid_out(Tab::Notifications, 200.0, &controller);
        assert!(button.on_tap(&controller));
        assert_eq!(controller.selected(), Tab::Notifications);
        assert_eq!(controller.anchor(), Some(250.0));
    }

    #[test]
    fn tap_before_layout_is_ignored() {
        let controller = SelectionController::new();
        let button = TabButton::new(
            Tab::Account,
            false,
            &ButtonMetrics::default(),
            Spring::default(),
        );
        assert!(!button.on_tap(&controller));
        assert_eq!(controller.selected(), Tab::Home);
    }

    #[test]
    fn selected_button_rises() {
        let metrics = ButtonMetrics::default();
        let controller = SelectionController::new();
        let mut button = laid_out(Tab::Search, 100.0, &controller);

        button.set_selected(true, &metrics);
        while button.tick(Duration::from_millis(16)) {}

        let appearance = button.appearance(&metrics).unwrap();
        assert!(appearance.selected);
        assert_eq!(appearance.offset_y, -50.0);
        assert_eq!(appearance.padding, 15.0);
        assert_eq!(appearance.icon_center, Point::new(150.0, -19.0));
        assert_eq!(
            button.highlight_target(&metrics),
            Some(Circle::new(Point::new(150.0, -19.0), 27.5))
        );
    }
}
