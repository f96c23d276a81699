//! The curved tab bar: buttons, notch and highlight composed into one component.

use core::cell::Cell;
use core::fmt;
use core::time::Duration;
use std::rc::Rc;

use crate::animation::{Animated, Circle, ShapeMorph, TweenMorph};
use crate::backdrop::Backdrop;
use crate::button::TabButton;
use crate::config::TabBarStyle;
use crate::controller::{Selection, SelectionController, Subscription};
use crate::geometry::{Point, Rect, Size};
use crate::path::Path;
use crate::safe_area::{EdgeInsets, SafeAreaProvider};
use crate::scene::{BarScene, Highlight};
use crate::tab::TabItem;

/// A bottom tab bar whose backdrop dips into a notch under the active tab.
///
/// The bar is driven by three calls from the host:
///
/// 1. [`layout`](Self::layout) whenever the screen size is known or changes;
/// 2. [`tap`](Self::tap) for pointer input;
/// 3. [`tick`](Self::tick) once per frame, followed by [`scene`](Self::scene)
///    to get what to draw.
///
/// Selection changes are published by the [`SelectionController`]. The bar
/// subscribes to it and picks up changes on the next tick, including
/// selections made through a cloned controller.
pub struct CurvedTabBar<T: TabItem> {
    style: TabBarStyle,
    controller: SelectionController<T>,
    buttons: Vec<TabButton<T>>,
    insets: Option<EdgeInsets>,
    frame: Option<Rect>,
    anchor: Option<Animated>,
    highlight: Option<TweenMorph<Circle>>,
    shown: Selection<T>,
    dirty: Rc<Cell<bool>>,
    _subscription: Subscription<T>,
}

impl<T: TabItem> CurvedTabBar<T> {
    /// Creates a bar with the first tab selected.
    ///
    /// Safe-area insets are read once from `safe_area`. A provider that
    /// cannot report insets makes the bar use its fallback padding.
    #[must_use]
    pub fn new(style: TabBarStyle, safe_area: &impl SafeAreaProvider) -> Self {
        let controller = SelectionController::new();
        let shown = controller.selection();
        let buttons = T::ALL
            .iter()
            .map(|tab| TabButton::new(*tab, *tab == shown.tab, &style.buttons, style.spring))
            .collect();

        let dirty = Rc::new(Cell::new(false));
        let subscription = controller.subscribe({
            let dirty = Rc::clone(&dirty);
            move |_| dirty.set(true)
        });

        Self {
            style,
            controller,
            buttons,
            insets: safe_area.insets(),
            frame: None,
            anchor: None,
            highlight: None,
            shown,
            dirty,
            _subscription: subscription,
        }
    }

    /// The controller holding the selection.
    #[must_use]
    pub const fn controller(&self) -> &SelectionController<T> {
        &self.controller
    }

    /// The active tab.
    #[must_use]
    pub fn selected(&self) -> T {
        self.controller.selected()
    }

    /// The style the bar was built with.
    #[must_use]
    pub const fn style(&self) -> &TabBarStyle {
        &self.style
    }

    /// The bar's frame in screen coordinates, once laid out.
    #[must_use]
    pub const fn frame(&self) -> Option<Rect> {
        self.frame
    }

    /// The buttons, leading to trailing.
    #[must_use]
    pub fn buttons(&self) -> &[TabButton<T>] {
        &self.buttons
    }

    /// Padding below the button row.
    #[must_use]
    pub fn bottom_padding(&self) -> f32 {
        self.style.bottom_padding.bar(self.insets)
    }

    /// Bottom padding scrollable content should add so the bar never hides it.
    #[must_use]
    pub fn content_bottom_inset(&self) -> f32 {
        self.style.bottom_padding.content(self.insets)
    }

    /// Total bar height for the current insets.
    #[must_use]
    pub fn height(&self) -> f32 {
        let metrics = &self.style.buttons;
        metrics.vertical_padding.mul_add(2.0, metrics.row_height) + self.bottom_padding()
    }

    /// Lays the bar out along the bottom edge of a `screen`-sized window.
    ///
    /// Buttons share the width equally. The first layout seeds the notch
    /// under the leading tab. A later layout that resizes the bar moves the
    /// notch with the selected button, without animating. A layout at the
    /// same size leaves running animations alone.
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(&mut self, screen: Size) {
        let height = self.height();
        let frame = Rect::new(
            Point::new(0.0, screen.height - height),
            Size::new(screen.width.max(0.0), height),
        );
        let resized = self.frame.is_none_or(|previous| previous.size() != frame.size());
        self.frame = Some(frame);

        if self.buttons.is_empty() {
            return;
        }

        let metrics = self.style.buttons;
        let width = frame.width() / self.buttons.len() as f32;
        for (index, button) in self.buttons.iter_mut().enumerate() {
            let global = Rect::new(
                Point::new(
                    (index as f32).mul_add(width, frame.x()),
                    frame.y() + metrics.vertical_padding,
                ),
                Size::new(width, metrics.row_height),
            );
            if button.on_layout(global, frame.origin(), &self.controller) {
                tracing::debug!(tab = button.tab().title(), "curve anchor bootstrapped");
            }
        }

        let selection = self.controller.selection();
        if let (Some(_), Some(mid)) = (selection.anchor, self.midpoint_of(selection.tab)) {
            self.controller.relocate_anchor(mid);
        }

        if resized {
            self.sync(true);
        } else if self.dirty.get() {
            self.sync(false);
        }
    }

    /// Dispatches a tap at `point` in screen coordinates.
    ///
    /// Returns the tab that became selected, or `None` if the point misses
    /// every button.
    pub fn tap(&mut self, point: Point) -> Option<T> {
        let frame = self.frame?;
        let local = Point::new(point.x - frame.x(), point.y - frame.y());
        let button = self.buttons.iter().find(|button| button.contains(local))?;
        button.on_tap(&self.controller).then(|| button.tab())
    }

    /// Selects `tab` as if its button had been tapped.
    ///
    /// Returns `false` before the first layout, when no midpoint is known.
    pub fn select(&mut self, tab: T) -> bool {
        self.buttons
            .iter()
            .find(|button| button.tab() == tab)
            .is_some_and(|button| button.on_tap(&self.controller))
    }

    /// Advances all animations by `dt`.
    ///
    /// Pending selection changes are applied first. Returns whether anything
    /// is still moving, so the host can stop requesting frames.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.dirty.get() {
            self.sync(false);
        }

        let mut moving = false;
        if let Some(anchor) = &mut self.anchor {
            moving |= anchor.tick(dt);
        }
        for button in &mut self.buttons {
            moving |= button.tick(dt);
        }
        if let Some(highlight) = &mut self.highlight {
            if !highlight.is_finished() {
                highlight.advance(dt);
                moving |= !highlight.is_finished();
            }
        }
        moving
    }

    /// True while any part of the bar is still animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.dirty.get()
            || self.anchor.is_some_and(|anchor| !anchor.is_settled())
            || self.highlight.is_some_and(|highlight| !highlight.is_finished())
            || self.buttons.iter().any(TabButton::is_moving)
    }

    /// The backdrop clip for the current presentation anchor.
    ///
    /// Empty before layout or when the bar has no area.
    #[must_use]
    pub fn curve_path(&self) -> Path {
        match (self.frame, self.anchor) {
            (Some(frame), Some(anchor)) => self.style.curve.path(anchor.value(), frame.size()),
            _ => Path::new(),
        }
    }

    /// Resolves the current frame for drawing, or `None` before layout.
    #[must_use]
    pub fn scene(&self) -> Option<BarScene<T>> {
        let frame = self.frame?;
        let metrics = &self.style.buttons;

        Some(BarScene {
            frame,
            backdrop: Backdrop::new(self.style.bar_material, self.curve_path()),
            highlight: self.highlight.map(|morph| Highlight {
                circle: morph.current(),
                material: self.style.highlight_material,
            }),
            buttons: self
                .buttons
                .iter()
                .filter_map(|button| button.appearance(metrics))
                .collect(),
            selected: self.shown.tab,
            anchor: self.anchor.map(|anchor| anchor.value()),
            content_bottom_inset: self.content_bottom_inset(),
        })
    }

    fn midpoint_of(&self, tab: T) -> Option<f32> {
        self.buttons
            .iter()
            .find(|button| button.tab() == tab)
            .and_then(TabButton::midpoint)
    }

    /// Pushes the controller's selection into the animation state.
    ///
    /// `snap` jumps straight to the new state instead of animating.
    fn sync(&mut self, snap: bool) {
        self.dirty.set(false);
        let selection = self.controller.selection();
        let metrics = self.style.buttons;

        if selection.tab != self.shown.tab {
            for button in &mut self.buttons {
                button.set_selected(button.tab() == selection.tab, &metrics);
            }
        }

        if let Some(target) = selection.anchor {
            match &mut self.anchor {
                Some(anchor) if !snap => {
                    tracing::trace!(from = anchor.value(), to = target, "retargeting curve anchor");
                    anchor.retarget(target);
                }
                Some(anchor) => anchor.snap_to(target),
                None => self.anchor = Some(Animated::new(target, self.style.spring)),
            }
        }

        let target = self
            .buttons
            .iter()
            .find(|button| button.tab() == selection.tab)
            .and_then(|button| button.highlight_target(&metrics));
        if let Some(target) = target {
            match &mut self.highlight {
                Some(morph) if !snap => {
                    if morph.destination() != target {
                        morph.retarget(target, self.style.morph_duration());
                    }
                }
                _ => self.highlight = Some(TweenMorph::resting(target)),
            }
        }

        self.shown = selection;
    }
}

impl<T: TabItem> fmt::Debug for CurvedTabBar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurvedTabBar")
            .field("selected", &self.shown.tab)
            .field("frame", &self.frame)
            .field("anchor", &self.anchor.map(|anchor| anchor.value()))
            .field("buttons", &self.buttons.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safe_area::{FixedSafeArea, PreviewSafeArea};
    use crate::tab::Tab;

    const SCREEN: Size = Size::new(400.0, 800.0);
    const FRAME: Duration = Duration::from_millis(16);

    fn settle(bar: &mut CurvedTabBar<Tab>) {
        for _ in 0..1_000 {
            if !bar.tick(FRAME) {
                return;
            }
        }
        panic!("tab bar never settled");
    }

    fn laid_out() -> CurvedTabBar<Tab> {
        let mut bar = CurvedTabBar::new(TabBarStyle::default(), &PreviewSafeArea);
        bar.layout(SCREEN);
        bar
    }

    #[test]
    fn preview_uses_fallback_padding() {
        let bar = laid_out();
        assert_eq!(bar.bottom_padding(), 10.0);
        assert_eq!(bar.height(), 72.0);
        assert_eq!(
            bar.frame(),
            Some(Rect::new(Point::new(0.0, 728.0), Size::new(400.0, 72.0)))
        );
    }

    #[test]
    fn device_insets_raise_the_row() {
        let bar = CurvedTabBar::<Tab>::new(
            TabBarStyle::default(),
            &FixedSafeArea(EdgeInsets::bottom(34.0)),
        );
        assert_eq!(bar.bottom_padding(), 24.0);
        assert_eq!(bar.content_bottom_inset(), 94.0);
    }

    #[test]
    fn bootstrap_centers_notch_on_first_tab() {
        let bar = laid_out();
        assert_eq!(bar.controller().anchor(), Some(50.0));

        let scene = bar.scene().unwrap();
        assert_eq!(scene.anchor, Some(50.0));
        assert_eq!(scene.selected, Tab::Home);
        assert!(!scene.backdrop.is_empty());
        assert!(!bar.is_animating());
    }

    #[test]
    fn nothing_to_draw_before_layout() {
        let bar = CurvedTabBar::<Tab>::new(TabBarStyle::default(), &PreviewSafeArea);
        assert!(bar.scene().is_none());
        assert!(bar.curve_path().is_empty());
    }

    #[test]
    fn select_before_layout_is_ignored() {
        let mut bar = CurvedTabBar::<Tab>::new(TabBarStyle::default(), &PreviewSafeArea);
        assert!(!bar.select(Tab::Account));
        assert_eq!(bar.selected(), Tab::Home);
    }

    #[test]
    fn every_tab_selects_with_its_midpoint() {
        let mut bar = laid_out();
        for (tab, mid) in Tab::ALL.iter().zip([50.0, 150.0, 250.0, 350.0]) {
            assert!(bar.select(*tab));
            assert_eq!(bar.selected(), *tab);
            assert_eq!(bar.controller().anchor(), Some(mid));
        }
    }

    #[test]
    fn tap_hits_the_button_under_the_point() {
        let mut bar = laid_out();
        let row_y = 728.0 + 16.0 + 15.0;

        assert_eq!(bar.tap(Point::new(399.0, row_y)), Some(Tab::Account));
        assert_eq!(bar.tap(Point::new(120.0, row_y)), Some(Tab::Search));
        assert_eq!(bar.tap(Point::new(120.0, 10.0)), None);
        assert_eq!(bar.selected(), Tab::Search);
    }

    #[test]
    fn notch_animates_toward_new_selection() {
        let mut bar = laid_out();
        bar.select(Tab::Notifications);

        assert!(bar.tick(FRAME));
        let midway = bar.scene().unwrap().anchor.unwrap();
        assert!(midway > 50.0 && midway < 250.0);

        settle(&mut bar);
        let scene = bar.scene().unwrap();
        assert_eq!(scene.anchor, Some(250.0));
        assert_eq!(scene.highlight.unwrap().circle.center, Point::new(250.0, -19.0));
    }

    #[test]
    fn interrupting_tap_bends_the_motion() {
        let mut bar = laid_out();
        bar.select(Tab::Account);
        for _ in 0..5 {
            bar.tick(FRAME);
        }
        let before = bar.scene().unwrap().anchor.unwrap();

        bar.select(Tab::Search);
        bar.tick(Duration::ZERO);
        assert_eq!(bar.scene().unwrap().anchor, Some(before));

        settle(&mut bar);
        assert_eq!(bar.scene().unwrap().anchor, Some(150.0));
    }

    #[test]
    fn external_controller_changes_are_observed() {
        let mut bar = laid_out();
        let controller = bar.controller().clone();
        controller.select_tab(Tab::Account, 350.0);

        assert!(bar.is_animating());
        settle(&mut bar);
        let scene = bar.scene().unwrap();
        assert_eq!(scene.selected, Tab::Account);
        assert_eq!(scene.anchor, Some(350.0));
    }

    #[test]
    fn relayout_moves_notch_with_selected_button() {
        let mut bar = laid_out();
        bar.select(Tab::Search);
        settle(&mut bar);

        bar.layout(Size::new(800.0, 800.0));
        assert_eq!(bar.controller().anchor(), Some(300.0));
        assert_eq!(bar.scene().unwrap().anchor, Some(300.0));
        assert!(!bar.is_animating());
    }

    #[test]
    fn same_size_layout_keeps_the_animation_running() {
        let mut bar = laid_out();
        bar.select(Tab::Account);
        bar.tick(FRAME);
        let before = bar.scene().unwrap().anchor.unwrap();
        assert!(before > 50.0 && before < 350.0);

        bar.layout(SCREEN);
        assert_eq!(bar.scene().unwrap().anchor, Some(before));
        assert!(bar.is_animating());

        settle(&mut bar);
        assert_eq!(bar.scene().unwrap().anchor, Some(350.0));
    }

    #[test]
    fn same_size_layout_after_a_tap_starts_the_animation() {
        let mut bar = laid_out();
        bar.select(Tab::Notifications);
        bar.layout(SCREEN);

        assert_eq!(bar.scene().unwrap().anchor, Some(50.0));
        assert!(bar.tick(FRAME));
        settle(&mut bar);
        assert_eq!(bar.scene().unwrap().anchor, Some(250.0));
    }

    #[test]
    fn notch_follows_selection_on_a_390pt_screen() {
        let mut bar = CurvedTabBar::<Tab>::new(TabBarStyle::default(), &PreviewSafeArea);
        bar.layout(Size::new(390.0, 844.0));
        let frame = bar.frame().unwrap();

        for (tab, mid) in Tab::ALL.iter().zip([48.75, 146.25, 243.75, 341.25]) {
            bar.select(*tab);
            settle(&mut bar);

            let anchor = bar.scene().unwrap().anchor.unwrap();
            assert_eq!(anchor, mid);
            let notch = bar.style().curve.notch(anchor, frame.size()).unwrap();
            assert_eq!(notch.center, mid, "{tab:?}");
        }
    }

    #[test]
    fn overly_stiff_spring_still_settles() {
        let style = TabBarStyle::from_toml_str("[spring]\nresponse = 0.005\n").unwrap();
        let mut bar = CurvedTabBar::<Tab>::new(style, &PreviewSafeArea);
        bar.layout(SCREEN);
        bar.select(Tab::Account);
        settle(&mut bar);

        let scene = bar.scene().unwrap();
        assert_eq!(scene.anchor, Some(350.0));
        assert!(!scene.backdrop.is_empty());
    }

    #[test]
    fn zero_width_screen_draws_empty_backdrop() {
        let mut bar = CurvedTabBar::<Tab>::new(TabBarStyle::default(), &PreviewSafeArea);
        bar.layout(Size::new(0.0, 800.0));
        let scene = bar.scene().unwrap();
        assert!(scene.backdrop.is_empty());
    }
}
