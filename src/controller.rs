//! Selection state shared by the bar's buttons and its curve.
//!
//! The controller is the only writer. Tab selection and the curve anchor live
//! in one reactive [`Binding`], so every subscriber sees both change together.

use nami::{Binding, Signal, binding};

use crate::tab::TabItem;

/// The active tab together with the anchor the notch is centered on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<T> {
    /// The active tab.
    pub tab: T,
    /// Horizontal midpoint of the active tab's button in the bar's coordinate
    /// space, or `None` before the first layout.
    pub anchor: Option<f32>,
}

impl<T: TabItem> Selection<T> {
    fn initial() -> Self {
        Self {
            tab: T::default(),
            anchor: None,
        }
    }
}

/// Keeps a [`SelectionController::subscribe`] callback registered while alive.
pub type Subscription<T> = <Binding<Selection<T>> as Signal>::Guard;

/// Holds the current selection and publishes changes to subscribers.
#[derive(Debug, Clone)]
pub struct SelectionController<T: TabItem> {
    state: Binding<Selection<T>>,
}

impl<T: TabItem> Default for SelectionController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TabItem> SelectionController<T> {
    /// Creates a controller with the first tab selected and no anchor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: binding(Selection::initial()),
        }
    }

    /// Snapshot of the current selection.
    #[must_use]
    pub fn selection(&self) -> Selection<T> {
        self.state.get()
    }

    /// The active tab.
    #[must_use]
    pub fn selected(&self) -> T {
        self.selection().tab
    }

    /// The current anchor, if one has been established.
    #[must_use]
    pub fn anchor(&self) -> Option<f32> {
        self.selection().anchor
    }

    /// Makes `tab` active with its button midpoint as the new anchor.
    ///
    /// Both values are published in a single update.
    pub fn select_tab(&self, tab: T, anchor_x: f32) {
        tracing::debug!(tab = tab.title(), anchor_x, "selecting tab");
        self.state.set(Selection {
            tab,
            anchor: Some(anchor_x),
        });
    }

    /// Establishes the first anchor. Does nothing once an anchor exists.
    ///
    /// Returns `true` when the anchor was seeded by this call.
    pub fn seed_anchor(&self, anchor_x: f32) -> bool {
        let current = self.selection();
        if current.anchor.is_some() {
            return false;
        }
        tracing::debug!(anchor_x, "seeding curve anchor");
        self.state.set(Selection {
            tab: current.tab,
            anchor: Some(anchor_x),
        });
        true
    }

    /// Moves the anchor without changing the selection.
    ///
    /// Used when a new layout moves the selected button.
    pub(crate) fn relocate_anchor(&self, anchor_x: f32) {
        let current = self.selection();
        if current.anchor == Some(anchor_x) {
            return;
        }
        self.state.set(Selection {
            tab: current.tab,
            anchor: Some(anchor_x),
        });
    }

    /// Calls `handler` with every published selection.
    ///
    /// The handler stays registered until the returned guard is dropped.
    pub fn subscribe<F>(&self, handler: F) -> Subscription<T>
    where
        F: Fn(Selection<T>) + 'static,
    {
        self.state.watch(move |context| handler(context.into_value()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::tab::Tab;

    #[test]
    fn starts_on_first_tab_without_anchor() {
        let controller = SelectionController::<Tab>::new();
        assert_eq!(controller.selected(), Tab::Home);
        assert_eq!(controller.anchor(), None);
    }

    #[test]
    fn select_updates_tab_and_anchor() {
        let controller = SelectionController::<Tab>::new();
        for (index, tab) in Tab::ALL.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let mid = 50.0 + 100.0 * index as f32;
            controller.select_tab(*tab, mid);
            assert_eq!(
                controller.selection(),
                Selection {
                    tab: *tab,
                    anchor: Some(mid)
                }
            );
        }
    }

    #[test]
    fn seed_only_applies_once() {
        let controller = SelectionController::<Tab>::new();
        assert!(controller.seed_anchor(50.0));
        assert!(!controller.seed_anchor(75.0));
        assert_eq!(controller.anchor(), Some(50.0));
        assert_eq!(controller.selected(), Tab::Home);
    }

    #[test]
    fn seed_after_selection_is_ignored() {
        let controller = SelectionController::<Tab>::new();
        controller.select_tab(Tab::Search, 150.0);
        assert!(!controller.seed_anchor(50.0));
        assert_eq!(controller.anchor(), Some(150.0));
    }

    #[test]
    fn subscribers_see_both_fields_together() {
        let controller = SelectionController::<Tab>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _guard = controller.subscribe({
            let seen = Rc::clone(&seen);
            move |selection| seen.borrow_mut().push(selection)
        });

        controller.select_tab(Tab::Notifications, 250.0);
        assert_eq!(
            seen.borrow().last(),
            Some(&Selection {
                tab: Tab::Notifications,
                anchor: Some(250.0)
            })
        );
    }
}
