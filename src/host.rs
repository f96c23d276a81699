//! One-time configuration of the hosting shell.
//!
//! A custom bar only works when the platform's own tab bar is hidden. That is
//! a process-wide switch, so the host flips it once at startup rather than
//! every time a bar is built.

use core::sync::atomic::{AtomicBool, Ordering};

/// Preferred color scheme of the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Light appearance.
    Light,
    /// Dark appearance; the bar's materials are tuned for it.
    #[default]
    Dark,
}

/// Platform switches the bar depends on.
pub trait HostShell {
    /// Shows or hides the platform's native tab bar.
    fn set_system_tab_bar_hidden(&mut self, hidden: bool);

    /// Forces the window's color scheme.
    fn set_color_scheme(&mut self, scheme: ColorScheme);
}

/// Settings applied to the host before the first bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    /// Hide the platform's tab bar.
    pub hide_system_tab_bar: bool,
    /// Window color scheme.
    pub color_scheme: ColorScheme,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            hide_system_tab_bar: true,
            color_scheme: ColorScheme::Dark,
        }
    }
}

/// Guard that lets [`HostConfig`] be applied only once per host.
#[derive(Debug, Default)]
pub struct HostSetup {
    applied: AtomicBool,
}

impl HostSetup {
    /// Creates a guard that has not applied anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            applied: AtomicBool::new(false),
        }
    }

    /// Applies `config` to `shell` the first time it is called.
    ///
    /// Returns `true` if this call applied the configuration.
    pub fn apply(&self, config: &HostConfig, shell: &mut impl HostShell) -> bool {
        if self.applied.swap(true, Ordering::AcqRel) {
            return false;
        }
        tracing::debug!(?config, "configuring host shell");
        shell.set_system_tab_bar_hidden(config.hide_system_tab_bar);
        shell.set_color_scheme(config.color_scheme);
        true
    }

    /// True once a configuration has been applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.applied.load(Ordering::Acquire)
    }
}
