#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod animation;
pub mod backdrop;
mod bar;
pub mod button;
pub mod config;
pub mod controller;
pub mod curve;
mod error;
pub mod geometry;
pub mod host;
mod path;
pub mod safe_area;
pub mod scene;
pub mod tab;

pub use animation::{Animated, Circle, Interpolate, ShapeMorph, Spring, TweenMorph};
pub use backdrop::{Backdrop, Material, MaterialPalette, MaterialStyle, Rgba};
pub use bar::CurvedTabBar;
pub use button::{ButtonAppearance, ButtonMetrics, TabButton};
pub use config::TabBarStyle;
pub use controller::{Selection, SelectionController, Subscription};
pub use curve::{CurveShape, Notch};
pub use error::Error;
pub use geometry::{Point, Rect, Size};
pub use host::{ColorScheme, HostConfig, HostSetup, HostShell};
pub use path::{Path, PathElement};
pub use safe_area::{BottomPadding, EdgeInsets, FixedSafeArea, PreviewSafeArea, SafeAreaProvider};
pub use scene::{BarScene, Highlight};
pub use tab::{Tab, TabItem, UnknownTab};

pub mod prelude {
    //! The types most hosts need, for a single glob import.
    //!
    //! ```rust
    //! use curvebar::prelude::*;
    //!
    //! let bar = CurvedTabBar::<Tab>::new(TabBarStyle::default(), &PreviewSafeArea);
    //! assert_eq!(bar.selected(), Tab::Home);
    //! ```
    pub use crate::{
        BarScene, CurvedTabBar, EdgeInsets, FixedSafeArea, HostConfig, HostSetup, HostShell,
        Point, PreviewSafeArea, SafeAreaProvider, Size, Tab, TabBarStyle, TabItem,
    };
}
