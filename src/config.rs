//! Style configuration for the whole bar.
//!
//! Every field has a default, so a style file only needs to name what it
//! changes:
//!
//! ```toml
//! morph_duration_ms = 400
//!
//! [curve]
//! depth = 30.0
//!
//! [spring]
//! damping_fraction = 0.7
//! ```

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Spring;
use crate::backdrop::{Material, MaterialPalette};
use crate::button::ButtonMetrics;
use crate::curve::CurveShape;
use crate::error::Error;
use crate::safe_area::BottomPadding;

/// Tunable constants of a [`CurvedTabBar`](crate::CurvedTabBar).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBarStyle {
    /// Material of the bar backdrop.
    pub bar_material: Material,
    /// Material of the highlight circle.
    pub highlight_material: Material,
    /// Length of the highlight circle's move between buttons.
    pub morph_duration_ms: u64,
    /// Notch geometry.
    pub curve: CurveShape,
    /// Spring used for the notch and the buttons.
    pub spring: Spring,
    /// Button row sizes.
    pub buttons: ButtonMetrics,
    /// Safe-area fallbacks.
    pub bottom_padding: BottomPadding,
    /// How backends approximate each material.
    pub materials: MaterialPalette,
}

impl Default for TabBarStyle {
    fn default() -> Self {
        Self {
            bar_material: Material::UltraThin,
            highlight_material: Material::Chrome,
            morph_duration_ms: 550,
            curve: CurveShape::default(),
            spring: Spring::default(),
            buttons: ButtonMetrics::default(),
            bottom_padding: BottomPadding::default(),
            materials: MaterialPalette::default(),
        }
    }
}

impl TabBarStyle {
    /// Parses a style from TOML. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StyleParse`] when the text is not valid TOML or a field
    /// has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Serializes the style back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StyleSerialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Duration of the highlight morph.
    #[must_use]
    pub const fn morph_duration(&self) -> Duration {
        Duration::from_millis(self.morph_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_default_style() {
        assert_eq!(TabBarStyle::from_toml_str("").unwrap(), TabBarStyle::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let style = TabBarStyle::from_toml_str(
            r"
            morph_duration_ms = 300
            bar_material = 'thick'

            [curve]
            depth = 20.0
            ",
        )
        .unwrap();

        assert_eq!(style.morph_duration(), Duration::from_millis(300));
        assert_eq!(style.bar_material, Material::Thick);
        assert_eq!(style.curve.depth, 20.0);
        assert_eq!(style.curve.half_width, 50.0);
        assert_eq!(style.spring, Spring::default());
    }

    #[test]
    fn wrong_type_is_reported() {
        let err = TabBarStyle::from_toml_str("morph_duration_ms = 'slow'").unwrap_err();
        assert!(matches!(err, Error::StyleParse(_)));
    }

    #[test]
    fn round_trips_through_toml() {
        let style = TabBarStyle::default();
        let text = style.to_toml_string().unwrap();
        assert_eq!(TabBarStyle::from_toml_str(&text).unwrap(), style);
    }
}
