//! Translucent material backdrops.
//!
//! The component never blurs anything itself. It describes *which* material
//! to draw and *where* to clip it. Native backends map a [`Material`] to their
//! own visual-effect view. The software backend uses the numbers in
//! [`MaterialPalette`].

use serde::{Deserialize, Serialize};

use crate::path::Path;

/// Named blur materials, from most to least transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// Barely frosted; the bar backdrop.
    #[default]
    UltraThin,
    /// Lightly frosted.
    Thin,
    /// Standard frosted glass.
    Regular,
    /// Heavily frosted.
    Thick,
    /// Opaque-looking chrome; the highlight circle behind the active icon.
    Chrome,
}

/// Straight (non-premultiplied) RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Rgba {
    /// Creates a color from components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// How a backend should approximate one material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialStyle {
    /// Blur radius in points.
    pub blur_radius: f32,
    /// Tint laid over the blurred content.
    pub tint: Rgba,
}

impl MaterialStyle {
    /// Creates a style.
    #[must_use]
    pub const fn new(blur_radius: f32, tint: Rgba) -> Self {
        Self { blur_radius, tint }
    }
}

/// Dark-scheme approximations for every [`Material`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialPalette {
    /// [`Material::UltraThin`].
    pub ultra_thin: MaterialStyle,
    /// [`Material::Thin`].
    pub thin: MaterialStyle,
    /// [`Material::Regular`].
    pub regular: MaterialStyle,
    /// [`Material::Thick`].
    pub thick: MaterialStyle,
    /// [`Material::Chrome`].
    pub chrome: MaterialStyle,
}

impl Default for MaterialPalette {
    fn default() -> Self {
        Self {
            ultra_thin: MaterialStyle::new(12.0, Rgba::new(0.11, 0.11, 0.12, 0.45)),
            thin: MaterialStyle::new(16.0, Rgba::new(0.11, 0.11, 0.12, 0.6)),
            regular: MaterialStyle::new(20.0, Rgba::new(0.11, 0.11, 0.12, 0.72)),
            thick: MaterialStyle::new(24.0, Rgba::new(0.11, 0.11, 0.12, 0.85)),
            chrome: MaterialStyle::new(20.0, Rgba::new(0.2, 0.2, 0.22, 0.8)),
        }
    }
}

impl MaterialPalette {
    /// The style for `material`.
    #[must_use]
    pub const fn style(&self, material: Material) -> MaterialStyle {
        match material {
            Material::UltraThin => self.ultra_thin,
            Material::Thin => self.thin,
            Material::Regular => self.regular,
            Material::Thick => self.thick,
            Material::Chrome => self.chrome,
        }
    }
}

/// A material backdrop clipped to a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    /// Which material to draw.
    pub material: Material,
    /// Clip in the owner's coordinate space. An empty clip draws nothing.
    pub clip: Path,
}

impl Backdrop {
    /// Creates a backdrop.
    #[must_use]
    pub const fn new(material: Material, clip: Path) -> Self {
        Self { material, clip }
    }

    /// True when nothing would be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clip.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_is_more_opaque_than_ultra_thin() {
        let palette = MaterialPalette::default();
        assert!(palette.style(Material::Chrome).tint.a > palette.style(Material::UltraThin).tint.a);
    }

    #[test]
    fn empty_clip_draws_nothing() {
        assert!(Backdrop::new(Material::UltraThin, Path::new()).is_empty());
    }
}
