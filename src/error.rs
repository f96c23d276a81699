//! Errors raised while loading or saving a style.
//!
//! The component itself never fails: missing platform data and out-of-range
//! geometry fall back to defaults. Only configuration I/O can go wrong.

/// Errors produced by [`TabBarStyle`](crate::TabBarStyle) parsing and serialization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The style text is not valid TOML or does not match the schema.
    #[error("invalid tab bar style: {0}")]
    StyleParse(#[from] toml::de::Error),
    /// The style could not be written as TOML.
    #[error("failed to serialize tab bar style: {0}")]
    StyleSerialize(#[from] toml::ser::Error),
}
