// this_file: backends/fontpath-core/src/types.rs

//! Core types used throughout the fontpath engine.

use crate::fixed::MM_PER_PT;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Font style; bold and italic combine independently.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct FontStyle: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
    }
}

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle::empty();
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::REGULAR
    }
}

bitflags! {
    /// Typographic transformations applied before glyph lookup.
    ///
    /// The empty set keeps required ligatures and smart typography active and
    /// leaves every optional ligature table off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TransformationOptions: u32 {
        /// Disable smart punctuation (quotes, dashes, ellipsis, fractions, symbols)
        const NO_TYPOGRAPHY = 1 << 1;
        /// Disable the required ligature table
        const NO_REQUIRED_LIGATURES = 1 << 2;
        /// Enable the common ligature table
        const COMMON_LIGATURES = 1 << 3;
        /// Enable the discretionary ligature table
        const DISCRETIONARY_LIGATURES = 1 << 4;
        /// Enable the historical ligature table
        const HISTORICAL_LIGATURES = 1 << 5;
    }
}

impl Default for TransformationOptions {
    fn default() -> Self {
        Self::empty()
    }
}

/// Hinting mode requested from the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintingMode {
    #[default]
    None,
    Slight,
    Full,
}

impl HintingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            HintingMode::None => "none",
            HintingMode::Slight => "slight",
            HintingMode::Full => "full",
        }
    }
}

/// Options for resolving a face at a size
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceOptions {
    /// Hinting mode passed to advance, kerning and metrics queries
    pub hinting: HintingMode,
    /// Target units per typographic point (millimetres by default)
    pub units_per_point: f64,
}

impl Default for FaceOptions {
    fn default() -> Self {
        Self {
            hinting: HintingMode::None,
            units_per_point: MM_PER_PT,
        }
    }
}

/// Size-scaled font metrics, all non-negative, in the face's target unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub size: f64,
    pub line_height: f64,
    pub ascent: f64,
    pub descent: f64,
    pub x_height: f64,
    pub cap_height: f64,
}
