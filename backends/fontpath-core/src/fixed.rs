// this_file: backends/fontpath-core/src/fixed.rs

//! 26.6 fixed-point values used for every size-dependent backend query.

use serde::{Deserialize, Serialize};

/// Millimetres per typographic point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Signed 26.6 fixed-point number: 1/64 unit granularity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Fixed(pub i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);

    /// Nearest 26.6 value to `value`.
    pub fn from_f64(value: f64) -> Self {
        Fixed((value * 64.0).round() as i32)
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / 64.0
    }

    /// Scale a value in font design units to fixed-point at `ppem`.
    ///
    /// Returns zero for a font that reports zero units per em.
    pub fn from_font_units(units: f32, ppem: Fixed, units_per_em: u16) -> Self {
        if units_per_em == 0 {
            return Fixed::ZERO;
        }
        let scaled = f64::from(units) * f64::from(ppem.0) / f64::from(units_per_em);
        Fixed(scaled.round() as i32)
    }

    /// Magnitude, for metrics whose sign depends on the font's convention.
    pub fn abs(self) -> Self {
        Fixed(self.0.abs())
    }
}

/// Point in 26.6 coordinates. Equality is exact, which is what outline
/// closing relies on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedPoint {
    pub x: Fixed,
    pub y: Fixed,
}

impl FixedPoint {
    pub fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Real-valued coordinates.
    pub fn to_f64(self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }
}

/// Convert a real measurement to fixed-point.
pub fn to_fixed(value: f64) -> Fixed {
    Fixed::from_f64(value)
}

/// Convert a fixed-point measurement back to a real value.
pub fn from_fixed(value: Fixed) -> f64 {
    value.to_f64()
}
