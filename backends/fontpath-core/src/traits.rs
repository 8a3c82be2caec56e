// this_file: backends/fontpath-core/src/traits.rs

//! The seam between fontpath and the font-parsing backend.

use crate::buffer::GlyphBuffer;
use crate::fixed::{Fixed, FixedPoint};
use crate::types::HintingMode;

/// Glyph index inside a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphIndex(pub u16);

/// Kind of an outline segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOp {
    MoveTo,
    LineTo,
    QuadTo,
    CubeTo,
}

/// One outline segment in 26.6 coordinates with the Y axis pointing up.
///
/// `MoveTo` and `LineTo` use `args[0]`, `QuadTo` uses `args[0..2]` and
/// `CubeTo` uses all three; the last used point is the end point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub op: SegmentOp,
    pub args: [FixedPoint; 3],
}

impl Segment {
    pub fn move_to(p: FixedPoint) -> Self {
        Self {
            op: SegmentOp::MoveTo,
            args: [p, FixedPoint::default(), FixedPoint::default()],
        }
    }

    pub fn line_to(p: FixedPoint) -> Self {
        Self {
            op: SegmentOp::LineTo,
            args: [p, FixedPoint::default(), FixedPoint::default()],
        }
    }

    pub fn quad_to(ctrl: FixedPoint, p: FixedPoint) -> Self {
        Self {
            op: SegmentOp::QuadTo,
            args: [ctrl, p, FixedPoint::default()],
        }
    }

    pub fn cube_to(ctrl1: FixedPoint, ctrl2: FixedPoint, p: FixedPoint) -> Self {
        Self {
            op: SegmentOp::CubeTo,
            args: [ctrl1, ctrl2, p],
        }
    }

    /// The point the pen rests on after this segment.
    pub fn end(&self) -> FixedPoint {
        match self.op {
            SegmentOp::MoveTo | SegmentOp::LineTo => self.args[0],
            SegmentOp::QuadTo => self.args[1],
            SegmentOp::CubeTo => self.args[2],
        }
    }
}

/// Face-wide metrics in 26.6 at a given size, signed as the backend reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceMetrics {
    pub height: Fixed,
    pub ascent: Fixed,
    pub descent: Fixed,
    pub x_height: Fixed,
    pub cap_height: Fixed,
}

/// Lookup operations a parsed font must provide.
///
/// Every query takes the caller's scratch buffer and returns `None` when the
/// font cannot answer; callers treat `None` as a soft failure.
pub trait FontBackend: Send + Sync {
    /// The font file the backend was parsed from.
    fn data(&self) -> &[u8];

    /// Map a code point to a glyph.
    fn glyph_index(&self, buf: &mut GlyphBuffer, c: char) -> Option<GlyphIndex>;

    /// Load the outline of `glyph` at `ppem` into `buf` and return its segments.
    fn load_glyph<'b>(
        &self,
        buf: &'b mut GlyphBuffer,
        glyph: GlyphIndex,
        ppem: Fixed,
    ) -> Option<&'b [Segment]>;

    /// Horizontal advance of `glyph`.
    fn glyph_advance(
        &self,
        buf: &mut GlyphBuffer,
        glyph: GlyphIndex,
        ppem: Fixed,
        hinting: HintingMode,
    ) -> Option<Fixed>;

    /// Kerning between two glyphs; `None` when the pair has no entry.
    fn kern(
        &self,
        buf: &mut GlyphBuffer,
        left: GlyphIndex,
        right: GlyphIndex,
        ppem: Fixed,
        hinting: HintingMode,
    ) -> Option<Fixed>;

    fn metrics(
        &self,
        buf: &mut GlyphBuffer,
        ppem: Fixed,
        hinting: HintingMode,
    ) -> Option<FaceMetrics>;
}
