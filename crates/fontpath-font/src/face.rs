// this_file: crates/fontpath-font/src/face.rs

//! Sized faces: metrics, advances, kerning and glyph paths.
//!
//! Every query borrows a caller-owned [`GlyphBuffer`]. Missing glyphs,
//! kerning pairs and metrics never fail a query; they contribute nothing.

use crate::font::Font;
use fontpath_core::{
    from_fixed, Fixed, FontStyle, GlyphBuffer, GlyphIndex, HintingMode, Metrics,
};
use fontpath_render::segments_to_path;
use kurbo::{Affine, BezPath};
use log::trace;

/// A font resolved at a fixed pixels-per-em size.
#[derive(Debug, Clone, Copy)]
pub struct FontFace<'f> {
    font: &'f Font,
    ppem: Fixed,
    hinting: HintingMode,
}

impl<'f> FontFace<'f> {
    pub(crate) fn new(font: &'f Font, ppem: Fixed, hinting: HintingMode) -> Self {
        Self {
            font,
            ppem,
            hinting,
        }
    }

    pub fn font(&self) -> &'f Font {
        self.font
    }

    pub fn ppem(&self) -> Fixed {
        self.ppem
    }

    pub fn hinting(&self) -> HintingMode {
        self.hinting
    }

    /// Font name, style and size in the face's target unit.
    pub fn info(&self) -> (&'f str, FontStyle, f64) {
        (self.font.name(), self.font.style(), from_fixed(self.ppem))
    }

    /// Face metrics as non-negative magnitudes; all zero except `size` when
    /// the font does not provide them.
    pub fn metrics(&self, buf: &mut GlyphBuffer) -> Metrics {
        let size = from_fixed(self.ppem);
        let Some(m) = self.font.backend().metrics(buf, self.ppem, self.hinting) else {
            trace!(target: "fontpath::face", "no metrics for '{}'", self.font.name());
            return Metrics {
                size,
                ..Metrics::default()
            };
        };
        Metrics {
            size,
            line_height: from_fixed(m.height.abs()),
            ascent: from_fixed(m.ascent.abs()),
            descent: from_fixed(m.descent.abs()),
            x_height: from_fixed(m.x_height.abs()),
            cap_height: from_fixed(m.cap_height.abs()),
        }
    }

    /// Width of `text` laid out on one line: advances plus pair kerning.
    pub fn text_width(&self, buf: &mut GlyphBuffer, text: &str) -> f64 {
        let mut width = 0.0;
        let mut prev: Option<GlyphIndex> = None;
        for c in text.chars() {
            let Some(index) = self.glyph_index(buf, c) else {
                continue;
            };
            if let Some(prev) = prev {
                width += self.kern_glyphs(buf, prev, index);
            }
            width += self.advance(buf, index);
            prev = Some(index);
        }
        width
    }

    /// Outline of `c` in path space and its advance. Unsupported code points
    /// give an empty path and zero advance.
    pub fn to_path(&self, buf: &mut GlyphBuffer, c: char) -> (BezPath, f64) {
        match self.glyph_index(buf, c) {
            Some(index) => self.glyph_path(buf, index),
            None => (BezPath::new(), 0.0),
        }
    }

    /// Kerning between two code points, zero when either has no glyph.
    pub fn kerning(&self, buf: &mut GlyphBuffer, prev: char, next: char) -> f64 {
        let Some(left) = self.glyph_index(buf, prev) else {
            return 0.0;
        };
        let Some(right) = self.glyph_index(buf, next) else {
            return 0.0;
        };
        self.kern_glyphs(buf, left, right)
    }

    /// Lay out `text` on one line and return the combined path and its width.
    ///
    /// Glyphs are placed with the same advances and kerning as
    /// [`FontFace::text_width`]. The text is used as given; run it through
    /// [`Font::transform`] first for typeset output.
    pub fn text_path(&self, buf: &mut GlyphBuffer, text: &str) -> (BezPath, f64) {
        let mut path = BezPath::new();
        let mut x = 0.0;
        let mut prev: Option<GlyphIndex> = None;
        for c in text.chars() {
            let Some(index) = self.glyph_index(buf, c) else {
                continue;
            };
            if let Some(prev) = prev {
                x += self.kern_glyphs(buf, prev, index);
            }
            let (glyph, advance) = self.glyph_path(buf, index);
            let glyph = Affine::translate((x, 0.0)) * glyph;
            path.extend(glyph.elements().iter().copied());
            x += advance;
            prev = Some(index);
        }
        (path, x)
    }

    fn glyph_index(&self, buf: &mut GlyphBuffer, c: char) -> Option<GlyphIndex> {
        self.font.backend().glyph_index(buf, c)
    }

    fn glyph_path(&self, buf: &mut GlyphBuffer, index: GlyphIndex) -> (BezPath, f64) {
        let backend = self.font.backend();
        let Some(segments) = backend.load_glyph(buf, index, self.ppem) else {
            return (BezPath::new(), 0.0);
        };
        let path = segments_to_path(segments);
        (path, self.advance(buf, index))
    }

    fn advance(&self, buf: &mut GlyphBuffer, index: GlyphIndex) -> f64 {
        self.font
            .backend()
            .glyph_advance(buf, index, self.ppem, self.hinting)
            .map(from_fixed)
            .unwrap_or(0.0)
    }

    fn kern_glyphs(&self, buf: &mut GlyphBuffer, left: GlyphIndex, right: GlyphIndex) -> f64 {
        self.font
            .backend()
            .kern(buf, left, right, self.ppem, self.hinting)
            .map(from_fixed)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        dejavu_serif, mock_font, mock_font_without_metrics, test_face, unit_face,
    };
    use kurbo::{PathEl, Point, Shape};

    #[test]
    fn text_width_of_empty_and_unsupported_text_is_zero() {
        let font = mock_font();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        assert_eq!(face.text_width(&mut buf, ""), 0.0);
        assert_eq!(face.text_width(&mut buf, "?\u{1F600}?"), 0.0);
    }

    #[test]
    fn text_width_sums_advances_and_kerning() {
        let font = mock_font();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        assert_eq!(face.text_width(&mut buf, "A"), 6.0);
        assert_eq!(face.text_width(&mut buf, "AV"), 6.0 - 0.5 + 5.5);
        assert_eq!(face.text_width(&mut buf, "VA"), 5.5 - 0.25 + 6.0);
        assert_eq!(face.text_width(&mut buf, "A V"), 6.0 + 2.5 + 5.5);
    }

    #[test]
    fn text_width_kerns_against_previous_resolved_glyph() {
        let font = mock_font();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        assert_eq!(face.text_width(&mut buf, "A?V"), 11.0);
        assert_eq!(face.text_width(&mut buf, "?AV"), 11.0);
    }

    #[test]
    fn to_path_flips_and_closes_outline() {
        let font = mock_font();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        let (path, advance) = face.to_path(&mut buf, 'A');
        assert_eq!(advance, 6.0);
        let elements = path.elements();
        assert_eq!(elements[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(elements[2], PathEl::LineTo(Point::new(5.0, -7.0)));
        assert_eq!(elements.last(), Some(&PathEl::ClosePath));
        let bounds = path.bounding_box();
        assert_eq!((bounds.width(), bounds.height()), (5.0, 7.0));
    }

    #[test]
    fn to_path_for_blank_glyph_keeps_advance() {
        let font = mock_font();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        let (path, advance) = face.to_path(&mut buf, ' ');
        assert!(path.elements().is_empty());
        assert_eq!(advance, 2.5);
    }

    #[test]
    fn to_path_for_missing_glyph_is_empty() {
        let font = mock_font();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        let (path, advance) = face.to_path(&mut buf, '?');
        assert!(path.elements().is_empty());
        assert_eq!(advance, 0.0);
    }

    #[test]
    fn to_path_without_advance_data() {
        let font = mock_font();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        let (path, advance) = face.to_path(&mut buf, 'x');
        assert!(!path.elements().is_empty());
        assert_eq!(advance, 0.0);
    }

    #[test]
    fn kerning_is_zero_for_unknown_pairs() {
        let font = mock_font();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        assert_eq!(face.kerning(&mut buf, 'A', 'V'), -0.5);
        assert_eq!(face.kerning(&mut buf, 'V', 'A'), -0.25);
        assert_eq!(face.kerning(&mut buf, 'A', 'A'), 0.0);
        assert_eq!(face.kerning(&mut buf, '?', 'V'), 0.0);
        assert_eq!(face.kerning(&mut buf, 'A', '?'), 0.0);
    }

    #[test]
    fn metrics_are_non_negative() {
        let font = mock_font();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        let m = face.metrics(&mut buf);
        assert_eq!(m.size, 10.0);
        assert_eq!(m.line_height, 12.0);
        assert_eq!(m.ascent, 8.0);
        assert_eq!(m.descent, 2.0);
        assert_eq!(m.x_height, 5.0);
        assert_eq!(m.cap_height, 7.0);
    }

    #[test]
    fn missing_metrics_degrade_to_zero() {
        let font = mock_font_without_metrics();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        let m = face.metrics(&mut buf);
        assert_eq!(
            m,
            Metrics {
                size: 10.0,
                ..Metrics::default()
            }
        );
    }

    #[test]
    fn text_path_matches_text_width() {
        let font = mock_font();
        let face = test_face(&font);
        let mut buf = GlyphBuffer::new();
        let (path, width) = face.text_path(&mut buf, "AV A");
        assert_eq!(width, face.text_width(&mut buf, "AV A"));

        let moves: Vec<Point> = path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) => Some(*p),
                _ => None,
            })
            .collect();
        // A at 0, V after A's advance and the AV kern, A after V and the space.
        assert_eq!(
            moves,
            vec![
                Point::new(0.0, 0.0),
                Point::new(5.5, 0.0),
                Point::new(13.5, 0.0)
            ]
        );
    }

    fn count(path: &BezPath, want: fn(&PathEl) -> bool) -> usize {
        path.elements().iter().filter(|el| want(el)).count()
    }

    #[test]
    fn ttf_outline_has_closed_contours() {
        let font = dejavu_serif();
        let face = unit_face(&font);
        let mut buf = GlyphBuffer::new();
        let (path, advance) = face.to_path(&mut buf, 'O');
        assert_eq!(advance, 1679.0);
        assert_eq!(count(&path, |el| matches!(el, PathEl::MoveTo(_))), 2);
        assert_eq!(count(&path, |el| matches!(el, PathEl::ClosePath)), 2);
        // Y-down: the bowl sits above the baseline, at negative y.
        assert!(path.bounding_box().min_y() < -1400.0);
    }

    #[test]
    fn ttf_space_is_blank_with_advance() {
        let font = dejavu_serif();
        let face = unit_face(&font);
        let mut buf = GlyphBuffer::new();
        let (path, advance) = face.to_path(&mut buf, ' ');
        assert!(path.elements().is_empty());
        assert_eq!(advance, 651.0);
    }

    #[test]
    fn ttf_kerning_and_width() {
        let font = dejavu_serif();
        let face = unit_face(&font);
        let mut buf = GlyphBuffer::new();
        assert_eq!(face.kerning(&mut buf, 'A', 'V'), -102.0);
        assert_eq!(face.kerning(&mut buf, 'V', 'A'), -139.0);
        assert_eq!(face.text_width(&mut buf, "AV"), 1479.0 - 102.0 + 1479.0);
    }

    #[test]
    fn ttf_metrics_are_populated() {
        let font = dejavu_serif();
        let face = unit_face(&font);
        let mut buf = GlyphBuffer::new();
        assert_eq!(
            face.metrics(&mut buf),
            Metrics {
                size: 2048.0,
                line_height: 2384.0,
                ascent: 1901.0,
                descent: 483.0,
                x_height: 1063.0,
                cap_height: 1493.0,
            }
        );
    }
}
