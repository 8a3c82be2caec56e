// this_file: backends/fontpath-ttf/src/lib.rs

//! ttf-parser backend for fontpath.
//!
//! Parses TrueType and OpenType containers and answers glyph, outline,
//! advance, kerning and metrics queries in 26.6 fixed-point at a given size.

use fontpath_core::{
    FaceMetrics, Fixed, FixedPoint, FontBackend, FontError, GlyphBuffer, GlyphIndex, HintingMode,
    Result, Segment,
};
use log::{debug, trace};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use ttf_parser::{GlyphId, OutlineBuilder};

pub const MIME_TRUETYPE: &str = "font/truetype";
pub const MIME_OPENTYPE: &str = "font/opentype";
pub const MIME_COLLECTION: &str = "font/collection";
pub const MIME_WOFF: &str = "font/woff";
pub const MIME_WOFF2: &str = "font/woff2";

/// Determine the MIME type of a font container from its signature.
///
/// WOFF and WOFF2 are recognized but rejected: their compressed tables would
/// need decoding before ttf-parser can read them.
pub fn sniff_mimetype(data: &[u8]) -> Result<&'static str> {
    let Some(tag) = data.get(0..4) else {
        return Err(FontError::UnknownFormat);
    };
    match tag {
        [0x00, 0x01, 0x00, 0x00] | b"true" => Ok(MIME_TRUETYPE),
        b"OTTO" => Ok(MIME_OPENTYPE),
        b"ttcf" => Ok(MIME_COLLECTION),
        b"wOFF" => Err(FontError::UnsupportedFormat {
            format: MIME_WOFF.to_string(),
        }),
        b"wOF2" => Err(FontError::UnsupportedFormat {
            format: MIME_WOFF2.to_string(),
        }),
        _ => Err(FontError::UnknownFormat),
    }
}

/// Parse `data` as face `index` of a font container.
///
/// Returns the container's MIME type together with the parsed backend, which
/// takes ownership of `data`.
pub fn parse_font(name: &str, data: Vec<u8>, index: u32) -> Result<(&'static str, TtfBackend)> {
    let mimetype = sniff_mimetype(&data)?;
    let face = OwnedFace::from_vec(data, index).map_err(|e| FontError::parse(name, e))?;
    debug!(
        target: "fontpath::font",
        "parsed '{}' as {} ({} glyphs, {} upem)",
        name,
        mimetype,
        face.as_face_ref().number_of_glyphs(),
        face.as_face_ref().units_per_em()
    );
    Ok((mimetype, TtfBackend { face }))
}

/// Font backend over an owned ttf-parser face.
pub struct TtfBackend {
    face: OwnedFace,
}

impl TtfBackend {
    fn units_per_em(&self) -> u16 {
        self.face.as_face_ref().units_per_em()
    }

    fn scale(&self, units: f32, ppem: Fixed) -> Fixed {
        Fixed::from_font_units(units, ppem, self.units_per_em())
    }
}

impl FontBackend for TtfBackend {
    fn data(&self) -> &[u8] {
        self.face.as_slice()
    }

    fn glyph_index(&self, _buf: &mut GlyphBuffer, c: char) -> Option<GlyphIndex> {
        self.face
            .as_face_ref()
            .glyph_index(c)
            .filter(|id| id.0 != 0)
            .map(|id| GlyphIndex(id.0))
    }

    fn load_glyph<'b>(
        &self,
        buf: &'b mut GlyphBuffer,
        glyph: GlyphIndex,
        ppem: Fixed,
    ) -> Option<&'b [Segment]> {
        let face = self.face.as_face_ref();
        if glyph.0 >= face.number_of_glyphs() {
            return None;
        }
        buf.clear();
        let mut recorder = SegmentRecorder::new(buf, ppem, face.units_per_em());
        if face.outline_glyph(GlyphId(glyph.0), &mut recorder).is_none() {
            // Blank glyphs such as space have no outline but are still valid.
            trace!(target: "fontpath::font", "glyph {} has no outline", glyph.0);
            buf.clear();
        }
        Some(buf.segments())
    }

    fn glyph_advance(
        &self,
        _buf: &mut GlyphBuffer,
        glyph: GlyphIndex,
        ppem: Fixed,
        _hinting: HintingMode,
    ) -> Option<Fixed> {
        let advance = self.face.as_face_ref().glyph_hor_advance(GlyphId(glyph.0))?;
        Some(self.scale(f32::from(advance), ppem))
    }

    fn kern(
        &self,
        _buf: &mut GlyphBuffer,
        left: GlyphIndex,
        right: GlyphIndex,
        ppem: Fixed,
        _hinting: HintingMode,
    ) -> Option<Fixed> {
        let kern = self.face.as_face_ref().tables().kern?;
        kern.subtables
            .into_iter()
            .filter(|subtable| subtable.horizontal && !subtable.variable)
            .find_map(|subtable| subtable.glyphs_kerning(GlyphId(left.0), GlyphId(right.0)))
            .map(|value| self.scale(f32::from(value), ppem))
    }

    fn metrics(
        &self,
        _buf: &mut GlyphBuffer,
        ppem: Fixed,
        _hinting: HintingMode,
    ) -> Option<FaceMetrics> {
        let face = self.face.as_face_ref();
        if face.units_per_em() == 0 {
            return None;
        }
        let ascent = f32::from(face.ascender());
        let descent = f32::from(face.descender());
        let line_gap = f32::from(face.line_gap());
        let x_height = face
            .x_height()
            .filter(|&h| h > 0)
            .or_else(|| glyph_top(face, 'x'))
            .unwrap_or(0);
        let cap_height = face
            .capital_height()
            .filter(|&h| h > 0)
            .or_else(|| glyph_top(face, 'H'))
            .unwrap_or(0);
        Some(FaceMetrics {
            height: self.scale(ascent - descent + line_gap, ppem),
            ascent: self.scale(ascent, ppem),
            descent: self.scale(descent, ppem),
            x_height: self.scale(f32::from(x_height), ppem),
            cap_height: self.scale(f32::from(cap_height), ppem),
        })
    }
}

/// Top of the outline of `c`, used when OS/2 predates the height fields.
fn glyph_top(face: &ttf_parser::Face<'_>, c: char) -> Option<i16> {
    let id = face.glyph_index(c)?;
    face.glyph_bounding_box(id).map(|bbox| bbox.y_max)
}

/// Records ttf-parser outline callbacks as fixed-point segments.
///
/// A contour close becomes an explicit line back to the contour start when
/// the pen is elsewhere, so consumers never depend on close markers.
struct SegmentRecorder<'b> {
    buf: &'b mut GlyphBuffer,
    ppem: Fixed,
    units_per_em: u16,
    start: FixedPoint,
    current: FixedPoint,
}

impl<'b> SegmentRecorder<'b> {
    fn new(buf: &'b mut GlyphBuffer, ppem: Fixed, units_per_em: u16) -> Self {
        Self {
            buf,
            ppem,
            units_per_em,
            start: FixedPoint::default(),
            current: FixedPoint::default(),
        }
    }

    fn point(&self, x: f32, y: f32) -> FixedPoint {
        FixedPoint::new(
            Fixed::from_font_units(x, self.ppem, self.units_per_em),
            Fixed::from_font_units(y, self.ppem, self.units_per_em),
        )
    }
}

impl OutlineBuilder for SegmentRecorder<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.buf.push(Segment::move_to(p));
        self.start = p;
        self.current = p;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.buf.push(Segment::line_to(p));
        self.current = p;
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p = self.point(x, y);
        self.buf.push(Segment::quad_to(self.point(x1, y1), p));
        self.current = p;
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p = self.point(x, y);
        self.buf
            .push(Segment::cube_to(self.point(x1, y1), self.point(x2, y2), p));
        self.current = p;
    }

    fn close(&mut self) {
        if self.current != self.start {
            self.buf.push(Segment::line_to(self.start));
            self.current = self.start;
        }
    }
}
