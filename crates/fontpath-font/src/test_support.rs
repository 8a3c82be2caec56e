// this_file: crates/fontpath-font/src/test_support.rs

//! In-memory font backend for tests.

use crate::face::FontFace;
use crate::font::Font;
use fontpath_core::{
    FaceMetrics, FaceOptions, Fixed, FixedPoint, FontBackend, FontStyle, GlyphBuffer, GlyphIndex,
    HintingMode, Segment,
};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const UNITS_PER_EM: u16 = 1000;

/// Glyph data in font units, scaled on every query like a real font.
pub(crate) struct MockBackend {
    raw: Vec<u8>,
    glyphs: HashMap<char, GlyphIndex>,
    outlines: HashMap<u16, Vec<Segment>>,
    advances: HashMap<u16, f32>,
    kerning: HashMap<(u16, u16), f32>,
    metrics: Option<[f32; 5]>,
}

fn units(x: i32, y: i32) -> FixedPoint {
    FixedPoint::new(Fixed(x), Fixed(y))
}

fn scale(p: FixedPoint, ppem: Fixed) -> FixedPoint {
    FixedPoint::new(
        Fixed::from_font_units(p.x.0 as f32, ppem, UNITS_PER_EM),
        Fixed::from_font_units(p.y.0 as f32, ppem, UNITS_PER_EM),
    )
}

impl MockBackend {
    pub(crate) fn new(raw: Vec<u8>) -> Self {
        let glyphs = HashMap::from([
            ('A', GlyphIndex(1)),
            ('V', GlyphIndex(2)),
            (' ', GlyphIndex(3)),
            ('f', GlyphIndex(4)),
            ('i', GlyphIndex(5)),
            ('l', GlyphIndex(6)),
            ('\u{FB01}', GlyphIndex(7)),
            ('\u{FB02}', GlyphIndex(8)),
            ('\u{FB04}', GlyphIndex(9)),
            ('x', GlyphIndex(10)),
        ]);
        let square = vec![
            Segment::move_to(units(0, 0)),
            Segment::line_to(units(500, 0)),
            Segment::line_to(units(500, 700)),
            Segment::line_to(units(0, 700)),
            Segment::line_to(units(0, 0)),
        ];
        let triangle = vec![
            Segment::move_to(units(0, 0)),
            Segment::line_to(units(550, 700)),
            Segment::quad_to(units(275, 800), units(0, 700)),
            Segment::line_to(units(0, 0)),
        ];
        let outlines = HashMap::from([
            (1, square),
            (2, triangle.clone()),
            (3, Vec::new()),
            (10, triangle),
        ]);
        let advances = HashMap::from([(1, 600.0), (2, 550.0), (3, 250.0)]);
        let kerning = HashMap::from([((1, 2), -50.0), ((2, 1), -25.0)]);
        Self {
            raw,
            glyphs,
            outlines,
            advances,
            kerning,
            metrics: Some([1200.0, 800.0, -200.0, 500.0, 700.0]),
        }
    }
}

impl FontBackend for MockBackend {
    fn data(&self) -> &[u8] {
        &self.raw
    }

    fn glyph_index(&self, _buf: &mut GlyphBuffer, c: char) -> Option<GlyphIndex> {
        self.glyphs.get(&c).copied()
    }

    fn load_glyph<'b>(
        &self,
        buf: &'b mut GlyphBuffer,
        glyph: GlyphIndex,
        ppem: Fixed,
    ) -> Option<&'b [Segment]> {
        let outline = self.outlines.get(&glyph.0)?;
        buf.clear();
        for segment in outline {
            let args = segment.args.map(|p| scale(p, ppem));
            buf.push(Segment {
                op: segment.op,
                args,
            });
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
        let advance = self.advances.get(&glyph.0)?;
        Some(Fixed::from_font_units(*advance, ppem, UNITS_PER_EM))
    }

    fn kern(
        &self,
        _buf: &mut GlyphBuffer,
        left: GlyphIndex,
        right: GlyphIndex,
        ppem: Fixed,
        _hinting: HintingMode,
    ) -> Option<Fixed> {
        let kern = self.kerning.get(&(left.0, right.0))?;
        Some(Fixed::from_font_units(*kern, ppem, UNITS_PER_EM))
    }

    fn metrics(
        &self,
        _buf: &mut GlyphBuffer,
        ppem: Fixed,
        _hinting: HintingMode,
    ) -> Option<FaceMetrics> {
        let [height, ascent, descent, x_height, cap_height] = self.metrics?;
        let s = |v: f32| Fixed::from_font_units(v, ppem, UNITS_PER_EM);
        Some(FaceMetrics {
            height: s(height),
            ascent: s(ascent),
            descent: s(descent),
            x_height: s(x_height),
            cap_height: s(cap_height),
        })
    }
}

pub(crate) fn mock_font() -> Font {
    let _ = env_logger::builder().is_test(true).try_init();
    Font::from_backend(
        "Mock Sans",
        FontStyle::BOLD,
        "font/truetype",
        Box::new(MockBackend::new(vec![0x00, 0x01, 0x00, 0x00])),
    )
}

pub(crate) fn mock_font_without_metrics() -> Font {
    let mut backend = MockBackend::new(Vec::new());
    backend.metrics = None;
    Font::from_backend(
        "Mock Sans",
        FontStyle::REGULAR,
        "font/truetype",
        Box::new(backend),
    )
}

/// 10 pixels per em: 100 font units map to exactly 1.0.
pub(crate) fn test_face(font: &Font) -> FontFace<'_> {
    let options = FaceOptions {
        units_per_point: 1.0,
        ..FaceOptions::default()
    };
    font.face_with(10.0, &options)
}

/// DejaVu Serif from the shared test fonts, loaded through the ttf backend.
pub(crate) fn dejavu_serif() -> Font {
    let _ = env_logger::builder().is_test(true).try_init();
    let path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/fonts/DejaVuSerif.ttf");
    let data = fs::read(&path).expect("Test font readable");
    Font::load("DejaVu Serif", FontStyle::REGULAR, data).expect("Test font parsed")
}

/// 2048 pixels per em: one font unit of a 2048 upem font is one pixel.
pub(crate) fn unit_face(font: &Font) -> FontFace<'_> {
    let options = FaceOptions {
        units_per_point: 1.0,
        ..FaceOptions::default()
    };
    font.face_with(2048.0, &options)
}
