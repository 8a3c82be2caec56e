// this_file: src/lib.rs

//! fontpath: font loading, glyph outlines and typographic text transformation.
//!
//! ```no_run
//! use fontpath::{load_font_file, FontStyle, GlyphBuffer, TransformationOptions};
//!
//! let mut font = load_font_file("Serif", FontStyle::REGULAR, "Serif.ttf")?;
//! font.set_transformation_options(TransformationOptions::COMMON_LIGATURES);
//!
//! let text = font.transform("\"fine\" -- 1/2 off...", true);
//! let face = font.face(12.0);
//! let mut buf = GlyphBuffer::new();
//! let (path, width) = face.text_path(&mut buf, &text);
//! # let _ = (path, width);
//! # Ok::<(), fontpath::FontError>(())
//! ```

pub use fontpath_core::{
    from_fixed, to_fixed, FaceMetrics, FaceOptions, Fixed, FixedPoint, FontBackend, FontError,
    FontStyle, GlyphBuffer, GlyphIndex, HintingMode, Metrics, Result, Segment, SegmentOp,
    TransformationOptions, MM_PER_PT,
};
pub use fontpath_font::{glyph_paths, Font, FontFace, GlyphPath};
pub use fontpath_fontdb::{load_font_file, load_local_font, SystemFonts};
pub use fontpath_render::{segments_to_path, BezPath, OutlineBuilder};
pub use fontpath_ttf::{sniff_mimetype, TtfBackend};
pub use fontpath_typography::{
    common_ligature_candidates, smart_typography, transform, Ligature, LigatureKind,
    LigatureTables,
};
