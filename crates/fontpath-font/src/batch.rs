// this_file: crates/fontpath-font/src/batch.rs

//! Glyph paths for many code points at once.

use crate::face::FontFace;
use fontpath_core::GlyphBuffer;
use kurbo::BezPath;
use log::debug;
use rayon::prelude::*;

/// Path and advance of a single code point.
#[derive(Debug, Clone)]
pub struct GlyphPath {
    pub codepoint: char,
    pub path: BezPath,
    pub advance: f64,
}

/// Extract paths for `codepoints` in parallel, preserving input order.
///
/// Each rayon worker owns its own [`GlyphBuffer`].
pub fn glyph_paths(face: &FontFace<'_>, codepoints: &[char]) -> Vec<GlyphPath> {
    debug!(
        target: "fontpath::face",
        "extracting {} glyph paths from '{}'",
        codepoints.len(),
        face.font().name()
    );
    codepoints
        .par_iter()
        .map_init(GlyphBuffer::new, |buf, &codepoint| {
            let (path, advance) = face.to_path(buf, codepoint);
            GlyphPath {
                codepoint,
                path,
                advance,
            }
        })
        .collect()
}
