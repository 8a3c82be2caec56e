// this_file: crates/fontpath-font/src/lib.rs

//! Font handles and sized faces.
//!
//! A [`Font`] owns the raw file, its parsed backend and the ligature tables
//! used to typeset text. A [`FontFace`] borrows a font at one size and answers
//! metric, advance, kerning and outline queries.

pub mod batch;
pub mod face;
pub mod font;

#[cfg(test)]
mod test_support;

pub use batch::{glyph_paths, GlyphPath};
pub use face::FontFace;
pub use font::Font;
