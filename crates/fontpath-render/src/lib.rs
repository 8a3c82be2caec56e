// this_file: crates/fontpath-render/src/lib.rs

//! Path building utilities for fontpath.

pub mod outlines;

pub use kurbo::BezPath;
pub use outlines::{segments_to_path, OutlineBuilder};
