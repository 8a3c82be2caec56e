// this_file: backends/fontpath-core/src/lib.rs

//! Core traits and types for the fontpath glyph outline engine.

pub mod buffer;
pub mod diagnostics;
pub mod error;
pub mod fixed;
pub mod traits;
pub mod types;

pub use buffer::GlyphBuffer;
pub use diagnostics::FaceDiagnostics;
pub use error::FontError;
pub use fixed::{from_fixed, to_fixed, Fixed, FixedPoint, MM_PER_PT};
pub use traits::{FaceMetrics, FontBackend, GlyphIndex, Segment, SegmentOp};
pub use types::{FaceOptions, FontStyle, HintingMode, Metrics, TransformationOptions};

/// Result type for fontpath operations
pub type Result<T> = std::result::Result<T, FontError>;
