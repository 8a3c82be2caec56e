// this_file: backends/fontpath-core/src/buffer.rs

//! Scratch storage reused across backend queries.
//!
//! A `GlyphBuffer` is handed to every face query by `&mut`, so a single buffer
//! can never be used by two threads at once. Threads that query the same font
//! in parallel each bring their own.

use crate::traits::Segment;

/// Reusable scratch space for glyph outline loading.
#[derive(Debug, Default)]
pub struct GlyphBuffer {
    segments: Vec<Segment>,
}

impl GlyphBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous glyph's segments, keeping the allocation.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn capacity(&self) -> usize {
        self.segments.capacity()
    }
}
