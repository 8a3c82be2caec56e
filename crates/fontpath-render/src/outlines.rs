// this_file: crates/fontpath-render/src/outlines.rs

//! Conversion of backend outline segments into `kurbo` paths.

use fontpath_core::{FixedPoint, Segment, SegmentOp};
use kurbo::{BezPath, Point};

/// Builds a path from outline segments.
///
/// Outline space is Y-up and path space is Y-down, so every Y coordinate is
/// negated. Subpaths are closed when the pen is back on the subpath start,
/// either right before the next move or after the last segment.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    path: BezPath,
    start: FixedPoint,
    end: FixedPoint,
    consumed: usize,
    open: bool,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next segment.
    pub fn push(&mut self, segment: &Segment) {
        match segment.op {
            SegmentOp::MoveTo => {
                if self.consumed != 0 && self.start == self.end {
                    self.path.close_path();
                }
                self.end = segment.args[0];
                self.path.move_to(flip(self.end));
                self.start = self.end;
                self.open = true;
            }
            SegmentOp::LineTo => {
                self.ensure_open();
                self.end = segment.args[0];
                self.path.line_to(flip(self.end));
            }
            SegmentOp::QuadTo => {
                self.ensure_open();
                self.end = segment.args[1];
                self.path.quad_to(flip(segment.args[0]), flip(self.end));
            }
            SegmentOp::CubeTo => {
                self.ensure_open();
                self.end = segment.args[2];
                self.path.curve_to(
                    flip(segment.args[0]),
                    flip(segment.args[1]),
                    flip(self.end),
                );
            }
        }
        self.consumed += 1;
    }

    /// Close the trailing subpath if it returned to its start and hand back the path.
    pub fn finish(mut self) -> BezPath {
        if !self.path.elements().is_empty() && self.start == self.end {
            self.path.close_path();
        }
        self.path
    }

    // Drawing before any move starts a subpath at the current pen position.
    fn ensure_open(&mut self) {
        if !self.open {
            self.path.move_to(flip(self.end));
            self.start = self.end;
            self.open = true;
        }
    }
}

fn flip(p: FixedPoint) -> Point {
    let (x, y) = p.to_f64();
    Point::new(x, -y)
}

/// Convert a complete segment list into a path.
pub fn segments_to_path(segments: &[Segment]) -> BezPath {
    let mut builder = OutlineBuilder::new();
    for segment in segments {
        builder.push(segment);
    }
    builder.finish()
}
