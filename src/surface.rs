//! The rendering-surface boundary and an in-memory recording implementation.
//!
//! [`Surface`] is the only way the render traversal produces output. Backends
//! (canvas, vector, raster) implement it; [`RecordingSurface`] captures the
//! calls as [`DrawOp`]s for tests and for the debugging binary.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use serde::Serialize;

use crate::asset::Glyph;
use crate::error::SurfaceError;
use crate::geom::{Affine, Point, Segment};

/// A 2-D drawing sink with a canvas-style transform stack.
///
/// `translate` and `rotate` act on the current local frame. `save` pushes the
/// current transform and `restore` pops it.
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);

    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the backend rejects the call.
    fn stroke_arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), SurfaceError>;

    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the backend rejects the call.
    fn stroke_line(&mut self, segment: Segment) -> Result<(), SurfaceError>;

    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the backend rejects the call.
    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError>;

    /// Stroke a closed polygon.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the backend rejects the call.
    fn stroke_polygon(&mut self, points: &[Point]) -> Result<(), SurfaceError>;

    /// Draw `glyph` scaled into the square `(0, 0)`–`(size, size)`.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the backend rejects the call.
    fn draw_glyph(&mut self, glyph: &Glyph, size: f64) -> Result<(), SurfaceError>;
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate { radians: f64 },
    Arc { center: Point, radius: f64, start: f64, end: f64 },
    Line { p1: Point, p2: Point },
    Rect { origin: Point, width: f64, height: f64 },
    Polygon { points: Vec<Point> },
    /// `at` is where the glyph's local origin lands in surface coordinates and
    /// `rotation` is how far its frame is turned.
    Glyph { strokes: usize, size: f64, at: Point, rotation: f64 },
}

/// Records every call and tracks the resulting transform.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    transform: Affine,
    stack: Vec<Affine>,
    fail_after: Option<usize>,
    strokes: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every stroke after the first `strokes` succeed.
    #[must_use]
    pub fn failing_after(strokes: usize) -> Self {
        Self { fail_after: Some(strokes), ..Self::default() }
    }

    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    #[must_use]
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Number of unmatched `save` calls.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty()
    }

    fn stroke(&mut self, op: DrawOp) -> Result<(), SurfaceError> {
        if self.fail_after.is_some_and(|limit| self.strokes >= limit) {
            return Err(SurfaceError::new(format!("stroke {} rejected", self.strokes + 1)));
        }
        self.strokes += 1;
        self.ops.push(op);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.transform);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        if let Some(saved) = self.stack.pop() {
            self.transform = saved;
        }
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.transform = self.transform.translate(x, y);
        self.ops.push(DrawOp::Translate { x, y });
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self.transform.rotate(radians);
        self.ops.push(DrawOp::Rotate { radians });
    }

    fn stroke_arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), SurfaceError> {
        self.stroke(DrawOp::Arc { center, radius, start, end })
    }

    fn stroke_line(&mut self, segment: Segment) -> Result<(), SurfaceError> {
        self.stroke(DrawOp::Line { p1: segment.p1, p2: segment.p2 })
    }

    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.stroke(DrawOp::Rect { origin, width, height })
    }

    fn stroke_polygon(&mut self, points: &[Point]) -> Result<(), SurfaceError> {
        self.stroke(DrawOp::Polygon { points: points.to_vec() })
    }

    fn draw_glyph(&mut self, glyph: &Glyph, size: f64) -> Result<(), SurfaceError> {
        let at = self.transform.apply(Point::ORIGIN);
        let rotation = self.transform.rotation_angle();
        self.stroke(DrawOp::Glyph { strokes: glyph.strokes.len(), size, at, rotation })
    }
}
