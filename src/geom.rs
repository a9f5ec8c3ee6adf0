//! Plain 2-D geometry: points, line segments, and affine transforms.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in some node's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
}

/// A 2-D affine transform in canvas order `[a, b, c, d, e, f]`.
///
/// Maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`. `translate` and `rotate`
/// compose on the right, so they act in the current local frame the same way
/// a canvas context's calls of the same name do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub coeffs: [f64; 6],
}

impl Affine {
    pub const IDENTITY: Self = Self { coeffs: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0] };

    #[must_use]
    pub fn translation(x: f64, y: f64) -> Self {
        Self { coeffs: [1.0, 0.0, 0.0, 1.0, x, y] }
    }

    #[must_use]
    pub fn rotation(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self { coeffs: [c, s, -s, c, 0.0, 0.0] }
    }

    /// `self` followed by `inner` in `self`'s local frame (`self × inner`).
    #[must_use]
    pub fn then(self, inner: Self) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.coeffs;
        let [a2, b2, c2, d2, e2, f2] = inner.coeffs;
        Self {
            coeffs: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * e2 + c1 * f2 + e1,
                b1 * e2 + d1 * f2 + f1,
            ],
        }
    }

    #[must_use]
    pub fn translate(self, x: f64, y: f64) -> Self {
        self.then(Self::translation(x, y))
    }

    #[must_use]
    pub fn rotate(self, radians: f64) -> Self {
        self.then(Self::rotation(radians))
    }

    /// Angle the frame's x axis is turned by, in radians.
    #[must_use]
    pub fn rotation_angle(self) -> f64 {
        let [a, b, ..] = self.coeffs;
        b.atan2(a)
    }

    #[must_use]
    pub fn apply(self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.coeffs;
        Point { x: a * p.x + c * p.y + e, y: b * p.x + d * p.y + f }
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}
