//! Layout engine: per-shape border, dividers, and child regions.
//!
//! Every node is drawn into a square of edge `side`. A layout describes, in
//! that node's local frame, the border to stroke, the dividers between
//! children, and the square region each child is drawn into. Region `i`
//! belongs to child `i`.
//!
//! Frames per shape:
//! - Spell: origin at the centre of the square.
//! - Unit: origin at the top-left corner.
//! - Triangles: origin at the top-left corner of the *unrotated* frame; the
//!   render traversal rotates that frame about the square's centre.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{REGION_FILL, REGION_MARGIN, SPELL_DIVIDER_ANGLE};
use crate::error::StructureError;
use crate::geom::{Point, Segment};
use crate::tree::{MAX_COMPONENTS, Node, Shape};

/// Outline stroked around a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Border {
    /// Runes draw their glyph instead of a border.
    None,
    Circle { center: Point, radius: f64 },
    Square { origin: Point, side: f64 },
    Triangle([Point; 3]),
}

/// A square sub-area of a node's local frame assigned to one child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Region {
    #[must_use]
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    /// Region with the standard margin inside a square of `available` at `(x, y)`.
    fn inset(x: f64, y: f64, available: f64) -> Self {
        Self {
            x: x + available * REGION_MARGIN,
            y: y + available * REGION_MARGIN,
            size: available * REGION_FILL,
        }
    }
}

/// Geometry of one node inside its bounding square.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub border: Border,
    pub dividers: Vec<Segment>,
    pub regions: Vec<Region>,
}

impl Layout {
    fn empty() -> Self {
        Self { border: Border::None, dividers: Vec::new(), regions: Vec::new() }
    }
}

/// Lay out `node` in a square of edge `side`.
///
/// # Errors
///
/// Returns a [`StructureError`] if the node's child count is outside `{1, 2}`.
/// Trees built through [`Node::compound`] never trigger it.
pub fn layout(node: &Node, side: f64) -> Result<Layout, StructureError> {
    match node {
        Node::Rune(_) => Ok(Layout::empty()),
        Node::Compound(c) => c.shape().layout(c.children().len(), side),
    }
}

impl Shape {
    /// Geometry for this shape holding `child_count` children in a square of edge `side`.
    ///
    /// Depends only on its arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] unless `child_count` is 1 or 2.
    pub fn layout(self, child_count: usize, side: f64) -> Result<Layout, StructureError> {
        match child_count {
            0 => return Err(StructureError::NoComponents { shape: self }),
            1..=MAX_COMPONENTS => {}
            count => return Err(StructureError::TooManyComponents { shape: self, count }),
        }
        let pair = child_count == 2;
        Ok(match self {
            Self::Spell => spell_layout(pair, side),
            Self::Unit => unit_layout(pair, side),
            Self::Target | Self::Duration | Self::Restriction => triangle_layout(pair, side),
        })
    }
}

fn spell_layout(pair: bool, side: f64) -> Layout {
    let radius = side / 2.0;
    let border = Border::Circle { center: Point::ORIGIN, radius };
    let (cos, sin) = (SPELL_DIVIDER_ANGLE.cos(), SPELL_DIVIDER_ANGLE.sin());

    if !pair {
        let max_width = cos * radius * 2.0;
        let offset = -(max_width / 2.0 - max_width * REGION_MARGIN);
        return Layout {
            border,
            dividers: Vec::new(),
            regions: vec![Region::new(offset, offset, max_width * REGION_FILL)],
        };
    }

    let divider = Segment::new(Point::new(cos * radius, -sin * radius), Point::new(-cos * radius, sin * radius));
    let max_width = cos * radius;
    let first = -(max_width - max_width * REGION_MARGIN);
    let second = max_width * REGION_MARGIN;
    Layout {
        border,
        dividers: vec![divider],
        regions: vec![
            Region::new(first, first, max_width * REGION_FILL),
            Region::new(second, second, max_width * REGION_FILL),
        ],
    }
}

fn unit_layout(pair: bool, side: f64) -> Layout {
    let border = Border::Square { origin: Point::ORIGIN, side };

    if !pair {
        return Layout { border, dividers: Vec::new(), regions: vec![Region::inset(0.0, 0.0, side)] };
    }

    let half = side / 2.0;
    Layout {
        border,
        dividers: vec![Segment::new(Point::new(0.0, side), Point::new(side, 0.0))],
        regions: vec![Region::inset(0.0, 0.0, half), Region::inset(half, half, half)],
    }
}

fn triangle_layout(pair: bool, side: f64) -> Layout {
    let border = Border::Triangle([Point::new(0.0, 0.0), Point::new(side, 0.0), Point::new(side / 2.0, side)]);
    let sqrt3 = 3.0_f64.sqrt();

    if !pair {
        let max_width = side * (1.0 - sqrt3 / (sqrt3 + 2.0));
        let left = side * sqrt3 / (2.0 * sqrt3 + 4.0);
        return Layout {
            border,
            dividers: Vec::new(),
            regions: vec![Region::new(
                left + max_width * REGION_MARGIN,
                max_width * REGION_MARGIN,
                max_width * REGION_FILL,
            )],
        };
    }

    let height = side;
    let max_width = side / 2.0 - (side * height) / (2.0 * side + 4.0 * height);
    let mid = side / 2.0;
    Layout {
        border,
        dividers: vec![Segment::new(Point::new(mid, 0.0), Point::new(mid, side))],
        regions: vec![
            Region::new(
                mid - max_width * (1.0 - REGION_MARGIN),
                max_width * REGION_MARGIN,
                max_width * REGION_FILL,
            ),
            Region::new(mid + max_width * REGION_MARGIN, max_width * REGION_MARGIN, max_width * REGION_FILL),
        ],
    }
}
