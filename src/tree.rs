//! Composition tree: runes (leaves) and compound shapes owning one or two children.
//!
//! Trees are built once per parse and never mutated afterwards. Parents own
//! their children outright; there are no back-references and no sharing.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::fmt;

use crate::consts::{DURATION_ROTATION, RESTRICTION_ROTATION, TARGET_ROTATION};
use crate::error::StructureError;

/// Most children any compound shape can lay out.
pub const MAX_COMPONENTS: usize = 2;

/// The closed set of compound shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Circular border, children laid out along its diagonal.
    Spell,
    /// Square border split corner to corner.
    Unit,
    /// Triangle in its unrotated frame.
    Target,
    /// Triangle rotated half a turn.
    Duration,
    /// Triangle rotated a quarter turn counter-clockwise.
    Restriction,
}

impl Shape {
    /// Frame rotation for the triangular family, `None` for the rest.
    #[must_use]
    pub fn rotation(self) -> Option<f64> {
        match self {
            Self::Spell | Self::Unit => None,
            Self::Target => Some(TARGET_ROTATION),
            Self::Duration => Some(DURATION_ROTATION),
            Self::Restriction => Some(RESTRICTION_ROTATION),
        }
    }

    #[must_use]
    pub fn is_triangular(self) -> bool {
        self.rotation().is_some()
    }

    /// Look up a triangular shape by its `<X:` prefix.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "T" => Some(Self::Target),
            "D" => Some(Self::Duration),
            "R" => Some(Self::Restriction),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spell => "spell",
            Self::Unit => "unit",
            Self::Target => "target",
            Self::Duration => "duration",
            Self::Restriction => "restriction",
        };
        f.write_str(name)
    }
}

/// A named primitive resolved to a glyph at draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct Rune {
    name: String,
}

impl Rune {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A shape owning one or two child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    shape: Shape,
    children: Vec<Node>,
    complexity: f64,
}

impl Compound {
    /// Build a compound node from already-parsed children.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] unless there are exactly one or two children.
    pub fn new(shape: Shape, children: Vec<Node>) -> Result<Self, StructureError> {
        match children.len() {
            0 => return Err(StructureError::NoComponents { shape }),
            1..=MAX_COMPONENTS => {}
            count => return Err(StructureError::TooManyComponents { shape, count }),
        }
        let complexity = compound_complexity(&children);
        Ok(Self { shape, children, complexity })
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn complexity(&self) -> f64 {
        self.complexity
    }
}

/// `max(deepest child + 1, log2(count - 1))`.
///
/// With one child the second term is `log2(0) = -inf` and loses to the first.
/// Nothing reads the result yet.
#[allow(clippy::cast_precision_loss)]
fn compound_complexity(children: &[Node]) -> f64 {
    let deepest = children
        .iter()
        .map(Node::complexity)
        .fold(f64::NEG_INFINITY, f64::max);
    let spread = (children.len() as f64 - 1.0).log2();
    (deepest + 1.0).max(spread)
}

/// A node of the composition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rune(Rune),
    Compound(Compound),
}

impl Node {
    #[must_use]
    pub fn rune(name: impl Into<String>) -> Self {
        Self::Rune(Rune::new(name))
    }

    /// # Errors
    ///
    /// Returns a [`StructureError`] unless there are exactly one or two children.
    pub fn compound(shape: Shape, children: Vec<Node>) -> Result<Self, StructureError> {
        Compound::new(shape, children).map(Self::Compound)
    }

    /// # Errors
    ///
    /// Returns a [`StructureError`] unless there are exactly one or two children.
    pub fn spell(children: Vec<Node>) -> Result<Self, StructureError> {
        Self::compound(Shape::Spell, children)
    }

    /// # Errors
    ///
    /// Returns a [`StructureError`] unless there are exactly one or two children.
    pub fn unit(children: Vec<Node>) -> Result<Self, StructureError> {
        Self::compound(Shape::Unit, children)
    }

    #[must_use]
    pub fn complexity(&self) -> f64 {
        match self {
            Self::Rune(_) => 0.0,
            Self::Compound(c) => c.complexity,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Rune(_) => &[],
            Self::Compound(c) => &c.children,
        }
    }

    /// Shape of a compound node, `None` for a rune.
    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Self::Rune(_) => None,
            Self::Compound(c) => Some(c.shape),
        }
    }

    /// Rune names in depth-first, left-to-right order.
    #[must_use]
    pub fn leaf_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_leaf_names(self, &mut names);
        names
    }
}

fn collect_leaf_names<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
    match node {
        Node::Rune(r) => out.push(r.name()),
        Node::Compound(c) => {
            for child in &c.children {
                collect_leaf_names(child, out);
            }
        }
    }
}
