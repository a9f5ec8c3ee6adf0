//! Render traversal: walks a composition tree and issues draw calls.
//!
//! The traversal is the same for every compound shape: enter the shape's
//! frame, stroke the border, stroke the dividers, then draw each child inside
//! its region. The only per-shape behaviour is how frames are entered, which
//! comes from [`FrameHooks`].
//!
//! Every `save` is matched by a `restore` on all exit paths, so a failure in
//! one subtree leaves the surface's transform exactly as the caller left it.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::asset::AssetStore;
use crate::config::Config;
use crate::error::RenderError;
use crate::layout::{Border, Region};
use crate::surface::Surface;
use crate::tree::{Compound, Node, Rune, Shape};

/// Draw `node` into the square `(0, 0)`–`(side, side)` of the surface's current frame.
///
/// # Errors
///
/// Returns [`RenderError::InvalidSide`] unless `side` is positive and finite,
/// in which case nothing is drawn. Returns [`RenderError::Leaf`] if a rune's
/// glyph cannot be resolved, [`RenderError::Glyph`] if the surface rejects a
/// glyph, and [`RenderError::Surface`] if it rejects any other draw call.
pub fn render(node: &Node, surface: &mut dyn Surface, assets: &dyn AssetStore, side: f64) -> Result<(), RenderError> {
    if !side.is_finite() || side <= 0.0 {
        return Err(RenderError::InvalidSide { side });
    }
    scoped(surface, |s| draw_node(node, s, assets, side))
}

/// An asset store paired with the square size diagrams are drawn at.
#[derive(Debug)]
pub struct Renderer<A> {
    assets: A,
    side: f64,
}

impl<A: AssetStore> Renderer<A> {
    /// `side` is checked on every [`Renderer::render`] call, not here.
    #[must_use]
    pub fn new(assets: A, side: f64) -> Self {
        Self { assets, side }
    }

    #[must_use]
    pub fn from_config(assets: A, config: &Config) -> Self {
        Self::new(assets, config.side)
    }

    #[must_use]
    pub fn side(&self) -> f64 {
        self.side
    }

    #[must_use]
    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// # Errors
    ///
    /// See [`render`].
    pub fn render(&self, node: &Node, surface: &mut dyn Surface) -> Result<(), RenderError> {
        render(node, surface, &self.assets, self.side)
    }
}

// =============================================================================
// FRAME HOOKS
// =============================================================================

type FrameFn = fn(&mut dyn Surface, f64, f64);

/// Per-shape frame setup.
///
/// `enter` runs once before the border is drawn, with the node's side.
/// `enter_child` runs inside each child's region, after translating to it,
/// with the region's size.
#[derive(Clone, Copy)]
struct FrameHooks {
    enter: FrameFn,
    enter_child: FrameFn,
    angle: f64,
}

impl FrameHooks {
    fn for_shape(shape: Shape) -> Self {
        match (shape, shape.rotation()) {
            (Shape::Spell, _) => Self { enter: move_to_centre, enter_child: keep_frame, angle: 0.0 },
            (_, Some(angle)) => Self { enter: rotate_about_centre, enter_child: counter_rotate, angle },
            (_, None) => Self { enter: keep_frame, enter_child: keep_frame, angle: 0.0 },
        }
    }
}

fn keep_frame(_: &mut dyn Surface, _: f64, _: f64) {}

fn move_to_centre(surface: &mut dyn Surface, side: f64, _: f64) {
    surface.translate(side / 2.0, side / 2.0);
}

fn rotate_about_centre(surface: &mut dyn Surface, side: f64, angle: f64) {
    let centre = side / 2.0;
    surface.translate(centre, centre);
    surface.rotate(angle);
    surface.translate(-centre, -centre);
}

/// Undo the parent's rotation so the child draws upright.
fn counter_rotate(surface: &mut dyn Surface, size: f64, angle: f64) {
    rotate_about_centre(surface, size, -angle);
}

// =============================================================================
// TRAVERSAL
// =============================================================================

/// Run `f` between `save` and `restore`, restoring even when `f` fails.
fn scoped<T>(
    surface: &mut dyn Surface,
    f: impl FnOnce(&mut dyn Surface) -> Result<T, RenderError>,
) -> Result<T, RenderError> {
    surface.save();
    let result = f(&mut *surface);
    surface.restore();
    result
}

fn draw_node(node: &Node, surface: &mut dyn Surface, assets: &dyn AssetStore, side: f64) -> Result<(), RenderError> {
    match node {
        Node::Rune(rune) => draw_rune(rune, surface, assets, side),
        Node::Compound(compound) => draw_compound(compound, surface, assets, side),
    }
}

fn draw_rune(rune: &Rune, surface: &mut dyn Surface, assets: &dyn AssetStore, side: f64) -> Result<(), RenderError> {
    tracing::trace!(name = rune.name(), side, "drawing rune");
    let glyph = assets.resolve(rune.name()).map_err(|source| {
        tracing::warn!(name = rune.name(), error = %source, "glyph resolution failed");
        RenderError::Leaf { name: rune.name().to_owned(), source }
    })?;
    surface
        .draw_glyph(&glyph, side)
        .map_err(|source| RenderError::Glyph { name: rune.name().to_owned(), source })
}

fn draw_compound(
    compound: &Compound,
    surface: &mut dyn Surface,
    assets: &dyn AssetStore,
    side: f64,
) -> Result<(), RenderError> {
    let shape = compound.shape();
    let children = compound.children();
    tracing::trace!(%shape, side, children = children.len(), "drawing compound");

    let layout = shape.layout(children.len(), side)?;
    let hooks = FrameHooks::for_shape(shape);

    (hooks.enter)(surface, side, hooks.angle);
    draw_border(surface, layout.border)?;
    for divider in &layout.dividers {
        surface.stroke_line(*divider)?;
    }

    for (child, region) in children.iter().zip(&layout.regions) {
        scoped(surface, |s| draw_child(child, s, assets, *region, hooks))?;
    }
    Ok(())
}

fn draw_child(
    child: &Node,
    surface: &mut dyn Surface,
    assets: &dyn AssetStore,
    region: Region,
    hooks: FrameHooks,
) -> Result<(), RenderError> {
    surface.translate(region.x, region.y);
    (hooks.enter_child)(surface, region.size, hooks.angle);
    draw_node(child, surface, assets, region.size)
}

fn draw_border(surface: &mut dyn Surface, border: Border) -> Result<(), RenderError> {
    match border {
        Border::None => {}
        Border::Circle { center, radius } => surface.stroke_arc(center, radius, 0.0, std::f64::consts::TAU)?,
        Border::Square { origin, side } => surface.stroke_rect(origin, side, side)?,
        Border::Triangle(points) => surface.stroke_polygon(&points)?,
    }
    Ok(())
}
