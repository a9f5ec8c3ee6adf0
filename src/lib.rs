//! Parser, layout engine, and render traversal for nested magic-circle diagrams.
//!
//! A diagram is written in a small bracketed notation, parsed into an
//! immutable composition tree, and drawn by recursively subdividing a square:
//!
//! ```text
//!   "(<T:fire> [earth water])"
//!        │
//!        ▼
//!   notation::parse ──► Node ──► render ──► Surface (draw calls)
//!                                  │
//!                        layout per node, glyphs via AssetStore
//! ```
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`notation`] | Cursor and recursive-descent parser |
//! | [`tree`] | Runes, compound shapes, complexity metric |
//! | [`layout`] | Border, dividers, and child regions per shape |
//! | [`render`] | Tree traversal with scoped transforms |
//! | [`surface`] | Rendering-surface trait and a recording implementation |
//! | [`asset`] | Glyphs and the stores that resolve rune names |
//! | [`geom`] | Points, segments, affine transforms |
//! | [`config`] | Environment-driven configuration |
//! | [`error`] | Error taxonomy and error codes |
//! | [`consts`] | Shared numeric constants |

pub mod asset;
pub mod config;
pub mod consts;
pub mod error;
pub mod geom;
pub mod layout;
pub mod notation;
pub mod render;
pub mod surface;
pub mod tree;

pub use error::{AssetError, ErrorCode, ParseError, RenderError, StructureError, SyntaxError};
pub use layout::layout;
pub use notation::parse;
pub use render::render;
pub use tree::{Node, Shape};
