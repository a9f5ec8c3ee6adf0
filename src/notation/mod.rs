//! Notation parsing.
//!
//! Turns bracketed diagram text such as `(<T: fire> [earth / water])` into a
//! [`Node`](crate::tree::Node) tree. Scanning is done through an immutable
//! [`cursor::Cursor`]; the grammar lives in [`parse`].

pub mod cursor;
pub mod parse;

pub use parse::{Parser, parse};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
