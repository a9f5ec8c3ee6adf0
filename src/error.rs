//! Error taxonomy for parsing, tree construction, asset resolution, and rendering.
//!
//! Every failure is terminal for the call that produced it. Each enum carries a
//! stable machine-readable code through [`ErrorCode`] so a host can map errors
//! to its own display without matching on message text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::tree::Shape;

/// Stable error codes for host-facing error reporting.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// One-line report `error [CODE]: message`, tagged `(retryable)` when trying
/// again may succeed.
#[must_use]
pub fn describe(err: &dyn ErrorCode) -> String {
    let retry = if err.retryable() { " (retryable)" } else { "" };
    format!("error [{}]{retry}: {err}", err.error_code())
}

// =============================================================================
// SYNTAX
// =============================================================================

/// The notation text does not match the grammar.
///
/// Offsets are byte offsets into the input text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("no description found")]
    NoDescription,
    #[error("malformed description: unexpected '{found}' at offset {offset}")]
    Malformed { found: char, offset: usize },
    #[error("unexpected input after description at offset {offset}")]
    TrailingInput { offset: usize },
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },
    #[error("mismatched closing '{found}' at offset {offset}, expected '{expected}'")]
    MismatchedClose { expected: char, found: char, offset: usize },
    #[error("unterminated '{open}' opened at offset {offset}")]
    Unterminated { open: char, offset: usize },
    #[error("missing shape prefix (expected `T:`, `D:` or `R:`) at offset {offset}")]
    MissingPrefix { offset: usize },
    #[error("unrecognized shape prefix '{prefix}' at offset {offset}")]
    UnknownPrefix { prefix: String, offset: usize },
    #[error("definitions ('{{') are not yet supported (offset {offset})")]
    DefinitionsUnsupported { offset: usize },
    #[error("nesting deeper than {limit} groups at offset {offset}")]
    TooDeep { limit: usize, offset: usize },
}

impl SyntaxError {
    /// Byte offset the error points at, if it has one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::NoDescription => None,
            Self::Malformed { offset, .. }
            | Self::TrailingInput { offset }
            | Self::UnexpectedChar { offset, .. }
            | Self::MismatchedClose { offset, .. }
            | Self::Unterminated { offset, .. }
            | Self::MissingPrefix { offset }
            | Self::UnknownPrefix { offset, .. }
            | Self::DefinitionsUnsupported { offset }
            | Self::TooDeep { offset, .. } => Some(*offset),
        }
    }
}

impl ErrorCode for SyntaxError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoDescription => "E_NO_DESCRIPTION",
            Self::Malformed { .. } => "E_MALFORMED",
            Self::TrailingInput { .. } => "E_TRAILING_INPUT",
            Self::UnexpectedChar { .. } => "E_UNEXPECTED_CHAR",
            Self::MismatchedClose { .. } => "E_MISMATCHED_CLOSE",
            Self::Unterminated { .. } => "E_UNTERMINATED",
            Self::MissingPrefix { .. } => "E_MISSING_PREFIX",
            Self::UnknownPrefix { .. } => "E_UNKNOWN_PREFIX",
            Self::DefinitionsUnsupported { .. } => "E_UNSUPPORTED",
            Self::TooDeep { .. } => "E_TOO_DEEP",
        }
    }
}

// =============================================================================
// STRUCTURE
// =============================================================================

/// A compound node was given a child count outside `{1, 2}`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("{shape} needs at least one component")]
    NoComponents { shape: Shape },
    #[error("{shape} supports only up to 2 components, got {count}")]
    TooManyComponents { shape: Shape, count: usize },
}

impl ErrorCode for StructureError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoComponents { .. } => "E_NO_COMPONENTS",
            Self::TooManyComponents { .. } => "E_TOO_MANY_COMPONENTS",
        }
    }
}

/// Anything `parse` can fail with: the text is malformed, or a group it
/// describes cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("structure error: {0}")]
    Structure(#[from] StructureError),
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Syntax(e) => e.error_code(),
            Self::Structure(e) => e.error_code(),
        }
    }
}

// =============================================================================
// ASSETS
// =============================================================================

/// A rune's glyph could not be resolved.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("glyph not found: {name}")]
    NotFound { name: String },
    #[error("glyph '{name}' is malformed: {reason}")]
    Malformed { name: String, reason: String },
    #[error("glyph '{name}' could not be read: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl ErrorCode for AssetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "E_ASSET_NOT_FOUND",
            Self::Malformed { .. } => "E_ASSET_MALFORMED",
            Self::Io { .. } => "E_ASSET_IO",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// A rendering backend refused a draw call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("surface error: {message}")]
pub struct SurfaceError {
    pub message: String,
}

impl SurfaceError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// A failure during the render traversal.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot draw rune '{name}': {source}")]
    Leaf {
        name: String,
        #[source]
        source: AssetError,
    },
    #[error("cannot draw glyph for rune '{name}': {source}")]
    Glyph {
        name: String,
        #[source]
        source: SurfaceError,
    },
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error("side must be a positive finite number, got {side}")]
    InvalidSide { side: f64 },
}

impl ErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Leaf { .. } => "E_RENDER_LEAF",
            Self::Glyph { .. } | Self::Surface(_) => "E_SURFACE",
            Self::Structure(e) => e.error_code(),
            Self::InvalidSide { .. } => "E_INVALID_SIDE",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Leaf { source, .. } => source.retryable(),
            Self::Glyph { .. } | Self::Surface(_) | Self::Structure(_) | Self::InvalidSide { .. } => false,
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// An environment value could not be turned into configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {key}={value}")]
    Parse { key: &'static str, value: String },
    #[error("{key} must be a positive finite number, got {value}")]
    NotPositive { key: &'static str, value: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "E_CONFIG_PARSE",
            Self::NotPositive { .. } => "E_CONFIG_RANGE",
        }
    }
}
