//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;

use crate::consts::{DEFAULT_ASSET_DIR, DEFAULT_MAX_DEPTH, DEFAULT_SIDE};
use crate::error::ConfigError;
use crate::notation::Parser;

pub const SIDE_VAR: &str = "SIGIL_SIDE";
pub const MAX_DEPTH_VAR: &str = "SIGIL_MAX_DEPTH";
pub const ASSET_DIR_VAR: &str = "SIGIL_ASSET_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Edge length of the square the whole diagram is drawn into.
    pub side: f64,
    /// Deepest group nesting accepted by the parser.
    pub max_depth: usize,
    /// Directory holding `<rune>.json` glyph files.
    pub asset_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self { side: DEFAULT_SIDE, max_depth: DEFAULT_MAX_DEPTH, asset_dir: PathBuf::from(DEFAULT_ASSET_DIR) }
    }
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SIGIL_SIDE`: default 500
    /// - `SIGIL_MAX_DEPTH`: default 64
    /// - `SIGIL_ASSET_DIR`: default `runes`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a value is present but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let side = parse_side(lookup(SIDE_VAR).as_deref())?;
        let max_depth = parse_max_depth(lookup(MAX_DEPTH_VAR).as_deref())?;
        let asset_dir = lookup(ASSET_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR), PathBuf::from);
        Ok(Self { side, max_depth, asset_dir })
    }

    /// A parser honouring this config's depth limit.
    #[must_use]
    pub fn parser(&self) -> Parser {
        Parser::new().with_max_depth(self.max_depth)
    }
}

fn parse_side(raw: Option<&str>) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_SIDE);
    };
    let side = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Parse { key: SIDE_VAR, value: raw.to_owned() })?;
    if !side.is_finite() || side <= 0.0 {
        return Err(ConfigError::NotPositive { key: SIDE_VAR, value: raw.to_owned() });
    }
    Ok(side)
}

fn parse_max_depth(raw: Option<&str>) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_MAX_DEPTH);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::NotPositive { key: MAX_DEPTH_VAR, value: raw.to_owned() }),
        Ok(depth) => Ok(depth),
        Err(_) => Err(ConfigError::Parse { key: MAX_DEPTH_VAR, value: raw.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
