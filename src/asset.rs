//! Glyph assets and the stores that resolve rune names to them.
//!
//! A [`Glyph`] is a set of polylines in unit-square coordinates; the render
//! traversal hands it to the surface to be scaled into the rune's region.
//! Stores are looked up by rune name through [`AssetStore`].
//!
//! [`CachedAssetStore`] wraps any store with a read-through cache. Each key
//! has its own lock, so at most one resolution per name is in flight even if
//! several renders share the cache across threads. Failures are not cached and
//! leave no entry behind, so unknown names cannot grow the map.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::AssetError;
use crate::geom::Point;

// =============================================================================
// GLYPH
// =============================================================================

/// Drawable shape of a rune, as polylines inside the unit square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub strokes: Vec<Vec<Point>>,
}

impl Glyph {
    /// Decode a glyph from JSON and check it is drawable.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Malformed`] on invalid JSON or an invalid glyph.
    pub fn from_json(name: &str, raw: &str) -> Result<Self, AssetError> {
        let glyph: Self = serde_json::from_str(raw).map_err(|e| AssetError::Malformed {
            name: name.to_owned(),
            reason: e.to_string(),
        })?;
        glyph.validate(name)?;
        Ok(glyph)
    }

    /// # Errors
    ///
    /// Returns [`AssetError::Malformed`] if there are no strokes, a stroke is
    /// empty, or a point lies outside `[0, 1]` on either axis.
    pub fn validate(&self, name: &str) -> Result<(), AssetError> {
        let malformed = |reason: &str| AssetError::Malformed { name: name.to_owned(), reason: reason.to_owned() };

        if self.strokes.is_empty() {
            return Err(malformed("no strokes"));
        }
        for stroke in &self.strokes {
            if stroke.is_empty() {
                return Err(malformed("empty stroke"));
            }
            let in_unit = |v: f64| (0.0..=1.0).contains(&v);
            if stroke.iter().any(|p| !in_unit(p.x) || !in_unit(p.y)) {
                return Err(malformed("point outside the unit square"));
            }
        }
        Ok(())
    }
}

// =============================================================================
// STORES
// =============================================================================

/// Resolves a rune name to its glyph.
pub trait AssetStore {
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] for an unknown name and
    /// [`AssetError::Malformed`] or [`AssetError::Io`] when the asset exists
    /// but cannot be used.
    fn resolve(&self, name: &str) -> Result<Arc<Glyph>, AssetError>;
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    fn resolve(&self, name: &str) -> Result<Arc<Glyph>, AssetError> {
        (**self).resolve(name)
    }
}

/// In-process glyph table.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    glyphs: HashMap<String, Arc<Glyph>>,
}

impl MemoryAssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a glyph.
    pub fn insert(&mut self, name: impl Into<String>, glyph: Glyph) {
        self.glyphs.insert(name.into(), Arc::new(glyph));
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, glyph: Glyph) -> Self {
        self.insert(name, glyph);
        self
    }
}

impl AssetStore for MemoryAssetStore {
    fn resolve(&self, name: &str) -> Result<Arc<Glyph>, AssetError> {
        self.glyphs
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound { name: name.to_owned() })
    }
}

/// Reads glyphs from `<root>/<name>.json`.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl AssetStore for DirAssetStore {
    fn resolve(&self, name: &str) -> Result<Arc<Glyph>, AssetError> {
        let path = self.path_for(name);
        let raw = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound { name: name.to_owned() }
            } else {
                AssetError::Io { name: name.to_owned(), source }
            }
        })?;
        tracing::debug!(name, path = %path.display(), "loaded glyph file");
        Glyph::from_json(name, &raw).map(Arc::new)
    }
}

type Slot = Arc<Mutex<Option<Arc<Glyph>>>>;

/// Read-through cache over another store, keyed by rune name.
#[derive(Debug, Default)]
pub struct CachedAssetStore<S> {
    inner: S,
    slots: Mutex<HashMap<String, Slot>>,
}

impl<S: AssetStore> CachedAssetStore<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self { inner, slots: Mutex::new(HashMap::new()) }
    }

    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of names with a cached glyph.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .values()
            .filter(|slot| slot.lock().unwrap_or_else(PoisonError::into_inner).is_some())
            .count()
    }

    fn slot(&self, name: &str) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(name.to_owned()).or_default())
    }

    /// Forget `slot` after a failed fill, unless another caller has since
    /// filled it or replaced it. Lock order is map then slot, as in `cached_len`.
    fn evict_empty(&self, name: &str, slot: &Slot) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let unfilled = slots.get(name).is_some_and(|current| {
            Arc::ptr_eq(current, slot) && current.lock().unwrap_or_else(PoisonError::into_inner).is_none()
        });
        if unfilled {
            slots.remove(name);
        }
    }
}

impl<S: AssetStore> AssetStore for CachedAssetStore<S> {
    fn resolve(&self, name: &str) -> Result<Arc<Glyph>, AssetError> {
        let slot = self.slot(name);
        // Held across the fill so concurrent callers for the same name wait.
        let mut cached = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(glyph) = cached.as_ref() {
            return Ok(Arc::clone(glyph));
        }
        match self.inner.resolve(name) {
            Ok(glyph) => {
                tracing::debug!(name, "cached glyph");
                *cached = Some(Arc::clone(&glyph));
                Ok(glyph)
            }
            Err(e) => {
                drop(cached);
                self.evict_empty(name, &slot);
                Err(e)
            }
        }
    }
}
