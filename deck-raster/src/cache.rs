//! Mask cache — memoized (symbol, size) → mask.
//!
//! Owned by a render session: created when the session starts, dropped
//! with it. Each symbol's path is parsed and flattened once; each
//! (symbol, size) pair is rasterized once. Entries are never evicted or
//! mutated, so readers share them as `Arc`s.
//!
//! ```text
//! get_or_create(symbol, size)
//!   ├── masks hit?     → Arc<Mask>
//!   ├── polygons hit?  → reuse rings     (else parse + flatten, count++)
//!   └── rasterize      → insert, Arc<Mask> (count++)
//! ```
//!
//! Both maps sit behind `RwLock`s with a re-check under the write lock, so
//! concurrent card renders populate each entry exactly once.

use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use deck_core::{Polygon, SymbolId, SymbolLibrary, DEFAULT_CURVE_SAMPLES};

use crate::mask::{checked_size, rasterize, Mask, RasterError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaskKey {
    pub symbol: SymbolId,
    pub size: u32,
}

/// Work counters, for diagnostics and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Paths parsed and flattened.
    pub parses: usize,
    /// Masks rasterized.
    pub rasterizations: usize,
    /// Masks currently held.
    pub entries: usize,
}

pub struct MaskCache {
    library: SymbolLibrary,
    curve_samples: usize,
    polygons: RwLock<FxHashMap<SymbolId, Arc<[Polygon]>>>,
    masks: RwLock<FxHashMap<MaskKey, Arc<Mask>>>,
    parses: AtomicUsize,
    rasterizations: AtomicUsize,
}

impl Default for MaskCache {
    fn default() -> Self {
        Self::new(SymbolLibrary::standard(), DEFAULT_CURVE_SAMPLES)
    }
}

impl MaskCache {
    pub fn new(library: SymbolLibrary, curve_samples: usize) -> Self {
        Self {
            library,
            curve_samples,
            polygons: RwLock::new(FxHashMap::default()),
            masks: RwLock::new(FxHashMap::default()),
            parses: AtomicUsize::new(0),
            rasterizations: AtomicUsize::new(0),
        }
    }

    pub fn library(&self) -> &SymbolLibrary {
        &self.library
    }

    /// Return the mask for `(symbol, size)`, building it on first request.
    pub fn get_or_create(&self, symbol: SymbolId, size: i32) -> Result<Arc<Mask>, RasterError> {
        let key = MaskKey {
            symbol,
            size: checked_size(size)?,
        };

        if let Some(mask) = self.masks.read().unwrap_or_else(PoisonError::into_inner).get(&key) {
            return Ok(Arc::clone(mask));
        }

        let polygons = self.polygons(symbol)?;

        let mut masks = self.masks.write().unwrap_or_else(PoisonError::into_inner);
        // Another writer may have filled it between the locks.
        if let Some(mask) = masks.get(&key) {
            return Ok(Arc::clone(mask));
        }

        let mask = Arc::new(rasterize(&polygons, self.library.viewbox(), size)?);
        self.rasterizations.fetch_add(1, Ordering::Relaxed);
        log::debug!("MaskCache: rasterized {} at {}px", symbol, key.size);

        masks.insert(key, Arc::clone(&mask));
        Ok(mask)
    }

    /// Flattened rings for a symbol, parsed on first use.
    pub fn polygons(&self, symbol: SymbolId) -> Result<Arc<[Polygon]>, RasterError> {
        if let Some(rings) = self
            .polygons
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&symbol)
        {
            return Ok(Arc::clone(rings));
        }

        let mut polygons = self.polygons.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(rings) = polygons.get(&symbol) {
            return Ok(Arc::clone(rings));
        }

        let path = self
            .library
            .parse(symbol)
            .map_err(|source| RasterError::Parse { symbol, source })?;
        let rings: Arc<[Polygon]> = path.flatten(self.curve_samples).into();
        self.parses.fetch_add(1, Ordering::Relaxed);
        log::debug!("MaskCache: parsed {} into {} ring(s)", symbol, rings.len());

        polygons.insert(symbol, Arc::clone(&rings));
        Ok(rings)
    }

    /// Build every (symbol, size) combination up front, e.g. before
    /// rendering cards on several threads.
    pub fn prewarm(&self, symbols: &[SymbolId], sizes: &[i32]) -> Result<(), RasterError> {
        for &symbol in symbols {
            for &size in sizes {
                self.get_or_create(symbol, size)?;
            }
        }
        Ok(())
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            parses: self.parses.load(Ordering::Relaxed),
            rasterizations: self.rasterizations.load(Ordering::Relaxed),
            entries: self.masks.read().unwrap_or_else(PoisonError::into_inner).len(),
        }
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_second_request_is_a_hit() {
        let cache = MaskCache::default();
        let a = cache.get_or_create(SymbolId::Heart, 64).unwrap();
        let b = cache.get_or_create(SymbolId::Heart, 64).unwrap();
        assert_eq!(*a, *b);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(
            cache.stats(),
            CacheStats {
                parses: 1,
                rasterizations: 1,
                entries: 1
            }
        );
    }

    #[test]
    fn test_symbol_parsed_once_across_sizes() {
        let cache = MaskCache::default();
        for size in [10, 20, 30, 20, 10] {
            let mask = cache.get_or_create(SymbolId::Club, size).unwrap();
            assert_eq!(mask.size(), size as u32);
        }
        let stats = cache.stats();
        assert_eq!(stats.parses, 1);
        assert_eq!(stats.rasterizations, 3);
        assert_eq!(stats.entries, 3);
    }

    #[test]
    fn test_distinct_symbols_are_distinct_entries() {
        let cache = MaskCache::default();
        let spade = cache.get_or_create(SymbolId::Spade, 50).unwrap();
        let diamond = cache.get_or_create(SymbolId::Diamond, 50).unwrap();
        assert_ne!(*spade, *diamond);
        assert_eq!(cache.stats().parses, 2);
    }

    #[test]
    fn test_invalid_size_not_cached() {
        let cache = MaskCache::default();
        assert_eq!(
            cache.get_or_create(SymbolId::Spade, 0).unwrap_err(),
            RasterError::InvalidSize(0)
        );
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_parse_error_carries_symbol() {
        let library = SymbolLibrary::standard().with_path(SymbolId::Diamond, "M0,0 A1,1");
        let cache = MaskCache::new(library, DEFAULT_CURVE_SAMPLES);
        let err = cache.get_or_create(SymbolId::Diamond, 32).unwrap_err();
        match err {
            RasterError::Parse { symbol, source } => {
                assert_eq!(symbol, SymbolId::Diamond);
                assert!(source.to_string().contains("\"A\""));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(cache.get_or_create(SymbolId::Heart, 32).is_ok());
    }

    #[test]
    fn test_prewarm_then_hits() {
        let cache = MaskCache::default();
        cache.prewarm(&SymbolId::ALL, &[12, 24]).unwrap();
        assert_eq!(cache.stats().rasterizations, 8);
        cache.get_or_create(SymbolId::Heart, 24).unwrap();
        assert_eq!(cache.stats().rasterizations, 8);
    }

    #[test]
    fn test_concurrent_population_builds_once() {
        let cache = MaskCache::default();
        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    cache.get_or_create(SymbolId::Spade, 88).unwrap();
                });
            }
        });
        let stats = cache.stats();
        assert_eq!(stats.parses, 1);
        assert_eq!(stats.rasterizations, 1);
    }
}
