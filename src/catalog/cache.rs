//! Once-only catalog cache.
//!
//! Readers that find the cell populated never take the lock. Concurrent
//! first callers serialize on `load_guard`, so a single load runs and the
//! rest reuse its result. A failed load leaves the cell empty and the next
//! caller retries.

use std::sync::{Mutex, OnceLock, PoisonError};

use super::{Catalog, CatalogError, CatalogSource};

pub struct CatalogCache {
    cell: OnceLock<Catalog>,
    load_guard: Mutex<()>,
}

impl CatalogCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            load_guard: Mutex::new(()),
        }
    }

    pub fn get(&self) -> Option<&Catalog> {
        self.cell.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the cached catalog, running `load` if nothing is cached yet.
    pub fn get_or_load<F>(&self, load: F) -> Result<&Catalog, CatalogError>
    where
        F: FnOnce() -> Result<Catalog, CatalogError>,
    {
        if let Some(catalog) = self.cell.get() {
            return Ok(catalog);
        }

        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self
            .load_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(catalog) = self.cell.get() {
            return Ok(catalog);
        }

        let catalog = load()?;
        Ok(self.cell.get_or_init(|| catalog))
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

static PROCESS_CATALOG: CatalogCache = CatalogCache::new();

/// The process-wide catalog, loaded from the configured sources on first use.
pub fn load_catalog() -> Result<&'static Catalog, CatalogError> {
    PROCESS_CATALOG.get_or_load(|| CatalogSource::from_config().load())
}

pub fn process_catalog_loaded() -> bool {
    PROCESS_CATALOG.is_loaded()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::catalog::test_support::flu_and_cold;

    #[test]
    fn loads_once_and_reuses() {
        let cache = CatalogCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let catalog = cache
                .get_or_load(|| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(flu_and_cold())
                })
                .unwrap();
            assert_eq!(catalog.len(), 2);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.is_loaded());
    }

    #[test]
    fn failed_load_is_not_cached() {
        let cache = CatalogCache::new();
        let err = cache
            .get_or_load(|| {
                Err(CatalogError::Empty {
                    source_path: "test".into(),
                })
            })
            .unwrap_err();
        assert!(matches!(err, CatalogError::Empty { .. }));
        assert!(!cache.is_loaded());

        let catalog = cache.get_or_load(|| Ok(flu_and_cold())).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn first_successful_load_wins() {
        let cache = CatalogCache::new();
        cache.get_or_load(|| Ok(flu_and_cold())).unwrap();
        let catalog = cache
            .get_or_load(|| Ok(Catalog::new(Vec::new())))
            .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn concurrent_callers_share_a_single_load() {
        let cache = Arc::new(CatalogCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                std::thread::spawn(move || {
                    let catalog = cache
                        .get_or_load(|| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            std::thread::sleep(std::time::Duration::from_millis(20));
                            Ok(flu_and_cold())
                        })
                        .unwrap();
                    catalog.len()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
