//! Where callers get their catalog from.

use std::path::Path;

use super::{load_catalog, process_catalog_loaded, Catalog, CatalogCache, CatalogError, CatalogSource};

/// Supplies the shared read-only catalog to request handlers.
pub trait CatalogProvider: Send + Sync {
    /// The catalog, loading it first if needed.
    fn catalog(&self) -> Result<&Catalog, CatalogError>;

    /// Whether a catalog is already in memory (no load triggered).
    fn is_loaded(&self) -> bool;
}

/// The process-wide catalog from the configured data directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCatalog;

impl CatalogProvider for ProcessCatalog {
    fn catalog(&self) -> Result<&Catalog, CatalogError> {
        load_catalog()
    }

    fn is_loaded(&self) -> bool {
        process_catalog_loaded()
    }
}

/// A catalog with its own cache and sources, independent of the process one.
pub struct CachedCatalog {
    source: CatalogSource,
    cache: CatalogCache,
}

impl CachedCatalog {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            cache: CatalogCache::new(),
        }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(CatalogSource::in_dir(dir))
    }
}

impl CatalogProvider for CachedCatalog {
    fn catalog(&self) -> Result<&Catalog, CatalogError> {
        self.cache.get_or_load(|| self.source.load())
    }

    fn is_loaded(&self) -> bool {
        self.cache.is_loaded()
    }
}

/// An already-built catalog.
pub struct StaticCatalog(pub Catalog);

impl CatalogProvider for StaticCatalog {
    fn catalog(&self) -> Result<&Catalog, CatalogError> {
        Ok(&self.0)
    }

    fn is_loaded(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_catalog_loads_lazily() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("diseases.json"),
            r#"[{"disease": "Flu", "symptoms": ["fever", "cough"]}]"#,
        )
        .unwrap();

        let provider = CachedCatalog::in_dir(dir.path());
        assert!(!provider.is_loaded());
        assert_eq!(provider.catalog().unwrap().len(), 1);
        assert!(provider.is_loaded());

        // Cached: removing the file does not matter any more.
        std::fs::remove_file(dir.path().join("diseases.json")).unwrap();
        assert_eq!(provider.catalog().unwrap().len(), 1);
    }

    #[test]
    fn cached_catalog_reports_missing_data() {
        let dir = tempfile::tempdir().unwrap();
        let provider = CachedCatalog::in_dir(dir.path());
        assert!(matches!(
            provider.catalog(),
            Err(CatalogError::DataUnavailable { .. })
        ));
        assert!(!provider.is_loaded());
    }
}
