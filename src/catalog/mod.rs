//! Disease catalog: the read-only reference table every symptom check runs
//! against.
//!
//! Two on-disk sources are supported:
//! - structured: pre-serialized JSON record list (preferred)
//! - tabular: CSV with a `disease` column plus `symptom*` columns (fallback)
//!
//! The catalog is loaded at most once per process (see [`cache`]) and shared
//! by reference afterwards.

pub mod cache;
pub mod provider;
pub mod structured;
pub mod tabular;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config;
use crate::models::DiseaseRecord;

pub use cache::{load_catalog, process_catalog_loaded, CatalogCache};
pub use provider::{CachedCatalog, CatalogProvider, ProcessCatalog, StaticCatalog};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No disease data found. Expected '{}' or '{}'", .structured.display(), .tabular.display())]
    DataUnavailable { structured: PathBuf, tabular: PathBuf },

    #[error("Failed to load disease data from {source_path}: {reason}")]
    DataCorrupt { source_path: String, reason: String },

    #[error("Disease data in {source_path} contains no usable records")]
    Empty { source_path: String },
}

impl CatalogError {
    /// Stable code for the boundary layer.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::DataUnavailable { .. } => "DATA_UNAVAILABLE",
            CatalogError::DataCorrupt { .. } | CatalogError::Empty { .. } => "DATA_CORRUPT",
        }
    }

    pub fn is_data_corrupt(&self) -> bool {
        !matches!(self, CatalogError::DataUnavailable { .. })
    }

    fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        CatalogError::DataCorrupt {
            source_path: path.display().to_string(),
            reason: reason.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════

/// Ordered disease records plus the union of their symptoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<DiseaseRecord>,
    vocabulary: BTreeSet<String>,
}

impl Catalog {
    pub fn new(records: Vec<DiseaseRecord>) -> Self {
        let vocabulary = records
            .iter()
            .flat_map(|r| r.symptoms.iter().cloned())
            .collect();
        Self {
            records,
            vocabulary,
        }
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }

    /// Whether a normalized token names a known symptom.
    pub fn is_known(&self, symptom: &str) -> bool {
        self.vocabulary.contains(symptom)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════
// Source resolution
// ═══════════════════════════════════════════════════════════

/// Fixed locations of the two catalog sources.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    pub structured: PathBuf,
    pub tabular: PathBuf,
}

impl CatalogSource {
    /// Locations under a data directory, using the standard file names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            structured: dir.join(config::STRUCTURED_CATALOG_FILE),
            tabular: dir.join(config::TABULAR_CATALOG_FILE),
        }
    }

    /// Locations from the process configuration.
    pub fn from_config() -> Self {
        Self {
            structured: config::structured_catalog_path(),
            tabular: config::tabular_catalog_path(),
        }
    }

    /// Read and normalize the catalog.
    ///
    /// The structured file wins whenever it exists; a structured file that
    /// fails to parse is an error, not a cue to fall back.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let (path, records) = if self.structured.exists() {
            let records = structured::read_records(&self.structured)?;
            (&self.structured, records)
        } else if self.tabular.exists() {
            let records = tabular::read_records(&self.tabular)?;
            (&self.tabular, records)
        } else {
            tracing::warn!(
                structured = %self.structured.display(),
                tabular = %self.tabular.display(),
                "No disease catalog source found"
            );
            return Err(CatalogError::DataUnavailable {
                structured: self.structured.clone(),
                tabular: self.tabular.clone(),
            });
        };

        if records.is_empty() {
            return Err(CatalogError::Empty {
                source_path: path.display().to_string(),
            });
        }

        let catalog = Catalog::new(records);
        tracing::info!(
            source = %path.display(),
            records = catalog.len(),
            vocabulary = catalog.vocabulary().len(),
            "Disease catalog loaded"
        );
        Ok(catalog)
    }
}
