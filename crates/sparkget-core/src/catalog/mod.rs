//! Remote version catalog: fetch, cache, parse, installed annotation.
//!
//! The catalog is a JSON array published at a configured URL listing every
//! valid (Spark, Hadoop) pairing together with its archive naming template
//! and download root. A local copy is cached inside the install root and
//! refreshed once it is older than the configured window.

mod fetch;
mod parse;

pub use fetch::{CatalogFetch, HttpFetch};
pub use parse::parse_catalog;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};

use crate::config::SparkgetConfig;
use crate::error::ResolveError;
use crate::installed::{self, InstalledEntry};

/// File name of the cached catalog inside the install root.
pub const CACHE_FILE_NAME: &str = "spark_versions.json";

/// One valid (Spark, Hadoop) pairing from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub spark_version: String,
    pub hadoop_version: String,
    /// printf-style two-slot template; the first slot receives the Spark
    /// version, the second the Hadoop version.
    pub archive_pattern: String,
    /// Download root the package file name is appended to.
    pub base_url: String,
    /// Catalog-provided default markers. Informational only; selection never
    /// consults them.
    pub default: bool,
    pub hadoop_default: bool,
    /// Set by `annotate` when a matching install exists on disk.
    pub installed: bool,
}

/// Loads the catalog through the cache, re-fetching when stale.
pub struct CatalogLoader<'a> {
    url: String,
    max_age_days: u64,
    cache_path: PathBuf,
    fetch: &'a dyn CatalogFetch,
}

impl<'a> CatalogLoader<'a> {
    pub fn new(cfg: &SparkgetConfig, install_root: &Path, fetch: &'a dyn CatalogFetch) -> Self {
        Self {
            url: cfg.catalog_url.clone(),
            max_age_days: cfg.cache_max_age_days,
            cache_path: install_root.join(CACHE_FILE_NAME),
            fetch,
        }
    }

    /// Current catalog records. Re-fetches when the cache file is missing,
    /// older than the staleness window, or `force_refresh` is set. A failed
    /// fetch falls back to an existing cache, stale or not; with no cache at
    /// all it is `CatalogUnavailable`.
    pub fn load(&self, force_refresh: bool) -> Result<Vec<CatalogRecord>, ResolveError> {
        if force_refresh || !self.cache_fresh() {
            match self.fetch.fetch(&self.url) {
                Ok(bytes) => {
                    tracing::info!("fetched catalog from {}", self.url);
                    if let Err(err) = self.write_cache(&bytes) {
                        tracing::warn!("could not write catalog cache: {:#}", err);
                    }
                    return parse_catalog(&bytes);
                }
                Err(err) => {
                    if !self.cache_path.is_file() {
                        return Err(ResolveError::CatalogUnavailable {
                            reason: format!(
                                "fetch of {} failed ({:#}) and no cached copy exists",
                                self.url, err
                            ),
                        });
                    }
                    tracing::warn!("catalog fetch failed ({:#}); using cached copy", err);
                }
            }
        }

        let bytes = fs::read(&self.cache_path).map_err(|err| ResolveError::CatalogUnavailable {
            reason: format!("cannot read cache {}: {}", self.cache_path.display(), err),
        })?;
        parse_catalog(&bytes)
    }

    /// Like `load`, with each record annotated against the install root scan.
    pub fn load_annotated(
        &self,
        install_root: &Path,
        force_refresh: bool,
    ) -> Result<Vec<CatalogRecord>, ResolveError> {
        let mut records = self.load(force_refresh)?;
        let installed = installed::list_installed(install_root);
        annotate(&mut records, &installed);
        Ok(records)
    }

    fn cache_fresh(&self) -> bool {
        match file_age_days(&self.cache_path) {
            Some(age) => age <= self.max_age_days,
            None => false,
        }
    }

    fn write_cache(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.cache_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        fs::write(&self.cache_path, bytes)
            .with_context(|| format!("cannot write {}", self.cache_path.display()))?;
        Ok(())
    }
}

/// Marks records installed iff an on-disk entry carries exactly the same
/// (spark, hadoop) strings. No version-aware or substring comparison.
pub fn annotate(records: &mut [CatalogRecord], installed: &[InstalledEntry]) {
    let on_disk: HashSet<(&str, &str)> = installed
        .iter()
        .map(|e| (e.spark_version.as_str(), e.hadoop_version.as_str()))
        .collect();
    for rec in records.iter_mut() {
        rec.installed = on_disk.contains(&(rec.spark_version.as_str(), rec.hadoop_version.as_str()));
    }
}

fn file_age_days(path: &Path) -> Option<u64> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    let age = SystemTime::now().duration_since(modified).ok()?;
    Some(age.as_secs() / 86_400)
}
