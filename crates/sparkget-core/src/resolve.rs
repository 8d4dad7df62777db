//! Version selection and install-target derivation.
//!
//! Given the annotated catalog and optional constraints this picks exactly
//! one record, or fails with a typed error carrying the whole catalog so the
//! caller can always show the user every valid pairing. No partial or fuzzy
//! matching, no retries.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::catalog::CatalogRecord;
use crate::error::ResolveError;
use crate::installed::InstalledEntry;

/// Suffix of every published Spark archive.
const PACKAGE_SUFFIX: &str = ".tgz";

/// Where a selection failure will be presented, which shapes its guidance:
/// `Connect` failures tell the user to install explicitly, `Find` and
/// `Default` failures lead with the eligible-pairs table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Default,
    Find,
    Connect,
}

/// Everything the installer needs to know about one selected target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstall {
    pub component_name: String,
    pub package_file_name: String,
    pub remote_archive_url: String,
    pub install_root: PathBuf,
    pub version_dir: PathBuf,
    pub conf_dir: PathBuf,
    pub local_package_path: PathBuf,
    pub spark_version: String,
    pub hadoop_version: String,
    /// Fresh directory check at derivation time, independent of the
    /// catalog's installed flag (which may be stale by now).
    pub already_installed: bool,
}

/// Sort key: the versions joined with a space, compared as plain strings.
/// "2.9" therefore sorts above "2.10". Selection has always behaved this way
/// and switching to numeric ordering would silently change which version an
/// unconstrained invocation picks.
fn combine_versions(spark: &str, hadoop: &str) -> String {
    format!("{} {}", spark, hadoop)
}

/// Picks the single install candidate for the given constraints.
///
/// Filters the catalog to installed records (iff `installed_only`) and to
/// exact `spark`/`hadoop` matches where requested, then returns the
/// lexicographically maximal survivor. An empty result is a hard stop
/// carrying the full unfiltered catalog.
pub fn select_record<'a>(
    records: &'a [CatalogRecord],
    spark: Option<&str>,
    hadoop: Option<&str>,
    installed_only: bool,
    mode: SelectMode,
) -> Result<&'a CatalogRecord, ResolveError> {
    let mut candidates: Vec<&CatalogRecord> = records
        .iter()
        .filter(|r| !installed_only || r.installed)
        .filter(|r| spark.map_or(true, |v| r.spark_version == v))
        .filter(|r| hadoop.map_or(true, |v| r.hadoop_version == v))
        .collect();

    if candidates.is_empty() {
        return Err(ResolveError::NoMatchingVersion {
            spark: spark.map(str::to_string),
            hadoop: hadoop.map(str::to_string),
            mode,
            candidates: records.to_vec(),
        });
    }

    candidates.sort_by_key(|r| combine_versions(&r.spark_version, &r.hadoop_version));
    Ok(candidates[candidates.len() - 1])
}

/// Expands a printf-style two-slot archive pattern: the first `%s` receives
/// the Spark version, the second the Hadoop version. Extra text passes
/// through untouched.
pub fn expand_archive_pattern(pattern: &str, spark: &str, hadoop: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + spark.len() + hadoop.len());
    let mut rest = pattern;
    for value in [spark, hadoop] {
        match rest.find("%s") {
            Some(at) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Derives the install layout for a selected record. Pure apart from the
/// freshness check on `version_dir`.
pub fn resolve_install(record: &CatalogRecord, install_root: &Path) -> ResolvedInstall {
    let component_name = expand_archive_pattern(
        &record.archive_pattern,
        &record.spark_version,
        &record.hadoop_version,
    );
    let package_file_name = format!("{}{}", component_name, PACKAGE_SUFFIX);
    // Catalog base URLs are published with a trailing slash.
    let remote_archive_url = format!("{}{}", record.base_url, package_file_name);
    let version_dir = install_root.join(&component_name);
    let conf_dir = version_dir.join("conf");
    let local_package_path = install_root.join(&package_file_name);
    let already_installed = version_dir.is_dir();

    ResolvedInstall {
        component_name,
        package_file_name,
        remote_archive_url,
        install_root: install_root.to_path_buf(),
        version_dir,
        conf_dir,
        local_package_path,
        spark_version: record.spark_version.clone(),
        hadoop_version: record.hadoop_version.clone(),
        already_installed,
    }
}

/// Selects with no constraints: among installed versions when any exist,
/// otherwise across the whole catalog. Catalog default flags are never
/// consulted.
pub fn default_version(
    records: &[CatalogRecord],
    installed: &[InstalledEntry],
) -> Result<(String, String), ResolveError> {
    let record = select_record(
        records,
        None,
        None,
        !installed.is_empty(),
        SelectMode::Default,
    )?;
    Ok((record.spark_version.clone(), record.hadoop_version.clone()))
}

/// Sorted, deduplicated (spark, hadoop) pairs for user-facing listings.
pub fn eligible_pairs(records: &[CatalogRecord]) -> Vec<(String, String)> {
    let pairs: BTreeSet<(String, String)> = records
        .iter()
        .map(|r| (r.spark_version.clone(), r.hadoop_version.clone()))
        .collect();
    pairs.into_iter().collect()
}
