//! Scan of the install root for Spark versions already on disk.
//!
//! Install directories are named `spark-<version>-bin-<label>` where the
//! label usually carries a `hadoop` prefix (`spark-2.1.0-bin-hadoop2.7`) but
//! not always (`spark-1.6.2-bin-cdh4`). Anything else in the root is ignored.

use std::path::{Path, PathBuf};

/// A Spark install present on disk. Exists only as long as its directory
/// does; there is no persisted index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledEntry {
    pub spark_version: String,
    pub hadoop_version: String,
    pub dir: PathBuf,
}

/// Splits an install directory name into its (spark, hadoop) versions.
///
/// The `-bin-` separator is matched from the right so a version string
/// containing the separator cannot shift the split point.
pub fn parse_component_dir_name(name: &str) -> Option<(String, String)> {
    let rest = name.strip_prefix("spark-")?;
    let (version, label) = rest.rsplit_once("-bin-")?;
    let hadoop = label.strip_prefix("hadoop").unwrap_or(label);
    Some((version.to_string(), hadoop.to_string()))
}

/// Spark installs below `root`, sorted by directory name. A missing or
/// unreadable root yields an empty list, never an error, and the root is not
/// created here.
pub fn list_installed(root: &Path) -> Vec<InstalledEntry> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) => {
            if root.exists() {
                tracing::warn!("cannot scan install root {}: {}", root.display(), err);
            }
            return Vec::new();
        }
    };

    let mut found = Vec::new();
    for entry in entries.flatten() {
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some((spark, hadoop)) = parse_component_dir_name(&name) {
            found.push(InstalledEntry {
                spark_version: spark,
                hadoop_version: hadoop,
                dir: path,
            });
        }
    }
    found.sort_by(|a, b| a.dir.cmp(&b.dir));
    found
}
