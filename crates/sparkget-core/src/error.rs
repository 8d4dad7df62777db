//! Typed failures of the catalog/resolver layer.
//!
//! These must reach the CLI intact so it can render the eligible-pairs table
//! from the carried catalog; everything else in the crate uses anyhow.

use thiserror::Error;

use crate::catalog::CatalogRecord;
use crate::resolve::SelectMode;

/// Failures the presentation layer has to be able to match on.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Remote fetch failed and no usable local cache exists. Never retried.
    #[error("version catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    /// Filtering produced an empty candidate set. Carries the full
    /// unfiltered catalog so the caller can list every valid pairing.
    #[error(
        "no available Spark {} / Hadoop {} pairing",
        requested(.spark),
        requested(.hadoop)
    )]
    NoMatchingVersion {
        spark: Option<String>,
        hadoop: Option<String>,
        mode: SelectMode,
        candidates: Vec<CatalogRecord>,
    },
}

fn requested(version: &Option<String>) -> &str {
    version.as_deref().unwrap_or("(any)")
}
