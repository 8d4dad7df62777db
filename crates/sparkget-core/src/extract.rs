//! `.tgz` unpacking.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::Path;

/// Unpacks a gzipped tarball into `dest`. Published Spark archives carry the
/// `spark-<version>-bin-<label>/` top-level directory, so unpacking into the
/// install root creates the version directory directly.
pub fn unpack_tgz(archive: &Path, dest: &Path) -> Result<()> {
    let file =
        File::open(archive).with_context(|| format!("failed to open {}", archive.display()))?;
    let decoder = GzDecoder::new(file);
    let mut tar = tar::Archive::new(decoder);
    tar.unpack(dest).with_context(|| {
        format!(
            "failed to unpack {} into {}",
            archive.display(),
            dest.display()
        )
    })?;
    Ok(())
}
