//! Archive download: single-stream GET written to a `.part` file, renamed
//! into place once the transfer completes, so an interrupted download never
//! leaves a half-written archive under the final name.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary suffix used before the rename into place.
const TEMP_SUFFIX: &str = ".part";

/// Path for the in-flight copy of `final_path`.
fn temp_path(final_path: &Path) -> PathBuf {
    let mut os = final_path.as_os_str().to_owned();
    os.push(TEMP_SUFFIX);
    PathBuf::from(os)
}

/// Downloads `url` into `dest`. Returns the number of bytes written.
///
/// Follows redirects. The transfer inherits libcurl's default socket
/// behavior; no explicit timeouts are applied.
pub fn download_to(url: &str, dest: &Path) -> Result<u64> {
    let tmp = temp_path(dest);
    let mut file = File::create(&tmp)
        .with_context(|| format!("failed to create temp file {}", tmp.display()))?;
    let mut written: u64 = 0;
    let mut write_error: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(concat!("sparkget/", env!("CARGO_PKG_VERSION")))?;

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(err) => {
                write_error = Some(err);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Some(err) = write_error {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("failed writing {}", tmp.display()));
    }
    if let Err(err) = perform_result {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("GET {} failed", url));
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        let _ = fs::remove_file(&tmp);
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    file.sync_all().context("sync of downloaded file failed")?;
    drop(file);
    fs::rename(&tmp, dest)
        .with_context(|| format!("failed to rename {} to {}", tmp.display(), dest.display()))?;
    Ok(written)
}
