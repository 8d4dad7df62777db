//! Remote catalog transport.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::config::SparkgetConfig;

/// Transport seam for the catalog loader; lets tests feed canned bytes.
pub trait CatalogFetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// libcurl-backed fetch used by the CLI.
///
/// Timeouts left unset inherit libcurl's platform defaults.
#[derive(Debug, Default)]
pub struct HttpFetch {
    connect_timeout: Option<Duration>,
    timeout: Option<Duration>,
}

impl HttpFetch {
    pub fn from_config(cfg: &SparkgetConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            timeout: cfg.fetch_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl CatalogFetch for HttpFetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(concat!("sparkget/", env!("CARGO_PKG_VERSION")))?;
        if let Some(t) = self.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.timeout {
            easy.timeout(t)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform().context("GET request failed")?;
        }

        let code = easy.response_code().context("no response code")?;
        if code < 200 || code >= 300 {
            anyhow::bail!("GET {} returned HTTP {}", url, code);
        }
        Ok(body)
    }
}
