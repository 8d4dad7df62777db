//! `sparkget default` – show the pair an unconstrained install would pick.

use anyhow::Result;
use sparkget_core::catalog::{CatalogLoader, HttpFetch};
use sparkget_core::config::SparkgetConfig;
use sparkget_core::installed;
use sparkget_core::paths;
use sparkget_core::resolve;

pub fn run_default(cfg: &SparkgetConfig) -> Result<()> {
    let root = paths::install_root()?;
    let fetch = HttpFetch::from_config(cfg);
    let loader = CatalogLoader::new(cfg, &root, &fetch);
    let records = loader.load_annotated(&root, false)?;
    let installed = installed::list_installed(&root);

    match resolve::default_version(&records, &installed) {
        Ok((spark, hadoop)) => {
            println!("Spark {} / Hadoop {}", spark, hadoop);
            Ok(())
        }
        Err(err) => {
            let err = anyhow::Error::new(err);
            super::print_no_match_help(&err);
            Err(err)
        }
    }
}
