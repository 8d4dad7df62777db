//! `sparkget home` – print SPARK_HOME for an installed version, e.g. for
//! `export SPARK_HOME=$(sparkget home)`.

use anyhow::Result;
use sparkget_core::catalog::{CatalogLoader, HttpFetch};
use sparkget_core::config::SparkgetConfig;
use sparkget_core::paths;
use sparkget_core::resolve::{self, SelectMode};

pub fn run_home(
    cfg: &SparkgetConfig,
    spark_version: Option<&str>,
    hadoop_version: Option<&str>,
) -> Result<()> {
    let root = paths::install_root()?;
    let fetch = HttpFetch::from_config(cfg);
    let loader = CatalogLoader::new(cfg, &root, &fetch);
    let records = loader.load_annotated(&root, false)?;

    match resolve::select_record(
        &records,
        spark_version,
        hadoop_version,
        true,
        SelectMode::Connect,
    ) {
        Ok(record) => {
            let info = resolve::resolve_install(record, &root);
            println!("{}", info.version_dir.display());
            Ok(())
        }
        Err(err) => {
            let err = anyhow::Error::new(err);
            super::print_no_match_help(&err);
            Err(err)
        }
    }
}
