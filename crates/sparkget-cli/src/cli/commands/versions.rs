//! `sparkget versions` – show every pairing the catalog offers.

use anyhow::Result;
use sparkget_core::catalog::{CatalogLoader, HttpFetch};
use sparkget_core::config::SparkgetConfig;
use sparkget_core::paths;

pub fn run_versions(cfg: &SparkgetConfig, refresh: bool) -> Result<()> {
    let root = paths::install_root()?;
    let fetch = HttpFetch::from_config(cfg);
    let loader = CatalogLoader::new(cfg, &root, &fetch);
    let records = loader.load_annotated(&root, refresh)?;

    if records.is_empty() {
        println!("The catalog lists no versions.");
        return Ok(());
    }

    println!(
        "{:<12} {:<10} {:<10} {}",
        "SPARK", "HADOOP", "INSTALLED", "DEFAULT"
    );
    for rec in &records {
        println!(
            "{:<12} {:<10} {:<10} {}",
            rec.spark_version,
            rec.hadoop_version,
            if rec.installed { "yes" } else { "-" },
            if rec.default && rec.hadoop_default {
                "yes"
            } else {
                "-"
            }
        );
    }
    Ok(())
}
