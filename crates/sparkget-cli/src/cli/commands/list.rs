//! `sparkget list` – show the Spark versions installed locally.

use anyhow::Result;
use sparkget_core::installed;
use sparkget_core::paths;

pub fn run_list() -> Result<()> {
    let root = paths::install_root()?;
    let entries = installed::list_installed(&root);
    if entries.is_empty() {
        println!("No Spark versions installed under {}.", root.display());
        return Ok(());
    }

    println!("{:<12} {:<10} {}", "SPARK", "HADOOP", "PATH");
    for entry in entries {
        println!(
            "{:<12} {:<10} {}",
            entry.spark_version,
            entry.hadoop_version,
            entry.dir.display()
        );
    }
    Ok(())
}
