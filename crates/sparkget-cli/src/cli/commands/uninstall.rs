//! `sparkget uninstall` – remove an installed version.

use anyhow::Result;
use sparkget_core::envwriter;
use sparkget_core::install;
use sparkget_core::paths;

pub fn run_uninstall(spark_version: &str, hadoop_version: &str) -> Result<()> {
    let root = paths::install_root()?;
    let mut env = envwriter::platform_writer();
    install::uninstall(&root, spark_version, hadoop_version, env.as_mut())?;
    println!("Uninstalled Spark {} / Hadoop {}", spark_version, hadoop_version);
    Ok(())
}
