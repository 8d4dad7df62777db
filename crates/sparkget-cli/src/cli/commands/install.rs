//! `sparkget install` – resolve, download, unpack, and configure a version.

use anyhow::Result;
use sparkget_core::catalog::HttpFetch;
use sparkget_core::config::SparkgetConfig;
use sparkget_core::envwriter;
use sparkget_core::install::{self, InstallOptions};
use sparkget_core::java;
use sparkget_core::paths;

pub struct InstallArgs {
    pub spark_version: Option<String>,
    pub hadoop_version: Option<String>,
    pub keep_conf: bool,
    pub spark_log_level: String,
    pub refresh: bool,
    pub skip_java_check: bool,
}

pub fn run_install(cfg: &SparkgetConfig, args: InstallArgs) -> Result<()> {
    if !args.skip_java_check {
        java::verify_java()?;
    }

    let root = paths::install_root()?;
    let fetch = HttpFetch::from_config(cfg);
    let mut env = envwriter::platform_writer();
    let options = InstallOptions {
        spark_version: args.spark_version,
        hadoop_version: args.hadoop_version,
        reset_conf: !args.keep_conf,
        spark_log_level: Some(args.spark_log_level),
        force_refresh: args.refresh,
    };

    match install::install(cfg, &root, &fetch, env.as_mut(), &options) {
        Ok(info) => {
            println!(
                "Installed Spark {} / Hadoop {} at {}",
                info.spark_version,
                info.hadoop_version,
                info.version_dir.display()
            );
            Ok(())
        }
        Err(err) => {
            super::print_no_match_help(&err);
            Err(err)
        }
    }
}
