//! Install/uninstall orchestration tying the resolver to the plumbing.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::catalog::{CatalogFetch, CatalogLoader};
use crate::conf;
use crate::config::SparkgetConfig;
use crate::download;
use crate::envwriter::{self, EnvironmentWriter};
use crate::extract;
use crate::installed;
use crate::resolve::{self, ResolvedInstall, SelectMode};

/// Knobs of one install invocation.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub spark_version: Option<String>,
    pub hadoop_version: Option<String>,
    /// Re-copy the conf templates before patching. `false` preserves a
    /// hand-edited conf.
    pub reset_conf: bool,
    /// Root logger level patched into `log4j.properties`; `None` leaves
    /// log4j alone.
    pub spark_log_level: Option<String>,
    /// Bypass the catalog cache.
    pub force_refresh: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            spark_version: None,
            hadoop_version: None,
            reset_conf: true,
            spark_log_level: Some("INFO".to_string()),
            force_refresh: false,
        }
    }
}

/// Resolves, downloads, unpacks, and configures one Spark install.
///
/// `env` receives the SPARK_HOME/PYTHONPATH mutations and `fetch` the
/// catalog transfer, so the whole flow is drivable from tests. Re-running
/// with the same inputs yields the same resolved target and skips work that
/// is already done.
pub fn install(
    cfg: &SparkgetConfig,
    install_root: &Path,
    fetch: &dyn CatalogFetch,
    env: &mut dyn EnvironmentWriter,
    options: &InstallOptions,
) -> Result<ResolvedInstall> {
    fs::create_dir_all(install_root)
        .with_context(|| format!("cannot create install root {}", install_root.display()))?;

    let loader = CatalogLoader::new(cfg, install_root, fetch);
    let records = loader.load_annotated(install_root, options.force_refresh)?;
    let record = resolve::select_record(
        &records,
        options.spark_version.as_deref(),
        options.hadoop_version.as_deref(),
        false,
        SelectMode::Find,
    )?;
    let info = resolve::resolve_install(record, install_root);

    tracing::info!(
        "installing and configuring Spark {} / Hadoop {}",
        info.spark_version,
        info.hadoop_version
    );

    if !info.version_dir.is_dir() {
        if !info.local_package_path.is_file() {
            tracing::info!(
                "downloading {} into {}",
                info.remote_archive_url,
                info.local_package_path.display()
            );
            download::download_to(&info.remote_archive_url, &info.local_package_path)?;
        }
        tracing::info!(
            "extracting {} into {}",
            info.local_package_path.display(),
            info.install_root.display()
        );
        extract::unpack_tgz(&info.local_package_path, &info.install_root)?;
    }

    configure(&info, options)?;
    envwriter::apply_spark_env(&info.version_dir, env)?;

    Ok(info)
}

fn configure(info: &ResolvedInstall, options: &InstallOptions) -> Result<()> {
    if let Some(level) = options.spark_log_level.as_deref() {
        conf::set_log4j_properties(&info.conf_dir, &log4j_properties(level), options.reset_conf)?;
    }

    let hive_site = info.conf_dir.join("hive-site.xml");
    if hive_site.is_file() && !options.reset_conf {
        return Ok(());
    }

    let mut hive = vec![
        (
            "javax.jdo.option.ConnectionURL".to_string(),
            "jdbc:derby:memory:databaseName=metastore_db;create=true".to_string(),
        ),
        (
            "javax.jdo.option.ConnectionDriverName".to_string(),
            "org.apache.derby.jdbc.EmbeddedDriver".to_string(),
        ),
    ];
    let mut defaults: Vec<(String, String)> = Vec::new();
    if cfg!(windows) {
        // Derby needs writable scratch space; keep it inside the install.
        let scratch = info.version_dir.join("tmp").join("hive");
        let scratch = scratch.to_string_lossy().into_owned();
        hive.push(("hive.exec.scratchdir".to_string(), scratch.clone()));
        hive.push(("hive.exec.local.scratchdir".to_string(), scratch.clone()));
        hive.push(("hive.metastore.warehouse.dir".to_string(), scratch.clone()));
        defaults.push(("spark.sql.warehouse.dir".to_string(), scratch));
    }

    conf::write_hive_site(&hive_site, &hive)?;
    if !defaults.is_empty() {
        conf::set_spark_defaults(&info.conf_dir, &defaults, options.reset_conf)?;
    }
    Ok(())
}

/// The appender set the install writes, rooted at the chosen level.
fn log4j_properties(level: &str) -> Vec<(String, String)> {
    vec![
        (
            "log4j.rootCategory".to_string(),
            format!("{},console,localfile", level),
        ),
        (
            "log4j.appender.localfile".to_string(),
            "org.apache.log4j.DailyRollingFileAppender".to_string(),
        ),
        (
            "log4j.appender.localfile.file".to_string(),
            "log4j.spark.log".to_string(),
        ),
        (
            "log4j.appender.localfile.layout".to_string(),
            "org.apache.log4j.PatternLayout".to_string(),
        ),
        (
            "log4j.appender.localfile.layout.ConversionPattern".to_string(),
            "%d{yy/MM/dd HH:mm:ss} %p %c{1}: %m%n".to_string(),
        ),
    ]
}

/// Removes an installed (spark, hadoop) pair.
///
/// Resolution goes through the directory scan rather than the catalog, so
/// uninstall needs no network and still works for versions the catalog has
/// since dropped. Removing the last install also clears the Spark
/// environment variables.
pub fn uninstall(
    install_root: &Path,
    spark_version: &str,
    hadoop_version: &str,
    env: &mut dyn EnvironmentWriter,
) -> Result<()> {
    let entries = installed::list_installed(install_root);
    let target = entries
        .iter()
        .find(|e| e.spark_version == spark_version && e.hadoop_version == hadoop_version);
    let target = match target {
        Some(entry) => entry,
        None => {
            let known: Vec<String> = entries
                .iter()
                .map(|e| format!("{}/{}", e.spark_version, e.hadoop_version))
                .collect();
            let known = if known.is_empty() {
                "none".to_string()
            } else {
                known.join(", ")
            };
            anyhow::bail!(
                "Spark {} / Hadoop {} is not installed (installed: {})",
                spark_version,
                hadoop_version,
                known
            );
        }
    };

    fs::remove_dir_all(&target.dir)
        .with_context(|| format!("failed to remove {}", target.dir.display()))?;
    tracing::info!("removed {}", target.dir.display());

    if entries.len() == 1 {
        envwriter::clear_spark_env(env)?;
    }
    Ok(())
}
