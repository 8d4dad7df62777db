//! CLI for the sparkget Spark installer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sparkget_core::config;

use commands::{
    run_completions, run_default, run_home, run_install, run_list, run_uninstall, run_versions,
    InstallArgs,
};

/// Top-level CLI for the sparkget Spark installer.
#[derive(Debug, Parser)]
#[command(name = "sparkget")]
#[command(about = "sparkget: installer and configurator for local Apache Spark", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve, download, and configure a Spark version.
    Install {
        /// Spark version to install (default: newest available).
        #[arg(long, value_name = "VERSION")]
        spark_version: Option<String>,

        /// Hadoop version to install (default: newest available).
        #[arg(long, value_name = "VERSION")]
        hadoop_version: Option<String>,

        /// Keep existing conf files instead of re-copying the templates.
        #[arg(long)]
        keep_conf: bool,

        /// Root log level written into log4j.properties.
        #[arg(long, default_value = "INFO", value_name = "LEVEL")]
        spark_log_level: String,

        /// Re-fetch the version catalog even if the cache is fresh.
        #[arg(long)]
        refresh: bool,

        /// Skip the Java prerequisite check.
        #[arg(long)]
        skip_java_check: bool,
    },

    /// Remove an installed Spark version.
    Uninstall {
        /// Spark version to remove.
        #[arg(long, value_name = "VERSION")]
        spark_version: String,

        /// Hadoop version to remove.
        #[arg(long, value_name = "VERSION")]
        hadoop_version: String,
    },

    /// Show the Spark versions installed locally.
    List,

    /// Show every (Spark, Hadoop) pairing the catalog offers.
    Versions {
        /// Re-fetch the version catalog even if the cache is fresh.
        #[arg(long)]
        refresh: bool,
    },

    /// Show the version pair an unconstrained install would pick.
    Default,

    /// Print SPARK_HOME for an installed version.
    Home {
        /// Spark version to locate (default: newest installed).
        #[arg(long, value_name = "VERSION")]
        spark_version: Option<String>,

        /// Hadoop version to locate (default: newest installed).
        #[arg(long, value_name = "VERSION")]
        hadoop_version: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Install {
                spark_version,
                hadoop_version,
                keep_conf,
                spark_log_level,
                refresh,
                skip_java_check,
            } => run_install(
                &cfg,
                InstallArgs {
                    spark_version,
                    hadoop_version,
                    keep_conf,
                    spark_log_level,
                    refresh,
                    skip_java_check,
                },
            ),
            CliCommand::Uninstall {
                spark_version,
                hadoop_version,
            } => run_uninstall(&spark_version, &hadoop_version),
            CliCommand::List => run_list(),
            CliCommand::Versions { refresh } => run_versions(&cfg, refresh),
            CliCommand::Default => run_default(&cfg),
            CliCommand::Home {
                spark_version,
                hadoop_version,
            } => run_home(&cfg, spark_version.as_deref(), hadoop_version.as_deref()),
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests;
