//! Process/OS environment mutation behind an injected capability.
//!
//! Only the install orchestrator drives a writer; the resolver never touches
//! the environment, which keeps every selection code path free of
//! process-global side effects.

use anyhow::Result;
use std::path::Path;

use crate::installed::parse_component_dir_name;

/// Separator inside PATH-like variables.
#[cfg(windows)]
pub const PATH_DELIMITER: char = ';';
#[cfg(not(windows))]
pub const PATH_DELIMITER: char = ':';

pub const SPARK_HOME_VAR: &str = "SPARK_HOME";
pub const PYTHONPATH_VAR: &str = "PYTHONPATH";

/// Capability for reading and mutating the user's environment.
pub trait EnvironmentWriter {
    fn current(&self, key: &str) -> Option<String>;
    /// Set for the running process.
    fn set(&mut self, key: &str, value: &str);
    /// Make variables outlive the process (registry on Windows, guidance to
    /// the user elsewhere).
    fn persist(&mut self, vars: &[(String, String)]) -> Result<()>;
    /// Remove variables from the process and any persistent store.
    fn clear(&mut self, keys: &[&str]) -> Result<()>;
}

/// Variables an install of `version_dir` requires given the current values:
/// the `python/lib` zips spliced into PYTHONPATH ahead of any older Spark
/// entries, and SPARK_HOME pointed at the version directory. Returns only
/// what changed.
pub fn spark_env_updates(
    version_dir: &Path,
    current_pythonpath: Option<&str>,
    current_spark_home: Option<&str>,
) -> Vec<(String, String)> {
    let mut updates = Vec::new();

    let zips = python_lib_zips(version_dir);
    if !zips.is_empty() {
        let existing: Vec<String> = match current_pythonpath {
            Some(value) if !value.is_empty() => value
                .split(PATH_DELIMITER)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };
        if !existing.contains(&zips[0]) {
            let insert_at = existing
                .iter()
                .position(|entry| is_spark_path(entry))
                .unwrap_or(existing.len());
            let mut merged: Vec<String> = existing[..insert_at].to_vec();
            merged.extend(zips);
            merged.extend_from_slice(&existing[insert_at..]);
            updates.push((
                PYTHONPATH_VAR.to_string(),
                merged.join(&PATH_DELIMITER.to_string()),
            ));
        }
    }

    let home = version_dir.to_string_lossy().into_owned();
    if current_spark_home != Some(home.as_str()) {
        updates.push((SPARK_HOME_VAR.to_string(), home));
    }

    updates
}

/// Applies the env updates for `version_dir` through `writer`, persisting
/// whatever changed.
pub fn apply_spark_env(version_dir: &Path, writer: &mut dyn EnvironmentWriter) -> Result<()> {
    let updates = spark_env_updates(
        version_dir,
        writer.current(PYTHONPATH_VAR).as_deref(),
        writer.current(SPARK_HOME_VAR).as_deref(),
    );
    if updates.is_empty() {
        return Ok(());
    }
    for (key, value) in &updates {
        writer.set(key, value);
    }
    writer.persist(&updates)
}

/// Drops the Spark variables entirely (used when the last install goes away).
pub fn clear_spark_env(writer: &mut dyn EnvironmentWriter) -> Result<()> {
    writer.clear(&[SPARK_HOME_VAR, PYTHONPATH_VAR])
}

/// Zip archives under `<version_dir>/python/lib`, sorted by name. These are
/// the pyspark/py4j sources Python consumers need on PYTHONPATH.
fn python_lib_zips(version_dir: &Path) -> Vec<String> {
    let lib_dir = version_dir.join("python").join("lib");
    let entries = match std::fs::read_dir(&lib_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    let mut zips: Vec<String> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().map_or(false, |ext| ext == "zip"))
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    zips.sort();
    zips
}

/// True if any component of `entry` names a Spark install directory.
fn is_spark_path(entry: &str) -> bool {
    Path::new(entry)
        .components()
        .any(|c| match c.as_os_str().to_str() {
            Some(name) => parse_component_dir_name(name).is_some(),
            None => false,
        })
}

/// Writer backed by the process environment. Persistence cannot outlive the
/// process here, so it logs the `export` lines for the user's shell profile.
#[derive(Debug, Default)]
pub struct ProcessEnvWriter;

impl EnvironmentWriter for ProcessEnvWriter {
    fn current(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }

    fn persist(&mut self, vars: &[(String, String)]) -> Result<()> {
        tracing::info!("set the following environment variables in your shell profile:");
        for (key, value) in vars {
            tracing::info!("export {}={}", key, value);
        }
        Ok(())
    }

    fn clear(&mut self, keys: &[&str]) -> Result<()> {
        for key in keys {
            std::env::remove_var(key);
        }
        Ok(())
    }
}

/// Writer that additionally persists to `HKEY_CURRENT_USER\Environment`.
#[cfg(windows)]
#[derive(Debug, Default)]
pub struct RegistryEnvWriter;

#[cfg(windows)]
impl EnvironmentWriter for RegistryEnvWriter {
    fn current(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }

    fn persist(&mut self, vars: &[(String, String)]) -> Result<()> {
        use anyhow::Context;
        use winreg::enums::{HKEY_CURRENT_USER, KEY_SET_VALUE};
        use winreg::RegKey;

        let env_key = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey_with_flags("Environment", KEY_SET_VALUE)
            .context("cannot open HKEY_CURRENT_USER\\Environment")?;
        tracing::info!("setting variables under HKEY_CURRENT_USER\\Environment:");
        for (name, value) in vars {
            tracing::info!("{} = {} (REG_SZ)", name, value);
            env_key
                .set_value(name, value)
                .with_context(|| format!("cannot write registry value {}", name))?;
        }
        tracing::info!("open a new shell for the registry changes to take effect");
        Ok(())
    }

    fn clear(&mut self, keys: &[&str]) -> Result<()> {
        use winreg::enums::{HKEY_CURRENT_USER, KEY_SET_VALUE};
        use winreg::RegKey;

        for key in keys {
            std::env::remove_var(key);
        }
        if let Ok(env_key) =
            RegKey::predef(HKEY_CURRENT_USER).open_subkey_with_flags("Environment", KEY_SET_VALUE)
        {
            for key in keys {
                // A value that was never persisted is fine to miss.
                let _ = env_key.delete_value(key);
            }
        }
        Ok(())
    }
}

/// The platform's writer: registry-backed on Windows, process-only elsewhere.
pub fn platform_writer() -> Box<dyn EnvironmentWriter> {
    #[cfg(windows)]
    {
        Box::new(RegistryEnvWriter)
    }
    #[cfg(not(windows))]
    {
        Box::new(ProcessEnvWriter)
    }
}
