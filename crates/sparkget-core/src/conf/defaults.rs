//! `spark-defaults.conf` patching.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Key column width used by the stock Spark conf files.
const KEY_COLUMN_WIDTH: usize = 35;

/// Rewrites `conf/spark-defaults.conf`, starting from the bundled template
/// when the file is missing or `reset` is set. Lines are whitespace-separated
/// `key value` pairs; values of supplied keys are replaced, unknown supplied
/// keys are appended, and the key column is realigned on every rewritten
/// line.
pub fn set_spark_defaults(
    conf_dir: &Path,
    properties: &[(String, String)],
    reset: bool,
) -> Result<()> {
    let path = conf_dir.join("spark-defaults.conf");
    super::materialize_from_template(&path, reset)?;

    let text =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let mut used = vec![false; properties.len()];
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines() {
        let split = if line.starts_with('#') {
            None
        } else {
            line.split_once(' ')
        };
        let (key, value) = match split {
            Some(kv) => kv,
            None => {
                lines.push(line.to_string());
                continue;
            }
        };
        let value = value.trim_start();
        let hit = properties
            .iter()
            .enumerate()
            .find(|(at, (k, _))| !used[*at] && k == key);
        let value = match hit {
            Some((at, (_, new_value))) => {
                used[at] = true;
                new_value.as_str()
            }
            None => value,
        };
        lines.push(format!("{:<width$} {}", key, value, width = KEY_COLUMN_WIDTH));
    }
    for (at, (key, value)) in properties.iter().enumerate() {
        if !used[at] {
            lines.push(format!("{:<width$} {}", key, value, width = KEY_COLUMN_WIDTH));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    fs::write(&path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
