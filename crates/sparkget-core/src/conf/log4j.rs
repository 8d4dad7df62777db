//! `log4j.properties` patching.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Rewrites `conf/log4j.properties`, starting from the bundled template when
/// the file is missing or `reset` is set. Comment lines and lines without
/// `=` pass through; values of supplied keys are replaced at their first
/// occurrence; supplied keys with no line in the file are appended at the
/// end in the given order.
pub fn set_log4j_properties(
    conf_dir: &Path,
    properties: &[(String, String)],
    reset: bool,
) -> Result<()> {
    let path = conf_dir.join("log4j.properties");
    super::materialize_from_template(&path, reset)?;

    let text =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let mut used = vec![false; properties.len()];
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines() {
        let split = if line.starts_with('#') {
            None
        } else {
            line.split_once('=')
        };
        let (key, value) = match split {
            Some(kv) => kv,
            None => {
                lines.push(line.to_string());
                continue;
            }
        };
        let hit = properties
            .iter()
            .enumerate()
            .find(|(at, (k, _))| !used[*at] && k == key);
        match hit {
            Some((at, (_, new_value))) => {
                used[at] = true;
                lines.push(format!("{}={}", key, new_value));
            }
            None => lines.push(format!("{}={}", key, value)),
        }
    }
    for (at, (key, value)) in properties.iter().enumerate() {
        if !used[at] {
            lines.push(format!("{}={}", key, value));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    fs::write(&path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "\
# Set everything to be logged to the console
log4j.rootCategory=INFO, console
log4j.appender.console=org.apache.log4j.ConsoleAppender
";

    fn props(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_existing_keys_and_appends_new_ones() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("log4j.properties.template"), TEMPLATE).unwrap();

        let properties = props(&[
            ("log4j.rootCategory", "WARN,console,localfile"),
            ("log4j.appender.localfile", "org.apache.log4j.DailyRollingFileAppender"),
        ]);
        set_log4j_properties(dir.path(), &properties, true).unwrap();

        let out = fs::read_to_string(dir.path().join("log4j.properties")).unwrap();
        assert!(out.contains("log4j.rootCategory=WARN,console,localfile"));
        assert!(!out.contains("log4j.rootCategory=INFO, console"));
        assert!(out.contains("# Set everything to be logged to the console"));
        assert!(out
            .ends_with("log4j.appender.localfile=org.apache.log4j.DailyRollingFileAppender\n"));
    }

    #[test]
    fn untouched_keys_keep_their_values() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("log4j.properties.template"), TEMPLATE).unwrap();

        set_log4j_properties(dir.path(), &props(&[("log4j.rootCategory", "DEBUG")]), true)
            .unwrap();

        let out = fs::read_to_string(dir.path().join("log4j.properties")).unwrap();
        assert!(out.contains("log4j.appender.console=org.apache.log4j.ConsoleAppender"));
    }

    #[test]
    fn keep_conf_patches_the_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("log4j.properties.template"), TEMPLATE).unwrap();
        fs::write(
            dir.path().join("log4j.properties"),
            "log4j.rootCategory=ERROR, console\ncustom.key=kept\n",
        )
        .unwrap();

        set_log4j_properties(dir.path(), &props(&[("log4j.rootCategory", "INFO")]), false)
            .unwrap();

        let out = fs::read_to_string(dir.path().join("log4j.properties")).unwrap();
        assert!(out.contains("log4j.rootCategory=INFO"));
        assert!(out.contains("custom.key=kept"), "existing file was not clobbered");
    }
}
