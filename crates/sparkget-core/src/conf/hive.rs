//! `hive-site.xml` generation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes a fresh `hive-site.xml` holding the given properties. The file is
/// generated wholesale; Spark ships no template for it.
pub fn write_hive_site(path: &Path, properties: &[(String, String)]) -> Result<()> {
    let mut out = String::from("<configuration>\n");
    for (key, value) in properties {
        out.push_str("  <property>\n");
        out.push_str(&format!("    <name>{}</name>\n", key));
        out.push_str(&format!("    <value>{}</value>\n", value));
        out.push_str("  </property>\n");
    }
    out.push_str("</configuration>\n");
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
