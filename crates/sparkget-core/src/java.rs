//! Java prerequisite probing.

use anyhow::{Context, Result};
use std::process::Command;

/// major.minor Java version Spark requires.
pub const REQUIRED_JAVA_VERSION: &str = "1.8";

/// Checks that `java` is on PATH and reports the required version.
pub fn verify_java() -> Result<()> {
    let output = Command::new("java").arg("-version").output().with_context(|| {
        format!(
            "java was not found on your PATH; install Java {} and retry",
            REQUIRED_JAVA_VERSION
        )
    })?;

    // The version banner goes to stderr on every JVM that matters.
    let banner = if output.stderr.is_empty() {
        String::from_utf8_lossy(&output.stdout).into_owned()
    } else {
        String::from_utf8_lossy(&output.stderr).into_owned()
    };
    tracing::debug!("java -version: {}", banner.trim());

    let version = match extract_version(&banner) {
        Some(version) => version,
        None => anyhow::bail!(
            "unable to detect the Java version; install Java {}",
            REQUIRED_JAVA_VERSION
        ),
    };

    if version != REQUIRED_JAVA_VERSION {
        anyhow::bail!(
            "Java {} detected, but Java {} is required",
            version,
            REQUIRED_JAVA_VERSION
        );
    }

    tracing::info!("required Java version detected: {}", version);
    Ok(())
}

/// First `major.minor` pair in the banner, e.g. "1.8" out of
/// `java version "1.8.0_281"`.
fn extract_version(banner: &str) -> Option<String> {
    let start = banner.find(|c: char| c.is_ascii_digit())?;
    let rest = &banner[start..];
    let major: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let rest = &rest[major.len()..];
    let rest = rest.strip_prefix('.')?;
    let minor: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if minor.is_empty() {
        return None;
    }
    Some(format!("{}.{}", major, minor))
}
