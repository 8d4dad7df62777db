//! Template-driven rewriting of the Spark configuration files.
//!
//! Each helper works against the `conf/` directory of a version install and
//! takes an ordered (key, value) list: values of known keys are replaced in
//! place, unknown keys are appended, comments and unrelated lines pass
//! through untouched.

mod defaults;
mod hive;
mod log4j;

pub use defaults::set_spark_defaults;
pub use hive::write_hive_site;
pub use log4j::set_log4j_properties;

use anyhow::{Context, Result};
use std::path::Path;

/// Copies `<file>.template` over `file` when `file` is missing or `reset` is
/// set. Errors if the template itself is gone.
fn materialize_from_template(file: &Path, reset: bool) -> Result<()> {
    if file.is_file() && !reset {
        return Ok(());
    }
    let mut template = file.as_os_str().to_owned();
    template.push(".template");
    let template = Path::new(&template);
    std::fs::copy(template, file).with_context(|| {
        format!(
            "failed to copy {} to {}",
            template.display(),
            file.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_copied_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.conf");
        std::fs::write(dir.path().join("x.conf.template"), b"from template").unwrap();
        materialize_from_template(&file, false).unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "from template");
    }

    #[test]
    fn existing_file_is_kept_without_reset() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.conf");
        std::fs::write(dir.path().join("x.conf.template"), b"from template").unwrap();
        std::fs::write(&file, b"hand edited").unwrap();
        materialize_from_template(&file, false).unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hand edited");
    }

    #[test]
    fn reset_recopies_the_template() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.conf");
        std::fs::write(dir.path().join("x.conf.template"), b"from template").unwrap();
        std::fs::write(&file, b"hand edited").unwrap();
        materialize_from_template(&file, true).unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "from template");
    }

    #[test]
    fn missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(materialize_from_template(&dir.path().join("x.conf"), false).is_err());
    }
}
