//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod default_version;
mod home;
mod install;
mod list;
mod uninstall;
mod versions;

pub use completions::run_completions;
pub use default_version::run_default;
pub use home::run_home;
pub use install::{run_install, InstallArgs};
pub use list::run_list;
pub use uninstall::run_uninstall;
pub use versions::run_versions;

use sparkget_core::error::ResolveError;
use sparkget_core::resolve::{self, SelectMode};

/// On a no-match failure, print every valid pairing from the carried catalog
/// before the error surfaces; the bare message would leave the user guessing
/// at acceptable values.
pub(crate) fn print_no_match_help(err: &anyhow::Error) {
    if let Some(ResolveError::NoMatchingVersion {
        mode, candidates, ..
    }) = err.downcast_ref::<ResolveError>()
    {
        println!("Select an available Spark / Hadoop pairing:");
        println!("{:<12} {}", "SPARK", "HADOOP");
        for (spark, hadoop) in resolve::eligible_pairs(candidates) {
            println!("{:<12} {}", spark, hadoop);
        }
        if *mode == SelectMode::Connect {
            println!("Install one first: sparkget install --spark-version <V> --hadoop-version <V>");
        }
    }
}
