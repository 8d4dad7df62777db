//! `sparkget completions` – shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;

pub fn run_completions(shell: Shell) {
    let mut cmd = crate::cli::Cli::command();
    clap_complete::generate(shell, &mut cmd, "sparkget", &mut std::io::stdout());
}
