//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn install_defaults() {
    match parse(&["sparkget", "install"]) {
        CliCommand::Install {
            spark_version,
            hadoop_version,
            keep_conf,
            spark_log_level,
            refresh,
            skip_java_check,
        } => {
            assert_eq!(spark_version, None);
            assert_eq!(hadoop_version, None);
            assert!(!keep_conf);
            assert_eq!(spark_log_level, "INFO");
            assert!(!refresh);
            assert!(!skip_java_check);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn install_with_versions_and_flags() {
    match parse(&[
        "sparkget",
        "install",
        "--spark-version",
        "2.1.0",
        "--hadoop-version",
        "2.7",
        "--keep-conf",
        "--spark-log-level",
        "WARN",
        "--refresh",
        "--skip-java-check",
    ]) {
        CliCommand::Install {
            spark_version,
            hadoop_version,
            keep_conf,
            spark_log_level,
            refresh,
            skip_java_check,
        } => {
            assert_eq!(spark_version.as_deref(), Some("2.1.0"));
            assert_eq!(hadoop_version.as_deref(), Some("2.7"));
            assert!(keep_conf);
            assert_eq!(spark_log_level, "WARN");
            assert!(refresh);
            assert!(skip_java_check);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn uninstall_requires_both_versions() {
    assert!(Cli::try_parse_from(["sparkget", "uninstall"]).is_err());
    assert!(Cli::try_parse_from(["sparkget", "uninstall", "--spark-version", "2.1.0"]).is_err());

    match parse(&[
        "sparkget",
        "uninstall",
        "--spark-version",
        "2.1.0",
        "--hadoop-version",
        "2.7",
    ]) {
        CliCommand::Uninstall {
            spark_version,
            hadoop_version,
        } => {
            assert_eq!(spark_version, "2.1.0");
            assert_eq!(hadoop_version, "2.7");
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn list_and_default_take_no_arguments() {
    assert!(matches!(parse(&["sparkget", "list"]), CliCommand::List));
    assert!(matches!(parse(&["sparkget", "default"]), CliCommand::Default));
}

#[test]
fn versions_refresh_flag() {
    match parse(&["sparkget", "versions", "--refresh"]) {
        CliCommand::Versions { refresh } => assert!(refresh),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn home_versions_are_optional() {
    match parse(&["sparkget", "home"]) {
        CliCommand::Home {
            spark_version,
            hadoop_version,
        } => {
            assert_eq!(spark_version, None);
            assert_eq!(hadoop_version, None);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn completions_take_a_shell() {
    match parse(&["sparkget", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell, clap_complete::Shell::Bash);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["sparkget"]).is_err());
}
