use clap::Parser;
use edk::cli::{Cli, Command};

#[test]
fn parses_list() {
    let cli = Cli::try_parse_from(["edk", "list"]).expect("cli parse should work");
    assert!(matches!(cli.command, Command::List));
}

#[test]
fn parses_show() {
    let cli = Cli::try_parse_from(["edk", "show", "arm-gcc"]).expect("cli parse should work");
    match cli.command {
        Command::Show(show) => assert_eq!(show.sdk, "arm-gcc"),
        _ => panic!("expected show command"),
    }
}

#[test]
fn parses_cmake_with_passthrough() {
    let cli = Cli::try_parse_from([
        "edk", "-v", "cmake", "host", "--dry-run", "--", "--fresh", "-Wdev",
    ])
    .expect("cli parse should work");
    assert_eq!(cli.verbose, 1);
    match cli.command {
        Command::Cmake(cmake) => {
            assert_eq!(cmake.sdk, "host");
            assert!(cmake.dry_run);
            assert_eq!(cmake.extra, ["--fresh", "-Wdev"]);
        }
        _ => panic!("expected cmake command"),
    }
}

#[test]
fn global_json_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["edk", "list", "--json"]).expect("cli parse should work");
    assert!(cli.json);
}

#[test]
fn show_requires_a_name() {
    assert!(Cli::try_parse_from(["edk", "show"]).is_err());
}
