//! Tests for CLI parsing and the headless `render` subcommand

use clap::Parser;
use profile_toggle::cli::{Cli, CliResult, process_parsed, render_after_toggles};

#[test]
fn test_no_args_continue_without_overrides() {
    let cli = Cli::try_parse_from(["profile-toggle"]).expect("valid args");
    match process_parsed(cli) {
        CliResult::Continue(options) => {
            assert!(options.log_level.is_none());
            assert!(options.exit_after.is_none());
        }
        CliResult::Exit(_) => panic!("Expected Continue"),
    }
}

#[test]
fn test_render_subcommand_exits_zero() {
    let cli = Cli::try_parse_from(["profile-toggle", "render", "-t", "1"]).expect("valid args");
    assert!(matches!(process_parsed(cli), CliResult::Exit(0)));
}

#[test]
fn test_render_text_hidden() {
    assert_eq!(render_after_toggles(0), "# State Checkpoint\n[Toggler Show]");
}

#[test]
fn test_render_text_shown() {
    let text = render_after_toggles(1);
    assert!(text.starts_with("# State Checkpoint\n[image: https://"));
    assert!(text.contains("## quavo\n"));
    assert!(text.contains("Profession: musician\n"));
    assert!(text.contains("Bio: just dropped the album, y'all go stream now!\n"));
    assert!(text.ends_with("[Toggler Show]"));
}
