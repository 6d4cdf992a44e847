//! Tests for CLI argument parsing

use crate::app::cli::{Args, Command};
use clap::Parser;

#[test]
fn test_parse_profile_command() {
    let args = Args::try_parse_from(["meetmii", "profile", "alice"]).unwrap();
    match args.command {
        Command::Profile { username } => assert_eq!(username, "alice"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_scan_with_multiple_payloads() {
    let args = Args::try_parse_from([
        "meetmii",
        "scan",
        "--lookup",
        "https://meetmii.com/alice",
        "https://meetmii.com/alice",
    ])
    .unwrap();
    match args.command {
        Command::Scan { payloads, lookup } => {
            assert_eq!(payloads.len(), 2);
            assert!(lookup);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_scan_requires_at_least_one_payload() {
    assert!(Args::try_parse_from(["meetmii", "scan"]).is_err());
}

#[test]
fn test_global_flags_apply_after_subcommand() {
    let args = Args::try_parse_from([
        "meetmii",
        "stats",
        "alice",
        "--log-level",
        "debug",
        "--no-color",
    ])
    .unwrap();
    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert!(args.no_color);
}

#[test]
fn test_color_flags_conflict() {
    assert!(Args::try_parse_from(["meetmii", "qr", "alice", "--color", "--no-color"]).is_err());
}

#[test]
fn test_parse_register_command() {
    let args = Args::try_parse_from([
        "meetmii",
        "register",
        "--email",
        "alice@example.com",
        "--username",
        "alice",
        "--password",
        "longenough",
    ])
    .unwrap();
    match args.command {
        Command::Register {
            email, username, ..
        } => {
            assert_eq!(email, "alice@example.com");
            assert_eq!(username, "alice");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_edit_with_partial_fields() {
    let args = Args::try_parse_from([
        "meetmii",
        "edit",
        "--token",
        "jwt",
        "--bio",
        "Hello",
        "--professional",
        "true",
    ])
    .unwrap();
    match args.command {
        Command::Edit {
            token,
            bio,
            professional,
            display_name,
            ..
        } => {
            assert_eq!(token.as_deref(), Some("jwt"));
            assert_eq!(bio.as_deref(), Some("Hello"));
            assert_eq!(professional, Some(true));
            assert_eq!(display_name, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
