use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use healthpoint_cli::commands::{Cli, Command};
use healthpoint_core::models::TimeSlot;
use pretty_assertions::assert_eq;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_book() {
    let cli = Cli::try_parse_from([
        "healthpoint",
        "book",
        "--patient",
        "3",
        "--doctor",
        "1",
        "--date",
        "2026-10-20",
        "--time",
        "09:30",
        "--reason",
        "Checkup",
    ])
    .unwrap();

    assert_eq!(cli.api_url, None);
    assert_eq!(
        cli.command,
        Command::Book {
            patient: 3,
            doctor: 1,
            date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            time: TimeSlot::parse("09:30").unwrap(),
            reason: "Checkup".to_string(),
        }
    );
}

#[test]
fn test_reason_defaults_to_empty() {
    let cli = Cli::try_parse_from([
        "healthpoint",
        "book",
        "--patient",
        "3",
        "--doctor",
        "1",
        "--date",
        "2026-10-20",
        "--time",
        "16:45",
    ])
    .unwrap();

    let Command::Book { reason, .. } = cli.command else {
        panic!("expected a book command");
    };
    assert_eq!(reason, "");
}

#[test]
fn test_register_requires_phone() {
    let result = Cli::try_parse_from([
        "healthpoint",
        "register",
        "--name",
        "Ada Lovelace",
        "--email",
        "ada@example.com",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_global_api_url_after_subcommand() {
    let cli = Cli::try_parse_from([
        "healthpoint",
        "appointments",
        "--api-url",
        "http://clinic.local:8000",
    ])
    .unwrap();

    assert_eq!(cli.api_url.as_deref(), Some("http://clinic.local:8000"));
    assert_eq!(cli.command, Command::Appointments);
}

#[test]
fn test_cancel_accepts_yes_flag() {
    let cli = Cli::try_parse_from(["healthpoint", "cancel", "42", "-y"]).unwrap();
    assert_eq!(cli.command, Command::Cancel { id: 42, yes: true });
}

#[test]
fn test_rejects_malformed_time() {
    let result = Cli::try_parse_from([
        "healthpoint",
        "book",
        "--patient",
        "3",
        "--doctor",
        "1",
        "--date",
        "2026-10-20",
        "--time",
        "9.30",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_rejects_malformed_date() {
    let result = Cli::try_parse_from([
        "healthpoint",
        "slots",
        "--doctor",
        "1",
        "--date",
        "20/10/2026",
    ]);
    assert!(result.is_err());
}
