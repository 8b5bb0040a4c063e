mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;

const PLAIN_CONFIG: &str = r#"{ "plain_mode": true }"#;

fn tracker(config: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense_tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_SCRIPT", "1")
        .env("EXPENSE_TRACKER_CONFIG_DIR", config.path())
        .env_remove("EXPENSE_TRACKER_LOG");
    cmd
}

#[test]
fn monthly_session_reports_goal_surplus() {
    let config = common::config_dir(Some(PLAIN_CONFIG));
    let input = "m\n10000\n4000\nN\n3000\n2000\n0\n0\n0\n0\nN\n";

    tracker(&config)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("END-OF-MONTH EXPENSE RESULTS"))
        .stdout(contains("Net Gain"))
        .stdout(contains("Portion of allowance saved"))
        .stdout(contains(
            "You have met your set goal budget and still have PHP 1000.00 remaining!",
        ))
        .stdout(contains("60000.00"))
        .stdout(contains("Top 3 biggest expenses:"))
        .stdout(contains("Tip! Walk, carpool, or commute"))
        .stdout(contains("Thank you for using our college finance tracker!"));
}

#[test]
fn breakdown_rows_align_amount_and_percent() {
    let config = common::config_dir(Some(PLAIN_CONFIG));
    let input = "m\n10000\n4000\nN\n3000\n2000\n0\n0\n0\n0\nN\n";

    let output = tracker(&config)
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let first_row = Regex::new(r"(?m)^1\. Transportation fees +PHP 3000\.00 +60\.00%$").unwrap();
    assert!(first_row.is_match(&stdout), "missing breakdown row in:\n{stdout}");
    let totals = Regex::new(r"(?m)^Total Expenses +PHP 5000\.00$").unwrap();
    assert!(totals.is_match(&stdout));
    let daily = Regex::new(r"(?m)^Approx\. daily expenditure +PHP 166\.67$").unwrap();
    assert!(daily.is_match(&stdout));
}

#[test]
fn weekly_amounts_are_reported_monthly() {
    let config = common::config_dir(Some(PLAIN_CONFIG));
    let input = "w\n100\n0\nN\n50\n0\n0\n0\n0\n0\nN\n";

    tracker(&config)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Monthly Allowance"))
        .stdout(contains("400.00"))
        .stdout(contains("Enter the weekly amount for Food in PHP"))
        .stdout(contains("200.00"));
}

#[test]
fn invalid_answers_are_reprompted() {
    let config = common::config_dir(Some(PLAIN_CONFIG));
    let input = "d\nm\n-5\n1000\nabc\n0\nmaybe\nY\nFood\nGym\nN\n1500\n0\n0\n0\n0\n0\n0\nN\n";

    tracker(&config)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains(
            "Invalid input. Please enter m for monthly or w for weekly.",
        ))
        .stdout(contains("Invalid amount. Please enter a non-negative number."))
        .stdout(contains("Invalid input. Please enter Y or N."))
        .stdout(contains(
            "Invalid category. Category must be non-empty and not already exist.",
        ))
        .stdout(contains("7. Gym"))
        .stdout(contains("Net Deficit"))
        .stdout(contains("Deficit alert!"))
        .stdout(contains("Projected deficit after 12 months"));
}

#[test]
fn repeat_runs_a_second_session() {
    let config = common::config_dir(Some(PLAIN_CONFIG));
    let session = "m\n5000\n0\nN\n5000\n0\n0\n0\n0\n0\n";
    let input = format!("{session}Y\n{session}N\n");

    let output = tracker(&config)
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches("END-OF-MONTH EXPENSE RESULTS").count(), 2);
    assert!(stdout.contains("You did not experience a net gain or deficit this month."));
}

#[test]
fn amounts_too_large_to_analyze_offer_another_session() {
    let config = common::config_dir(Some(PLAIN_CONFIG));
    let huge = "50000000000000000000000000000";
    let input = format!(
        "m\n1\n0\nN\n{huge}\n{huge}\n0\n0\n0\n0\nY\nm\n5000\n0\nN\n5000\n0\n0\n0\n0\n0\nN\n"
    );

    let output = tracker(&config)
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("Amounts are too large to analyze. Please try again with smaller amounts."));
    assert_eq!(stdout.matches("END-OF-MONTH EXPENSE RESULTS").count(), 1);
    assert_eq!(
        stdout
            .matches("Would you like to track your finances again")
            .count(),
        2
    );
}

#[test]
fn weekly_amount_too_large_is_asked_again() {
    let config = common::config_dir(Some(PLAIN_CONFIG));
    let max = "79228162514264337593543950335";
    let input = format!("w\n{max}\n100\n0\nN\n0\n0\n0\n0\n0\n0\nN\n");

    tracker(&config)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains(
            "Invalid amount. The monthly equivalent of this amount is too large.",
        ))
        .stdout(contains("END-OF-MONTH EXPENSE RESULTS"));
}

#[test]
fn closed_input_exits_cleanly() {
    let config = common::config_dir(None);
    tracker(&config)
        .write_stdin("m\n")
        .assert()
        .success()
        .stdout(contains("Input closed. Exiting."))
        .stdout(contains("END-OF-MONTH").not());
}

#[test]
fn json_report_format_prints_structure() {
    let config =
        common::config_dir(Some(r#"{ "plain_mode": true, "report_format": "json" }"#));
    let input = "m\n1000\n0\nN\n1500\n0\n0\n0\n0\n0\nN\n";

    tracker(&config)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("\"net_status\": \"deficit\""))
        .stdout(contains("\"projection_label\": \"deficit\""));
}

#[test]
fn version_flag_prints_build_metadata() {
    Command::cargo_bin("expense_tracker")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(format!(
            "expense_tracker {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn unknown_argument_fails() {
    Command::cargo_bin("expense_tracker")
        .unwrap()
        .arg("--frobnicate")
        .assert()
        .code(2)
        .stderr(contains("Unknown argument: --frobnicate"));
}
