use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rbs, setup_data_dir};

#[test]
fn test_explore_full_cycle_with_raw_data() {
    let data = setup_data_dir("explore_full");

    rbs("explore_full")
        .args(["--data-dir", &data])
        .write_stdin("Chicago\nnot at all\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("Most common day of week: Monday"))
        .stdout(contains("Would you like to see the next 5 lines").not())
        .stdout(contains("Clinton St & Washington Blvd"))
        .stdout(contains("(end of data)"))
        .stdout(contains("Bye!"));
}

#[test]
fn test_explore_reprompts_invalid_input() {
    let data = setup_data_dir("explore_reprompt");

    rbs("explore_reprompt")
        .args(["--data-dir", &data, "explore"])
        .write_stdin("springfield\nwashington\nweek\nday\nfirday\nmonday\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Invalid city entered"))
        .stdout(contains("Please type month, day, both or not at all."))
        .stdout(contains("Invalid weekday entered"))
        .stdout(contains("Most common day of week: Monday (1 trips)."));
}

#[test]
fn test_explore_restart_runs_a_second_cycle() {
    let data = setup_data_dir("explore_restart");

    rbs("explore_restart")
        .args(["--data-dir", &data])
        .write_stdin("washington\nall\nno\nyes\nchicago\nmonth\nmarch\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Loaded 2 trips for Washington."))
        .stdout(contains("Loaded 4 trips for Chicago."))
        .stdout(contains("1 trips match March, all days."))
        .stdout(contains("Would you like to restart?").count(2));
}

#[test]
fn test_explore_missing_file_does_not_abort() {
    let data = setup_data_dir("explore_missing");

    rbs("explore_missing")
        .args(["--data-dir", &data])
        .write_stdin("new york city\nall\nno\n")
        .assert()
        .success()
        .stdout(contains("Data for New York City is not available"))
        .stdout(contains("Would you like to restart?"));
}

#[test]
fn test_explore_eof_exits_cleanly() {
    let data = setup_data_dir("explore_eof");

    rbs("explore_eof")
        .args(["--data-dir", &data])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Bye!"));
}
