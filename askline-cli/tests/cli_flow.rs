use assert_cmd::Command;
use predicates::prelude::*;

fn askline() -> Command {
    let mut cmd = Command::cargo_bin("askline").expect("askline binary");
    cmd.env_remove("ASKLINE_KIND").env_remove("ASKLINE_LOG");
    cmd
}

#[test]
fn test_line_answer_is_printed_on_stdout() {
    askline()
        .arg("Name:")
        .write_stdin("Ada Lovelace\n")
        .assert()
        .success()
        .stdout("Ada Lovelace\n")
        .stderr(predicate::str::contains("Name: "));
}

#[test]
fn test_age_retries_until_valid() {
    askline()
        .args(["--kind", "int", "--min", "1", "Age"])
        .write_stdin("abc\n-5\n30\n")
        .assert()
        .success()
        .stdout("30\n")
        .stderr(
            "Age Invalid input\nAge Invalid input: The value must be at least 1\nAge ",
        );
}

#[test]
fn test_closed_stdin_exits_with_status_one() {
    askline()
        .args(["--kind", "int", "Number"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn test_stdin_closing_after_bad_answers_exits_with_status_one() {
    askline()
        .args(["--kind", "float"])
        .write_stdin("one\ntwo")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_bool_words() {
    askline()
        .args(["--kind", "bool", "Continue?"])
        .write_stdin("maybe\nYES\n")
        .assert()
        .success()
        .stdout("true\n");

    askline()
        .args(["--kind", "bool"])
        .write_stdin("f\n")
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_one_of_and_non_empty() {
    askline()
        .args(["--non-empty", "--one-of", "quick,deep", "Scan type"])
        .write_stdin("\nslow\ndeep\n")
        .assert()
        .success()
        .stdout("deep\n")
        .stderr(predicate::str::contains(
            "Invalid input: The value can't be empty\n",
        ))
        .stderr(predicate::str::contains(
            "Invalid input: The value doesn't match with the options: quick, deep\n",
        ));
}

#[test]
fn test_float_range() {
    askline()
        .args(["--kind", "float", "--min", "-1", "--max", "1"])
        .write_stdin("1.5\n-0.25\n")
        .assert()
        .success()
        .stdout("-0.25\n")
        .stderr(predicate::str::contains(
            "Invalid input: The value is not between -1 and 1\n",
        ));
}

#[test]
fn test_kind_from_env() {
    askline()
        .env("ASKLINE_KIND", "int")
        .write_stdin("x\n7\n")
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_bound_must_match_kind() {
    askline()
        .args(["--kind", "int", "--min", "1.5"])
        .write_stdin("3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--min expects a i64 value"));
}

#[test]
fn test_range_flags_rejected_for_text() {
    askline()
        .args(["--min", "1"])
        .write_stdin("3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--min/--max only apply"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    askline()
        .args(["--log-level", "debug", "--kind", "int"])
        .write_stdin("nope\n4\n")
        .assert()
        .success()
        .stdout("4\n")
        .stderr(predicate::str::contains("conversion failed"))
        .stderr(predicate::str::contains("input accepted"));
}

#[test]
fn test_invalid_utf8_line_is_rejected_and_retried() {
    askline()
        .arg("Name:")
        .write_stdin(&b"caf\xe9\nok\n"[..])
        .args(["--one-of", "ok"])
        .assert()
        .success()
        .stdout("ok\n")
        .stderr(predicate::str::contains("Invalid input: The value doesn't match"));
}

#[test]
fn test_hidden_answer_from_piped_stdin() {
    askline()
        .args(["--hidden", "Password:"])
        .write_stdin("pw\n")
        .assert()
        .success()
        .stdout("pw\n");
}

#[test]
fn test_min_greater_than_max_is_rejected() {
    askline()
        .args(["--kind", "int", "--min", "10", "--max", "1"])
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--min 10 is greater than --max 1"));
}

#[test]
fn test_logs_without_colour_codes_when_piped() {
    askline()
        .args(["--log-level", "debug", "--kind", "int"])
        .write_stdin("3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("input accepted"))
        .stderr(predicate::str::contains("\x1b[").not());
}
