use assert_cmd::cargo::cargo_bin_cmd;
use chexdiff::cli::{USAGE, VERSION};
use predicates::prelude::*;

#[test]
fn compare_prints_both_renderings() {
    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.args(["1234", "12ff"]);

    cmd.assert()
        .success()
        .stdout("12\x1b[31m34\x1b[0m\n12\x1b[31mff\x1b[0m\n")
        .stderr("");
}

#[test]
fn identical_strings_print_plain_lines() {
    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.args(["deadBEEF", "DEADbeef"]);

    cmd.assert()
        .success()
        .stdout("deadBEEF\nDEADbeef\n");
}

#[test]
fn help_goes_to_stdout_with_or_without_extra_args() {
    for args in [vec!["-h"], vec!["--help"], vec!["--help", "12", "34"], vec!["-hx"]] {
        let mut cmd = cargo_bin_cmd!("chexdiff");
        cmd.args(&args);
        cmd.assert().success().stdout(USAGE).stderr("");
    }
}

#[test]
fn version_matches_by_prefix() {
    for flag in ["-v", "-version"] {
        let mut cmd = cargo_bin_cmd!("chexdiff");
        cmd.arg(flag);
        cmd.assert().success().stdout(format!("{VERSION}\n"));
    }
}

#[test]
fn no_arguments_prints_usage_to_stderr() {
    let mut cmd = cargo_bin_cmd!("chexdiff");

    cmd.assert().code(1).stdout("").stderr(USAGE);
}

#[test]
fn wrong_argument_count_prints_error_and_usage() {
    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.args(["12", "34", "56"]);

    cmd.assert()
        .code(1)
        .stderr("error: wrong number of args, need two: 1st and 2nd hex string\n")
        .stdout(format!("\n{USAGE}"));
}

#[test]
fn odd_length_argument_is_reported_first_one_wins() {
    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.args(["abc", "12345"]);

    cmd.assert()
        .code(1)
        .stdout("")
        .stderr(predicate::eq("error: 'abc' has invalid length\n"));

    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.args(["ab", "12345"]);

    cmd.assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("'12345' has invalid length"));
}

#[test]
fn flags_after_first_position_are_not_recognised() {
    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.args(["12", "-v"]);

    cmd.assert()
        .success()
        .stdout("\x1b[31m12\x1b[0m\n\x1b[31m-v\x1b[0m\n");
}

#[test]
fn double_dash_is_compared_like_any_other_argument() {
    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.args(["--", "12"]);

    cmd.assert()
        .success()
        .stdout("\x1b[31m--\x1b[0m\n\x1b[31m12\x1b[0m\n")
        .stderr("");
}

#[test]
fn lone_double_dash_is_a_wrong_argument_count() {
    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.arg("--");

    cmd.assert()
        .code(1)
        .stderr("error: wrong number of args, need two: 1st and 2nd hex string\n")
        .stdout(format!("\n{USAGE}"));
}

#[test]
fn hyphenated_second_argument_reaches_validation_unchanged() {
    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.args(["12", "--help="]);

    cmd.assert()
        .code(1)
        .stdout("")
        .stderr("error: '--help=' has invalid length\n");

    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.args(["ab", "--help"]);

    cmd.assert()
        .success()
        .stdout("\x1b[31mab\x1b[0m\n\x1b[31m--\x1b[0m\x1b[31mhelp\x1b[0m\n");
}

#[cfg(unix)]
#[test]
fn non_utf8_arguments_are_compared_as_raw_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.arg(OsStr::from_bytes(b"a\xff")).arg("a\u{7f}");

    cmd.assert()
        .success()
        .stdout(b"\x1b[31ma\xff\x1b[0m\n\x1b[31ma\x7f\x1b[0m\n".to_vec());

    let mut cmd = cargo_bin_cmd!("chexdiff");
    cmd.arg(OsStr::from_bytes(b"\xffab")).arg("12");

    cmd.assert()
        .code(1)
        .stderr(b"error: '\xffab' has invalid length\n".to_vec());
}
