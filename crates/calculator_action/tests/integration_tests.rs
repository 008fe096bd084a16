use assert_cmd::Command;
use predicates::prelude::*;

fn calculator() -> Command {
    let mut cmd = Command::cargo_bin("action-calculator").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Test CLI help output
#[test]
fn test_cli_help() {
    calculator().arg("--help").assert().success();
}

/// Test CLI version output
#[test]
fn test_cli_version() {
    calculator()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test addition
#[test]
fn test_add() {
    calculator()
        .write_stdin(r#"{"action":"add","params":{"a":2,"b":3}}"#)
        .assert()
        .success()
        .stdout("{\"result\":5}\n");
}

/// Test division
#[test]
fn test_divide() {
    calculator()
        .write_stdin(r#"{"action":"divide","params":{"a":10,"b":2}}"#)
        .assert()
        .success()
        .stdout("{\"result\":5}\n");
}

/// Test multiplication with a fractional result
#[test]
fn test_multiply_fractional() {
    calculator()
        .write_stdin(r#"{"action":"multiply","params":{"a":1.5,"b":-3}}"#)
        .assert()
        .success()
        .stdout("{\"result\":-4.5}\n");
}

/// Test a missing operand counts as zero
#[test]
fn test_subtract_missing_operand() {
    calculator()
        .write_stdin(r#"{"action":"subtract","params":{"a":5}}"#)
        .assert()
        .success()
        .stdout("{\"result\":5}\n");
}

/// Test division by zero exits with status 1 and no output
#[test]
fn test_divide_by_zero() {
    calculator()
        .write_stdin(r#"{"action":"divide","params":{"a":10,"b":0}}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Division by zero error: 10.000000 / 0.000000"));
}

/// Test an unknown action exits with status 1 and no output
#[test]
fn test_unknown_action() {
    calculator()
        .write_stdin(r#"{"action":"pow","params":{"a":2,"b":3}}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown action: pow"));
}

/// Test invalid JSON exits with status 1 and no output
#[test]
fn test_malformed_input() {
    calculator()
        .write_stdin("this is not json")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error reading input"));
}

/// Test a mistyped operand exits with status 1 and no output
#[test]
fn test_wrong_shape() {
    calculator()
        .write_stdin(r#"{"action":"add","params":{"a":"2","b":3}}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

/// Test empty stdin exits with status 1 and no output
#[test]
fn test_empty_input() {
    calculator()
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

/// Test a result with no JSON representation exits with status 1
#[test]
fn test_non_finite_result() {
    calculator()
        .write_stdin(r#"{"action":"add","params":{"a":1e308,"b":1e308}}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error writing output"));
}

/// Test only the first document on stdin is read
#[test]
fn test_trailing_document_is_ignored() {
    calculator()
        .write_stdin("{\"action\":\"add\",\"params\":{\"a\":2,\"b\":3}}\n{\"x\":1}\n")
        .assert()
        .success()
        .stdout("{\"result\":5}\n");
}

/// Test `null` params and operands count as zero
#[test]
fn test_null_params() {
    calculator()
        .write_stdin(r#"{"action":"add","params":null}"#)
        .assert()
        .success()
        .stdout("{\"result\":0}\n");

    calculator()
        .write_stdin(r#"{"action":"subtract","params":{"a":5,"b":null}}"#)
        .assert()
        .success()
        .stdout("{\"result\":5}\n");
}

/// Test large integral results print in plain decimal notation
#[test]
fn test_large_integral_result() {
    calculator()
        .write_stdin(r#"{"action":"multiply","params":{"a":1e10,"b":1e10}}"#)
        .assert()
        .success()
        .stdout("{\"result\":100000000000000000000}\n");
}
