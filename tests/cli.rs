use assert_cmd::Command;
use predicates::prelude::*;

fn securepass() -> Command {
    let mut cmd = Command::cargo_bin("securepass").unwrap();
    cmd.env_remove("DEFAULT_PASSWORD_LENGTH")
        .env_remove("MIN_PASSWORD_LENGTH")
        .env_remove("MAX_PASSWORD_LENGTH")
        .env_remove("LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_password_of_default_length() {
    let output = securepass().assert().success().get_output().stdout.clone();
    let password = String::from_utf8(output).unwrap();
    assert_eq!(password.trim_end_matches('\n').len(), 16);
}

#[test]
fn digits_only() {
    securepass()
        .args(["--length", "8", "--no-upper", "--no-lower", "--no-symbols"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9]{8}\n$").unwrap());
}

#[test]
fn excluding_everything_fails() {
    securepass()
        .args(["--no-upper", "--no-lower", "--no-digits", "--no-symbols"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at least one character type required"));
}

#[test]
fn length_shorter_than_class_count_fails() {
    securepass()
        .args(["-l", "3"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("length too short for selected classes"));
}

#[test]
fn non_positive_length_fails() {
    securepass()
        .args(["--length", "-4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("length must be positive"));
}

#[test]
fn minimum_length_comes_from_environment() {
    securepass()
        .args(["-l", "2", "--no-digits", "--no-symbols"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("length must be at least 4"));

    securepass()
        .env("MIN_PASSWORD_LENGTH", "2")
        .args(["-l", "2", "--no-digits", "--no-symbols"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[A-Za-z]{2}\n$").unwrap());
}

#[test]
fn default_length_comes_from_environment() {
    securepass()
        .env("DEFAULT_PASSWORD_LENGTH", "32")
        .arg("--no-symbols")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[A-Za-z0-9]{32}\n$").unwrap());
}

#[test]
fn json_output() {
    let output = securepass()
        .args(["--json", "--length", "12", "--no-symbols"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["length"], 12);
    assert_eq!(value["password"].as_str().unwrap().len(), 12);
    assert_eq!(value["classes"].as_array().unwrap().len(), 3);
}

#[test]
fn oversized_length_fails_cleanly() {
    securepass()
        .args(["--length", "9223372036854775807"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("length must be at most 4096"));

    securepass()
        .env("MAX_PASSWORD_LENGTH", "8")
        .args(["--length", "9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("length must be at most 8"));
}

#[test]
fn invalid_environment_values_are_reported() {
    securepass()
        .env("DEFAULT_PASSWORD_LENGTH", "long")
        .env("LOG_LEVEL", "warn")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Ignoring invalid value 'long' for DEFAULT_PASSWORD_LENGTH",
        ));
}

#[test]
fn failure_is_reported_once() {
    securepass()
        .args(["-l", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("length too short").count(1));
}
