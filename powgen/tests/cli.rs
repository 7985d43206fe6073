use assert_cmd::Command;
use predicates::prelude::*;

fn powgen() -> Command {
	Command::cargo_bin("powgen").unwrap()
}

#[test]
fn help_exits_successfully() {
	powgen()
		.arg("-h")
		.assert()
		.success()
		.stdout(predicate::str::contains("Usage"))
		.stdout(predicate::str::contains("--lower"))
		.stdout(predicate::str::contains("--upper"));
}

#[test]
fn version_exits_successfully() {
	powgen()
		.arg("-v")
		.assert()
		.success()
		.stdout(predicate::str::starts_with("powgen "))
		.stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn default_range_reproduces_the_checked_in_table() {
	powgen()
		.assert()
		.success()
		.stdout(include_str!("../../src/powers.rs"));
}

#[test]
fn custom_range_accepts_negative_bounds() {
	powgen()
		.args(["-l", "-2", "-u", "-1"])
		.assert()
		.success()
		.stdout(predicate::str::contains("pub const MIN_EXPONENT: i64 = -2;"))
		.stdout(predicate::str::contains("pub const MAX_EXPONENT: i64 = -1;"))
		.stdout(predicate::str::contains("[CachedPower; 2]"))
		.stdout(predicate::str::contains(
			"CachedPower { mantissa: 0xa3d70a3d70a3d70a, binary_exponent: -68 }, // 5^-2",
		));
}

#[test]
fn inverted_range_fails_without_output() {
	powgen()
		.args(["-l", "5", "-u", "4"])
		.assert()
		.failure()
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("must not exceed"));
}

#[test]
fn oversized_bound_fails_without_output() {
	powgen()
		.args(["-u", "100000"])
		.assert()
		.failure()
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("outside the supported range"));
}

#[test]
fn unknown_flag_is_rejected() {
	powgen()
		.arg("-x")
		.assert()
		.failure()
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("-x"));
}

#[test]
fn non_numeric_bound_is_rejected() {
	powgen()
		.args(["-l", "low"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("invalid value"));
}
