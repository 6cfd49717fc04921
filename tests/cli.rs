use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("words")
}

/// The binary, isolated from any `visie.toml` in the real user config directory
fn visie() -> Command {
    let mut cmd = cargo_bin_cmd!("visie");
    cmd.env("XDG_CONFIG_HOME", "/definitely/not/a/config/dir");
    cmd
}

#[test]
fn enumerates_acronyms_over_a_dictionary() {
    let mut cmd = visie();
    cmd.arg("--dict")
        .arg(fixture_path())
        .arg("pleasing orange home <noise expeller>");

    cmd.assert().success().stdout(
        "HONE: home orange noise expeller\n\
         PHONE: pleasing home orange noise expeller\n\
         PONE: pleasing orange noise expeller\n",
    );
}

#[test]
fn several_constraints_are_any_subset_of_them() {
    let mut cmd = visie();
    cmd.arg("--dict")
        .arg(fixture_path())
        .args(["pleasing", "home", "({orange noise} expeller)"]);

    cmd.assert()
        .success()
        .stdout("PHON: pleasing home orange noise\n");
}

#[test]
fn min_length_flag_admits_shorter_names() {
    let mut cmd = visie();
    cmd.arg("--dict")
        .arg(fixture_path())
        .args(["-m", "3"])
        .arg("pleasing home (orange noise expeller)");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("HOP: home orange pleasing"))
        .stdout(predicate::str::contains("POH: pleasing orange home"));
}

#[test]
fn json_output_has_one_object_per_line() {
    let mut cmd = visie();
    cmd.arg("--dict")
        .arg(fixture_path())
        .args(["--format", "json"])
        .arg("[pleasing orange home <noise expeller>]");

    cmd.assert().success().stdout(
        "{\"name\":\"PHONE\",\"items\":[\"pleasing\",\"home\",\"orange\",\"noise\",\"expeller\"]}\n",
    );
}

#[test]
fn config_file_sets_dictionary_and_length() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(
        file,
        "[generate]\nmin_length = 3\n\n[dictionary]\npath = {:?}",
        fixture_path().display().to_string()
    )
    .expect("write config");

    let mut cmd = visie();
    cmd.arg("--config")
        .arg(file.path())
        .arg("pleasing home (orange noise expeller)");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PHO: pleasing home orange"));
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_file_is_picked_up() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("visie.toml"),
        format!(
            "[generate]\nmin_length = 3\n\n[dictionary]\npath = {:?}\n",
            fixture_path().display().to_string()
        ),
    )
    .expect("write config");

    let mut cmd = visie();
    cmd.env("XDG_CONFIG_HOME", dir.path())
        .arg("pleasing home (orange noise expeller)");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("HEP: home expeller pleasing"));
}

#[test]
fn parse_errors_are_reported_with_a_caret() {
    let mut cmd = visie();
    cmd.arg("--dict").arg(fixture_path()).arg("foo <bar");

    cmd.assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Expected \">\" to close the group opened here\nfoo <bar\n    ^",
        ));
}

#[test]
fn missing_dictionary_is_fatal() {
    let mut cmd = visie();
    cmd.arg("--dict")
        .arg("/definitely/not/a/word/list")
        .arg("pleasing orange");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn help_lists_the_syntax() {
    let mut cmd = visie();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrapping words in angle brackets"));
}
