use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{TempDir, comment, post, user, write_dataset, write_sample_dataset};

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_blog_rank"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("blog_rank"));
}

#[test]
fn ranks_a_dataset_directory() {
    let temp = TempDir::new("smoke", "blog_rank_cli");
    write_sample_dataset(&temp);

    Command::new(env!("CARGO_BIN_EXE_blog_rank"))
        .arg(temp.path())
        .assert()
        .success()
        .stdout("Ann - Id: 1, Score: 1.5\nBo - Id: 2, Score: 1.0\n");
}

#[test]
fn top_limits_the_number_of_lines() {
    let temp = TempDir::new("top", "blog_rank_cli");
    write_sample_dataset(&temp);

    Command::new(env!("CARGO_BIN_EXE_blog_rank"))
        .args(["--top", "1"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout("Ann - Id: 1, Score: 1.5\n");
}

#[test]
fn json_format_produces_a_bloggers_array() {
    let temp = TempDir::new("json", "blog_rank_cli");
    write_sample_dataset(&temp);

    Command::new(env!("CARGO_BIN_EXE_blog_rank"))
        .args(["--format", "json"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bloggers\""));
}

#[test]
fn warns_about_orphans_on_stderr_but_succeeds() {
    let temp = TempDir::new("orphans", "blog_rank_cli");
    write_dataset(
        &temp,
        &[user(1, "Ann")],
        &[post(10, 1), post(11, 99)],
        &[comment(1, 10), comment(2, 777)],
    );

    Command::new(env!("CARGO_BIN_EXE_blog_rank"))
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[warn]"))
        .stdout(predicate::str::contains("Ann - Id: 1"));
}

#[test]
fn missing_data_directory_fails() {
    Command::new(env!("CARGO_BIN_EXE_blog_rank"))
        .arg("definitely/not/a/real/dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn rejects_zero_top() {
    Command::new(env!("CARGO_BIN_EXE_blog_rank"))
        .args(["--top", "0"])
        .assert()
        .failure();
}
