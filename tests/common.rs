#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wb() -> Command {
    cargo_bin_cmd!("wochenbericht")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wochenbericht.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and fill Monday and Tuesday of the week of `today`
pub fn init_db_with_week(db_path: &str, today: &str) {
    wb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wb()
        .args([
            "--db", db_path, "--today", today, "day", "mo", "--start", "08:00", "--pause", "30",
            "--end", "16:30", "--tour", "A12", "--spesen", "12,50",
        ])
        .assert()
        .success();

    wb()
        .args([
            "--db", db_path, "--today", today, "day", "di", "--start", "07:15", "--pause", "45",
            "--end", "15:00", "--spesen", "7,50",
        ])
        .assert()
        .success();
}
