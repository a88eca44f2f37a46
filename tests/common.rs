#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const QR: &str = "15|120|Ana|Quispe|44556677|908|Obras|3|Operario|7|2024-01-01|2024-12-31";

/// Command with an isolated HOME (no user config is read) and no colors.
pub fn qra(name: &str) -> Command {
    let home = env::temp_dir().join(format!("{}_qrattend_home", name));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("qrattend");
    cmd.env("HOME", &home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_qrattend.sqlite", name));
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

/// Initialize the local store through the CLI
pub fn init_db(name: &str, db_path: &str) {
    qra(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
