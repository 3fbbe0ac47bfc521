#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Isolated scratch directory for one test, used as HOME too.
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("watercooler_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create scratch dir");
    path
}

/// Ledger and inventory paths inside the scratch dir.
pub fn table_paths(dir: &Path) -> (String, String) {
    (
        dir.join("usuarios.csv").to_string_lossy().to_string(),
        dir.join("estoque.csv").to_string_lossy().to_string(),
    )
}

/// The binary, pointed at the test tables, with a private HOME and no colors.
pub fn wc(dir: &Path) -> Command {
    let (ledger, inventory) = table_paths(dir);
    let mut cmd = cargo_bin_cmd!("watercooler");
    cmd.env("HOME", dir)
        .env("APPDATA", dir)
        .env("NO_COLOR", "1")
        .env_remove("WATERCOOLER_LOG")
        .args(["--ledger", &ledger, "--inventory", &inventory, "--test"]);
    cmd
}

/// Initialize both tables and add a few people.
pub fn init_with_people(dir: &Path, names: &[&str]) {
    wc(dir).arg("init").assert().success();

    let mut args = vec!["ledger", "add"];
    args.extend_from_slice(names);
    wc(dir).args(&args).assert().success();
}

pub fn read_ledger(dir: &Path) -> String {
    let (ledger, _) = table_paths(dir);
    fs::read_to_string(ledger).expect("read ledger")
}

pub fn read_inventory(dir: &Path) -> String {
    let (_, inventory) = table_paths(dir);
    fs::read_to_string(inventory).expect("read inventory")
}
