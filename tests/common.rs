// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn dirsum_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("dirsum"))
}

// Creates an empty file at `relative_path` under `dir_path`, making parents as needed.
#[allow(dead_code)]
pub fn create_file(dir_path: &Path, relative_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir_path.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, "")?;
    Ok(())
}
