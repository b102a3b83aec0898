// tests/help.rs

mod common;

use assert_cmd::prelude::*;
use common::dirsum_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_no_args_prints_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    std::fs::write(temp.path().join("a.rs"), "")?;

    dirsum_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to the dirsum help menu!"))
        .stdout(predicate::str::contains(".rs:").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_help_flags_anywhere_suppress_walk() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("missing");

    for help in ["-h", "--help"] {
        // A missing path would fail if it were walked.
        dirsum_cmd()
            .arg(&missing)
            .arg("-v")
            .arg(help)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage: dirsum <path> <opt args>"))
            .stdout(predicate::str::contains("Error:").not())
            .stdout(predicate::str::contains("Total files").not());
    }

    dirsum_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-v (verbose: equal to -nt)"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_help_requires_exact_token() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    std::fs::write(temp.path().join("a.rs"), "")?;

    dirsum_cmd()
        .arg(temp.path())
        .arg("-help")
        .assert()
        .success()
        .stdout(".rs: 1\n");

    temp.close()?;
    Ok(())
}
