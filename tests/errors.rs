// tests/errors.rs

mod common;

use assert_cmd::prelude::*;
use common::dirsum_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_error_invalid_input_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?; // Need a valid directory to run from

    dirsum_cmd()
        .arg("non_existent_path_hopefully")
        .arg("-t")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::str::contains("non_existent_path_hopefully"))
        .stdout(predicate::str::contains("Total files").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_flag_as_first_token_is_treated_as_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    // The first argument is always the path, so "-n" names a missing directory.
    dirsum_cmd()
        .arg("-n")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("Error: "));

    temp.close()?;
    Ok(())
}
