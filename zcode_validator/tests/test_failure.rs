use std::{fs::write, process::Command};

use tempfile::TempDir;

#[test]
fn test_story_file_not_present() {
    let dir = TempDir::new().unwrap();
    let not_present = dir.path().join("no.such.z5");

    let output = Command::new(env!("CARGO_BIN_EXE_zcode_validator"))
        .arg("--story-path")
        .arg(&not_present)
        .output()
        .unwrap();

    assert!(!output.status.success());

    let err_msg = String::from_utf8_lossy(&output.stderr);
    assert!(
        err_msg.contains("failed to read story file")
            && err_msg.contains(not_present.to_str().unwrap())
    );
}

#[test]
fn test_story_file_not_valid() {
    let dir = TempDir::new().unwrap();
    let not_valid = dir.path().join("illegal.z5");
    write(&not_valid, b"FORM\0\0\0\x04AIFF").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_zcode_validator"))
        .arg("--story-path")
        .arg(&not_valid)
        .output()
        .unwrap();

    assert!(!output.status.success());

    let err_msg = String::from_utf8_lossy(&output.stderr);
    assert!(
        err_msg.contains("failed to classify story file")
            && err_msg.contains(not_valid.to_str().unwrap())
            && err_msg.contains("'AIFF'")
    );
}
