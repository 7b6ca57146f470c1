use std::process::Command;


#[test]
fn test_raw_story_in_current_dir() {
    let setup = setup::setup();
    let path = setup.in_cwd("zork1.z3", &setup::raw_story(3));

    let output = setup.quendor().arg("zork1.z3").output().unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Quendor Z-Machine Interpreter"));
    assert!(stdout.contains("z-code (version 3)"));
    assert!(stdout.contains(path.to_str().unwrap()));
}

#[test]
fn test_raw_story_from_search_path() {
    let setup = setup::setup();
    let path = setup.in_stories("curses.z5", &setup::raw_story(5));

    let output = setup.quendor().arg("curses.z5").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("z-code (version 5)") && stdout.contains(path.to_str().unwrap()));
}

#[test]
fn test_current_dir_shadows_search_path() {
    let setup = setup::setup();
    let local = setup.in_cwd("anchor.z8", &setup::raw_story(8));
    setup.in_stories("anchor.z8", &setup::raw_story(5));

    let output = setup.quendor().arg("anchor.z8").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("z-code (version 8)") && stdout.contains(local.to_str().unwrap()));
}

#[test]
fn test_search_path_flag_overrides_env() {
    let setup = setup::setup();
    let other = tempfile::TempDir::new().unwrap();
    std::fs::write(other.path().join("moonmist.z3"), setup::raw_story(3)).unwrap();

    let output = setup
        .quendor()
        .arg("--search-path")
        .arg(other.path())
        .arg("moonmist.z3")
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_blorb_story() {
    let setup = setup::setup();
    setup.in_stories("dreamhold.zblorb", &setup::iff_story(b"IFRS"));

    let output = setup.quendor().arg("dreamhold.zblorb").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("blorb (IFRS)"));
}

#[test]
fn test_debug_logging() {
    let setup = setup::setup();
    setup.in_cwd("zork1.z3", &setup::raw_story(3));

    let output = setup.quendor().arg("-d").arg("zork1.z3").output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Argument count"));
    assert!(stderr.contains("Located 'zork1.z3'"));
}

#[test]
fn test_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_quendor"))
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
