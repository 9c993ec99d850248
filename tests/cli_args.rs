use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dog-gallery"))
}

#[test]
fn help_lists_flags() {
    let output = bin().arg("--help").output().expect("binary should run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--api-url", "--api-key", "--page-size", "--ordering", "--breed"] {
        assert!(stdout.contains(flag), "missing {} in help:\n{}", flag, stdout);
    }
}

#[test]
fn version_flag_prints_version() {
    let output = bin().arg("--version").output().expect("binary should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bad_ordering_exits_with_usage_error() {
    let output = bin()
        .args(["--ordering", "sometimes"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown ordering"));
}

#[test]
fn invalid_config_exits_before_touching_terminal() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[api]\npage_size = 0\n").unwrap();

    let output = bin()
        .arg("--config")
        .arg(&path)
        .env_remove("DOG_GALLERY_LOG")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("page size"));
}
