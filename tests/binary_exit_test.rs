// tests/binary_exit_test.rs

use std::process::Command;

#[test]
fn test_failure_is_reported_on_stderr_with_logging_off() {
    let missing = std::env::temp_dir().join(format!(
        "series_plot_render_{}_no_such_input.xvg",
        std::process::id()
    ));
    let output = Command::new(env!("CARGO_BIN_EXE_Series_Plot_Render"))
        .arg(&missing)
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr was: {stderr}");
    assert!(stderr.contains("no_such_input.xvg"), "stderr was: {stderr}");
}

#[test]
fn test_version_flag_prints_package_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_Series_Plot_Render"))
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout was: {stdout}");
}

// tests/binary_exit_test.rs
