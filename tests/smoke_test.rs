/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

#[test]
fn binary_shows_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("lifeterm"),
        "Help output should mention lifeterm"
    );
}

#[test]
fn binary_shows_version() {
    let output = Command::new("cargo")
        .args(["run", "--", "--version"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn rejects_out_of_range_probability() {
    let output = Command::new("cargo")
        .args(["run", "--", "--prob", "1.5"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        !output.status.success(),
        "Out-of-range probability should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Bad probability should not cause panic"
    );
}

#[test]
fn rejects_zero_dimensions() {
    let output = Command::new("cargo")
        .args(["run", "--", "--width", "0"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        !output.status.success(),
        "Zero width should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Zero width should not cause panic"
    );
}
