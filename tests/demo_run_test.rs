//! Headless demo smoke test

use std::process::Command;

/// The demo runs a short game to completion and reports its tallies.
#[test]
fn test_demo_runs_headless() {
    let output = Command::new("cargo")
        .args(["run", "--", "--seconds", "8", "--turbo"])
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute demo");

    assert!(
        output.status.success(),
        "Demo failed to run. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("GAME COMPLETE"),
        "Demo did not complete properly. stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("Distance traveled:"),
        "Missing 'Distance traveled' in the final summary"
    );
    assert!(
        stdout.contains("Final score:"),
        "Missing 'Final score' in the final summary"
    );

    // The game opens on red at the starting line, so the autopilot
    // always records at least one compliant stop
    let stops_line = stdout
        .lines()
        .find(|line| line.contains("Compliant stops:"))
        .expect("Could not find 'Compliant stops' line");

    let parts: Vec<&str> = stops_line.split("Compliant stops:").collect();
    let stops: u32 = parts
        .get(1)
        .and_then(|s| s.trim().parse().ok())
        .expect("Could not parse compliant stop count");

    assert!(stops >= 1, "Autopilot never stopped at the opening red light");
}

/// Config knobs reach the engine: an invalid configuration is rejected
/// before the game starts.
#[test]
fn test_demo_rejects_invalid_config() {
    let output = Command::new("cargo")
        .args(["run", "--", "--seconds", "1", "--turbo", "--max-speed", "0.5"])
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute demo");

    assert!(
        !output.status.success(),
        "Demo accepted max speed below base speed"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("max speed"),
        "Missing config validation message. stderr: {}",
        stderr
    );
}
