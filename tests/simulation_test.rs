use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_elevator_sim"))
        .args(args)
        .env("RUST_LOG", "warn,elevator_sim=info")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start simulation");

    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write commands");

    child
        .wait_with_output()
        .expect("Failed to wait for simulation")
}

/// Test that the simulation runs in headless mode without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = run_binary(
        &[
            "--floors", "5", "--seed", "42", "--random", "4", "--steps", "12", "--delay-ms", "0",
        ],
        "",
    );

    assert!(
        output.status.success(),
        "Simulation failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.contains("Added 4 random passengers."));
    assert_eq!(stdout.matches("Building state:").count(), 12);
    assert!(stdout.contains("--- STATUS ---"));

    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
    assert!(stderr.contains("Steps taken: 12"));
    assert!(stderr.contains("Requests submitted: 4"));
    assert!(stderr.contains("Using seed 42"));
}

/// Test that the same seed produces the same run
#[test]
fn test_headless_simulation_is_reproducible() {
    let args = [
        "--floors", "7", "--seed", "3", "--random", "6", "--steps", "20", "--delay-ms", "0",
    ];
    let first = run_binary(&args, "");
    let second = run_binary(&args, "");

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

/// Test an interactive session fed through stdin
#[test]
fn test_interactive_session() {
    let output = run_binary(
        &["--delay-ms", "0"],
        "5\nadd 3 1\nauto 9\nstatus\nquit\n",
    );

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.contains("Enter number of floors: "));
    assert!(stdout.contains("Added person 3→1"));
    assert!(stdout.contains("  >> Picked up passenger 3 to 1"));
    assert!(stdout.contains("  >> Dropped off passenger 3 to 1"));
    assert!(stdout.contains("Current floor: 2 | Direction: UP"));
    assert!(stdout.contains("Exiting simulation."));
    assert!(stderr.contains("Passengers delivered: 1"));
}

/// Test that the floor prompt asks again after bad input
#[test]
fn test_floor_prompt_retries() {
    let output = run_binary(&["--delay-ms", "0"], "zero\n0\n3\nquit\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Enter number of floors: ").count(), 3);
    assert_eq!(stdout.matches("Please enter a positive whole number.").count(), 2);
}

/// Test that configuration errors end the program with a failure status
#[test]
fn test_invalid_configuration_fails() {
    let zero_floors = run_binary(&["--floors", "0", "--steps", "1"], "");
    assert!(!zero_floors.status.success());

    let random_on_one_floor = run_binary(
        &["--floors", "1", "--random", "2", "--steps", "1", "--delay-ms", "0"],
        "",
    );
    assert!(!random_on_one_floor.status.success());
    let stderr = String::from_utf8_lossy(&random_on_one_floor.stderr);
    assert!(stderr.contains("below the minimum of 2"));
}
