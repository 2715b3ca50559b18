//! End-to-end checks of both binaries through their command lines.

#![expect(
    unused_crate_dependencies,
    reason = "Integration tests only drive the built binaries."
)]

use std::io::Write as _;
use std::process::{Command, Output, Stdio};

fn run(exe: &str, args: &[&str]) -> Output {
    Command::new(exe)
        .args(args)
        .env_remove("DICE_DUEL_TARGET")
        .env_remove("DICE_DUEL_FIRST")
        .env_remove("DICE_DUEL_SECOND")
        .env_remove("DICE_DUEL_SEED")
        .stdin(Stdio::null())
        .output()
        .expect("run cli")
}

fn ask_name_with_input(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ask-name"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for cli")
}

#[test]
fn ask_name_prints_the_given_name() {
    let output = run(env!("CARGO_BIN_EXE_ask-name"), &["--name", "Ada"]);
    assert!(output.status.success(), "long option is accepted");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Ada", "name is echoed");

    let output = run(env!("CARGO_BIN_EXE_ask-name"), &["-n", "Grace Hopper"]);
    assert!(output.status.success(), "short option is accepted");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Grace Hopper",
        "name is echoed"
    );
}

#[test]
fn ask_name_reads_a_piped_name() {
    let output = ask_name_with_input("Bob\n");

    assert!(
        output.status.success(),
        "piped input is read: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Bob", "piped name");
}

#[test]
fn ask_name_accepts_an_empty_answer() {
    let output = ask_name_with_input("\n");

    assert!(
        output.status.success(),
        "empty answer is accepted: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "", "empty name");
}

#[test]
fn game_help_lists_the_options() {
    let output = run(env!("CARGO_BIN_EXE_dice-duel"), &["--help"]);
    assert!(output.status.success(), "help exits cleanly");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for option in ["--target", "--first", "--second", "--seed"] {
        assert!(stdout.contains(option), "help is missing {option}");
    }
}

#[test]
fn game_rejects_bad_targets_before_starting() {
    for target in ["0", "-4", "fifty"] {
        let arg = format!("--target={target}");
        let output = run(env!("CARGO_BIN_EXE_dice-duel"), &[&arg]);
        assert!(!output.status.success(), "target {target} was accepted");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("invalid target score"),
            "unexpected error for {target}: {stderr}"
        );
    }
}

#[test]
fn game_reads_the_target_from_the_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_dice-duel"))
        .env("DICE_DUEL_TARGET", "0")
        .stdin(Stdio::null())
        .output()
        .expect("run cli");
    assert!(!output.status.success(), "zero target from the environment");
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("invalid target score"),
        "the environment value is validated like the option"
    );
}
