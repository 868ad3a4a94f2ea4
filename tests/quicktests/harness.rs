use std::process::Command;

use ordtree::harness::{self, HarnessConfig};
use ordtree::HarnessError;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quickcheck_macros::quickcheck;

#[quickcheck]
fn any_seed_prints_sorted_values(seed: u64, nodes: u8) -> bool {
    let config = HarnessConfig {
        nodes: usize::from(nodes),
        ..HarnessConfig::default()
    };
    let mut out = Vec::new();
    harness::run(&config, &mut StdRng::seed_from_u64(seed), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    let values = &lines[1..lines.len() - 1];

    lines.len() == usize::from(nodes) + 3
        && lines[0].is_empty()
        && lines[lines.len() - 1].is_empty()
        && values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[test]
fn run_rejects_bad_lengths() {
    let config = HarnessConfig {
        min_length: 8,
        max_length: 3,
        ..HarnessConfig::default()
    };
    let mut out = Vec::new();
    let err = harness::run(&config, &mut StdRng::seed_from_u64(0), &mut out).unwrap_err();

    assert!(matches!(err, HarnessError::InvalidLengthRange { min: 8, max: 3 }));
    assert!(out.is_empty());
}

#[test]
fn binary_prints_the_tree() {
    let output = Command::new(env!("CARGO_BIN_EXE_randomtree"))
        .args(["--nodes", "5", "--seed", "42"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with('\n'));
    assert!(stdout.ends_with("\n\n"));
    assert_eq!(stdout.lines().count(), 8);
}

#[test]
fn binary_is_reproducible_with_a_seed() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_randomtree"))
            .args(["--nodes", "10", "--seed", "7"])
            .output()
            .unwrap()
            .stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn binary_fails_on_bad_lengths() {
    let output = Command::new(env!("CARGO_BIN_EXE_randomtree"))
        .args(["--min-length", "5", "--max-length", "5"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: invalid string length range"));
}
