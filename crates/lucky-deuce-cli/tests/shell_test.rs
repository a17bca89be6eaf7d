//! Integration tests for the interactive shell.

use std::io::Cursor;

use lucky_deuce_cli::config::OutputFormat;
use lucky_deuce_cli::shell::{PROMPT, SPIN_PREFIX, Shell};
use lucky_deuce_core::rng::StdEntropy;
use lucky_deuce_test_support::SequenceProvider;

/// Run a shell over `input` and return everything it printed.
fn run_session(shell: &mut Shell, input: &str) -> String {
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut writer: Vec<u8> = Vec::new();
    shell.run(&mut reader, &mut writer).unwrap();
    String::from_utf8(writer).unwrap()
}

/// Labels of every spin line, in order.
fn spun_labels(output: &str) -> Vec<String> {
    output
        .split(PROMPT)
        .filter_map(|chunk| chunk.trim_end().strip_prefix(SPIN_PREFIX))
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_enter_spins_and_exit_ends_session() {
    let provider = SequenceProvider::new(vec![vec![1, 1, 1, 2]]);
    let mut shell = Shell::new(Box::new(provider), OutputFormat::Text);

    let output = run_session(&mut shell, "\n\n\nexit\n");

    assert_eq!(spun_labels(&output), vec!["1", "1", "2"]);
    assert_eq!(output.matches(PROMPT).count(), 4);
}

#[test]
fn test_spin_line_layout() {
    let provider = SequenceProvider::new(vec![vec![7, 37]]);
    let mut shell = Shell::new(Box::new(provider), OutputFormat::Text);

    let output = run_session(&mut shell, "\n\nexit\n");

    assert_eq!(
        output,
        format!("{PROMPT}- Number:  7\n{PROMPT}- Number:  00\n{PROMPT}")
    );
}

#[test]
fn test_double_zero_is_printed_as_00() {
    let provider = SequenceProvider::new(vec![vec![37, 0]]);
    let mut shell = Shell::new(Box::new(provider), OutputFormat::Text);

    let output = run_session(&mut shell, "\nspin\nEXIT\n");

    assert_eq!(spun_labels(&output), vec!["00", "0"]);
}

#[test]
fn test_policy_switch_prints_nothing() {
    let provider = SequenceProvider::new(vec![vec![], vec![5, 7]]);
    let mut shell = Shell::new(Box::new(provider), OutputFormat::Text);

    let output = run_session(&mut shell, "pelayo\nexit\n");

    assert_eq!(output, format!("{PROMPT}{PROMPT}"));
}

#[test]
fn test_pelayo_then_reset_swaps_policies() {
    let provider = SequenceProvider::new(vec![
        vec![1, 1, 1, 2],
        vec![5, 7],
        vec![20, 21],
    ]);
    let mut shell = Shell::new(Box::new(provider), OutputFormat::Text);

    let output = run_session(&mut shell, "\n\n\nPELAYO\n\n\n\nreset\n\n\nexit\n");

    assert_eq!(
        spun_labels(&output),
        vec!["1", "1", "2", "11", "16", "4", "20", "21"]
    );
}

#[test]
fn test_end_of_input_ends_session() {
    let provider = SequenceProvider::new(vec![vec![3]]);
    let mut shell = Shell::new(Box::new(provider), OutputFormat::Text);

    let output = run_session(&mut shell, "\n");

    assert_eq!(spun_labels(&output), vec!["3"]);
    assert!(output.ends_with(&format!("{PROMPT}\n")));
}

#[test]
fn test_json_output_writes_one_record_per_spin() {
    let provider = SequenceProvider::new(vec![vec![37, 4]]);
    let mut shell = Shell::new(Box::new(provider), OutputFormat::Json);

    let output = run_session(&mut shell, "\n\nexit\n");

    let records: Vec<serde_json::Value> = output
        .split(PROMPT)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| serde_json::from_str(chunk.trim_end()).unwrap())
        .collect();
    assert_eq!(
        records,
        vec![
            serde_json::json!({ "pocket": "00", "value": 37 }),
            serde_json::json!({ "pocket": "4", "value": 4 }),
        ]
    );
}

#[test]
fn test_seeded_sessions_are_reproducible_across_swaps() {
    let input = "\n\n\npelayo\n\n\nreset\n\n\nexit\n";
    let mut left = Shell::new(Box::new(StdEntropy::seeded(99)), OutputFormat::Text);
    let mut right = Shell::new(Box::new(StdEntropy::seeded(99)), OutputFormat::Text);

    let left_output = run_session(&mut left, input);
    let right_output = run_session(&mut right, input);

    assert_eq!(spun_labels(&left_output).len(), 7);
    assert_eq!(left_output, right_output);
}
