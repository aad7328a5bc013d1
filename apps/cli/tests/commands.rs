//! Command execution tests against files on disk.

mod common;

use std::fs;

use quiz_compare_cli::cli::Commands;
use quiz_compare_cli::config::{Config, OutputFormat};
use quiz_compare_cli::error::CliError;
use quiz_compare_cli::execute;

use common::fixtures::{self, set};
use common::TestContext;

fn config(format: OutputFormat) -> Config {
    Config {
        format,
        ..Config::default()
    }
}

#[test]
fn test_match_command_runs() {
    let ctx = TestContext::new(fixtures::FRANCE, fixtures::FRANCE_SHUFFLED);
    let command = Commands::Match {
        sets: ctx.sets.clone(),
    };
    execute(command, &config(OutputFormat::Json)).unwrap();
}

#[test]
fn test_stats_command_runs() {
    let ctx = TestContext::new(fixtures::FRANCE, fixtures::EGYPT);
    let command = Commands::Stats {
        sets: ctx.sets.clone(),
    };
    execute(command, &config(OutputFormat::Text)).unwrap();
}

#[test]
fn test_missing_file_reports_path() {
    let ctx = TestContext::new(fixtures::FRANCE, fixtures::FRANCE);
    let mut sets = ctx.sets.clone();
    sets.reference = ctx.path("missing.txt");

    let err = execute(Commands::Match { sets }, &config(OutputFormat::Text)).unwrap_err();
    match err {
        CliError::Io { path, .. } => assert!(path.ends_with("missing.txt")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_reference_file_is_rejected() {
    let ctx = TestContext::new(fixtures::FRANCE, "\n\n");
    let err = execute(
        Commands::Match {
            sets: ctx.sets.clone(),
        },
        &config(OutputFormat::Text),
    )
    .unwrap_err();
    assert!(matches!(err, CliError::EmptySet("reference")));
}

#[test]
fn test_prune_writes_remaining_reference() {
    let ctx = TestContext::new(
        &set(&[fixtures::FRANCE, fixtures::JAPAN]),
        &set(&[fixtures::EGYPT, fixtures::FRANCE]),
    );
    let output = ctx.path("pruned.txt");
    let command = Commands::Prune {
        sets: ctx.sets.clone(),
        result: None,
        output: Some(output.clone()),
    };

    execute(command, &config(OutputFormat::Text)).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let remaining = quiz_core::parse(&written);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].text, "ما عاصمة مصر؟");
    assert_eq!(remaining[0].options.len(), 4);
    assert!(remaining[0].options[0].is_correct);
}

#[test]
fn test_prune_single_result_requires_single_match() {
    let ctx = TestContext::new(fixtures::JAPAN, fixtures::FRANCE);
    let command = Commands::Prune {
        sets: ctx.sets.clone(),
        result: Some(0),
        output: Some(ctx.path("pruned.txt")),
    };

    let err = execute(command, &config(OutputFormat::Text)).unwrap_err();
    assert!(matches!(err, CliError::Match(_)));
    assert!(!ctx.path("pruned.txt").exists());
}
