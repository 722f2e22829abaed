//! Integration tests for error handling and edge cases.

use crate::common::{concat_to_file, create_a4_pdf, test_config};
use duplexcat::DuplexCatError;
use duplexcat::concat::Concatenator;
use duplexcat::output::OutputFormatter;
use duplexcat::validation::Validator;
use std::path::PathBuf;
use tempfile::TempDir;

#[tokio::test]
async fn test_nonexistent_input_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.pdf");

    let result = concat_to_file(vec![PathBuf::from("/nonexistent/file.pdf")], &output).await;

    assert!(result.is_err());
    assert!(!output.exists(), "No output may be left after a failed run");
}

#[tokio::test]
async fn test_failure_in_later_input_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("good.pdf");
    create_a4_pdf(&good, 3);
    let missing = temp_dir.path().join("missing.pdf");

    let output = temp_dir.path().join("out.pdf");
    let result = concat_to_file(vec![good, missing], &output).await;

    assert!(result.is_err());
    assert!(
        !output.exists(),
        "A failure mid-run must not leave partial output"
    );
}

#[tokio::test]
async fn test_corrupted_input_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let corrupted = temp_dir.path().join("corrupted.pdf");
    std::fs::write(&corrupted, b"%PDF-garbage").unwrap();

    let output = temp_dir.path().join("out.pdf");
    let result = concat_to_file(vec![corrupted], &output).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_empty_input_list_is_a_library_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(vec![], temp_dir.path().join("out.pdf"));

    let concatenator = Concatenator::new();
    let result = concatenator
        .concat(&config, &OutputFormatter::quiet())
        .await;

    assert!(matches!(result.unwrap_err(), DuplexCatError::NoInputFiles));
}

#[tokio::test]
async fn test_no_clobber_refuses_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.pdf");
    create_a4_pdf(&input, 2);

    let output = temp_dir.path().join("existing.pdf");
    std::fs::write(&output, b"keep me").unwrap();

    let mut config = test_config(vec![input], output.clone());
    config.no_clobber = true;

    let validator = Validator::new();
    let result = validator.validate_output(&config).await;

    assert!(matches!(
        result.unwrap_err(),
        DuplexCatError::OutputExists { .. }
    ));
    assert_eq!(std::fs::read(&output).unwrap(), b"keep me");
}

#[tokio::test]
async fn test_empty_file_is_reported_as_corrupt() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty.pdf");
    std::fs::File::create(&empty).unwrap();

    let validator = Validator::new();
    let result = validator.validate_file(&empty).await;

    assert!(matches!(
        result.unwrap_err(),
        DuplexCatError::CorruptedPdf { .. }
    ));
}

#[tokio::test]
async fn test_exit_codes_distinguish_error_classes() {
    let not_found = DuplexCatError::file_not_found(PathBuf::from("x.pdf"));
    let parse = DuplexCatError::failed_to_load_pdf(PathBuf::from("x.pdf"), "bad header");
    let exists = DuplexCatError::output_exists(PathBuf::from("out.pdf"));

    assert_ne!(not_found.exit_code(), 0);
    assert_ne!(parse.exit_code(), not_found.exit_code());
    assert_ne!(exists.exit_code(), parse.exit_code());
}
