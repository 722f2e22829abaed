//! Integration tests for the blank-page padding rule.

use crate::common::{concat_to_file, create_a4_pdf, create_test_pdf, page_count, page_sizes};
use rstest::rstest;
use tempfile::TempDir;

#[rstest]
#[case(1, 2)]
#[case(2, 2)]
#[case(3, 4)]
#[case(4, 4)]
#[case(7, 8)]
#[tokio::test]
async fn test_output_page_count_is_even(#[case] input_pages: u32, #[case] expected: usize) {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.pdf");
    create_a4_pdf(&input, input_pages);

    let output = temp_dir.path().join("out.pdf");
    concat_to_file(vec![input], &output).await.unwrap();

    assert_eq!(page_count(&output), expected);
}

#[tokio::test]
async fn test_blank_page_copies_last_page_dimensions() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("odd.pdf");
    create_test_pdf(&input, 3, 500.0, 700.0);

    let output = temp_dir.path().join("out.pdf");
    concat_to_file(vec![input], &output).await.unwrap();

    let sizes = page_sizes(&output);
    assert_eq!(sizes.len(), 4);
    assert_eq!(sizes[3], (500.0, 700.0), "padding page must match page 3");
}

#[tokio::test]
async fn test_padding_is_per_document() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.pdf");
    let second = temp_dir.path().join("second.pdf");
    create_test_pdf(&first, 1, 612.0, 792.0);
    create_test_pdf(&second, 3, 595.0, 842.0);

    let output = temp_dir.path().join("out.pdf");
    concat_to_file(vec![first, second], &output).await.unwrap();

    let sizes = page_sizes(&output);
    // 1 letter page + its letter-sized blank, 3 A4 pages + an A4 blank.
    assert_eq!(
        sizes,
        vec![
            (612.0, 792.0),
            (612.0, 792.0),
            (595.0, 842.0),
            (595.0, 842.0),
            (595.0, 842.0),
            (595.0, 842.0),
        ]
    );
}

#[tokio::test]
async fn test_even_documents_receive_no_padding() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.pdf");
    let second = temp_dir.path().join("second.pdf");
    create_a4_pdf(&first, 2);
    create_a4_pdf(&second, 4);

    let output = temp_dir.path().join("out.pdf");
    concat_to_file(vec![first, second], &output).await.unwrap();

    assert_eq!(page_count(&output), 6);
}

#[tokio::test]
async fn test_zero_page_document_is_skipped_silently() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty.pdf");
    let even = temp_dir.path().join("even.pdf");
    create_a4_pdf(&empty, 0);
    create_a4_pdf(&even, 2);

    let output = temp_dir.path().join("out.pdf");
    concat_to_file(vec![empty, even], &output).await.unwrap();

    assert_eq!(page_count(&output), 2);
}
