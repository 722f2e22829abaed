//! Integration tests for the basic concatenation scenarios.

use crate::common::{concat_to_file, create_a4_pdf, create_test_pdf, page_count, page_sizes};
use tempfile::TempDir;

#[tokio::test]
async fn test_single_even_document_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("even.pdf");
    create_a4_pdf(&input, 2);

    let output = temp_dir.path().join("out.pdf");
    concat_to_file(vec![input], &output).await.unwrap();

    assert_eq!(page_count(&output), 2);
}

#[tokio::test]
async fn test_single_odd_document_padded() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("odd.pdf");
    create_a4_pdf(&input, 3);

    let output = temp_dir.path().join("out.pdf");
    concat_to_file(vec![input], &output).await.unwrap();

    assert_eq!(page_count(&output), 4);
}

#[tokio::test]
async fn test_odd_then_even_documents() {
    let temp_dir = TempDir::new().unwrap();
    let odd = temp_dir.path().join("odd.pdf");
    let even = temp_dir.path().join("even.pdf");
    create_a4_pdf(&odd, 3);
    create_a4_pdf(&even, 2);

    let output = temp_dir.path().join("out.pdf");
    concat_to_file(vec![odd, even], &output).await.unwrap();

    assert_eq!(page_count(&output), 6);
}

#[tokio::test]
async fn test_page_order_follows_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let letter = temp_dir.path().join("letter.pdf");
    let a4 = temp_dir.path().join("a4.pdf");
    create_test_pdf(&letter, 2, 612.0, 792.0);
    create_test_pdf(&a4, 2, 595.0, 842.0);

    let output = temp_dir.path().join("out.pdf");
    concat_to_file(vec![letter, a4], &output).await.unwrap();

    let sizes = page_sizes(&output);
    assert_eq!(
        sizes,
        vec![
            (612.0, 792.0),
            (612.0, 792.0),
            (595.0, 842.0),
            (595.0, 842.0),
        ]
    );
}

#[tokio::test]
async fn test_every_document_contributes_even_count() {
    let temp_dir = TempDir::new().unwrap();
    let mut inputs = Vec::new();
    for (idx, pages) in [1u32, 2, 3, 4, 5].into_iter().enumerate() {
        let path = temp_dir.path().join(format!("doc_{idx}.pdf"));
        create_a4_pdf(&path, pages);
        inputs.push(path);
    }

    let output = temp_dir.path().join("out.pdf");
    concat_to_file(inputs, &output).await.unwrap();

    // 2 + 2 + 4 + 4 + 6
    assert_eq!(page_count(&output), 18);
}

#[tokio::test]
async fn test_rerun_produces_same_page_structure() {
    let temp_dir = TempDir::new().unwrap();
    let odd = temp_dir.path().join("odd.pdf");
    let even = temp_dir.path().join("even.pdf");
    create_a4_pdf(&odd, 3);
    create_a4_pdf(&even, 2);

    let first = temp_dir.path().join("first.pdf");
    let second = temp_dir.path().join("second.pdf");
    concat_to_file(vec![odd.clone(), even.clone()], &first)
        .await
        .unwrap();
    concat_to_file(vec![odd, even], &second).await.unwrap();

    assert_eq!(page_count(&first), page_count(&second));
    assert_eq!(page_sizes(&first), page_sizes(&second));
}

#[tokio::test]
async fn test_output_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.pdf");
    create_a4_pdf(&input, 2);

    let output = temp_dir.path().join("out.pdf");
    std::fs::write(&output, b"stale contents").unwrap();

    concat_to_file(vec![input], &output).await.unwrap();

    assert_eq!(page_count(&output), 2);
}
