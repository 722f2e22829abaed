//! Integration tests for duplexcat.
//!
//! These tests exercise the full concatenation flow against real PDF files
//! generated on the fly with lopdf.

use lopdf::{Document, Object, Stream, dictionary};
use std::path::{Path, PathBuf};

/// Write a minimal valid PDF with `pages` pages of the given size.
///
/// The generated files have a proper Catalog and Pages tree so they survive
/// a round trip through `Document::load`.
pub fn create_test_pdf(path: &Path, pages: u32, width: f32, height: f32) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids = Vec::new();

    for _ in 0..pages {
        let content_id = doc.add_object(Object::Stream(Stream::new(dictionary! {}, vec![])));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => Object::Array(kids),
        "Count" => pages as i64,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).unwrap();
}

/// A4-sized test PDF.
pub fn create_a4_pdf(path: &Path, pages: u32) {
    create_test_pdf(path, pages, 595.0, 842.0);
}

/// Number of pages in the PDF at `path`.
pub fn page_count(path: &Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}

/// (width, height) of every page in the PDF at `path`, in page order.
pub fn page_sizes(path: &Path) -> Vec<(f32, f32)> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .map(|id| duplexcat::concat::pages::page_dimensions(&doc, id).unwrap())
        .collect()
}

/// Default quiet config for a run.
pub fn test_config(inputs: Vec<PathBuf>, output: PathBuf) -> duplexcat::Config {
    duplexcat::Config {
        inputs,
        output,
        dry_run: false,
        verbose: false,
        quiet: true,
        no_clobber: false,
    }
}

/// Run the whole concatenate-and-write flow for `inputs`.
pub async fn concat_to_file(inputs: Vec<PathBuf>, output: &Path) -> duplexcat::Result<()> {
    let config = test_config(inputs, output.to_path_buf());

    let concatenator = duplexcat::concat::Concatenator::new();
    let result = concatenator
        .concat(&config, &duplexcat::output::OutputFormatter::quiet())
        .await?;

    let writer = duplexcat::io::PdfWriter::new();
    writer.save(&result.document, output).await
}
