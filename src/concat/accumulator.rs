//! The output page sequence under construction.
//!
//! A [`PageAccumulator`] owns a fresh document with an empty page tree.
//! Source documents are renumbered above the accumulator's id space, their
//! objects moved in wholesale, and their pages re-parented onto the
//! accumulator's root page node. Finalizing prunes the orphaned source
//! catalogs and renumbers the result.

use lopdf::{Document, Object, ObjectId, Stream, dictionary};

use crate::error::Result;

/// An ordered, growable sequence of output pages.
///
/// Created empty once per run, grown once per input document, and consumed
/// exactly once by [`PageAccumulator::finish`].
pub struct PageAccumulator {
    doc: Document,
    pages_id: ObjectId,
    page_count: usize,
}

impl PageAccumulator {
    /// Create an empty accumulator with a fresh catalog and page tree.
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(vec![]),
            "Count" => 0,
        });

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        Self {
            doc,
            pages_id,
            page_count: 0,
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Append every page of `source`, in original order.
    ///
    /// The source document's objects are renumbered above the accumulator's
    /// current id space and moved in; its (now orphaned) catalog and page
    /// tree nodes are cleaned up at [`PageAccumulator::finish`] time.
    ///
    /// Returns the number of pages appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the accumulator's page tree cannot be updated.
    pub fn append_document(&mut self, mut source: Document) -> Result<usize> {
        source.renumber_objects_with(self.doc.max_id + 1);
        self.doc.max_id = source.max_id;

        // get_pages is keyed by 1-based page number, so values come out in
        // page order.
        let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();

        self.doc.objects.extend(source.objects);

        self.append_pages(&page_ids)?;

        Ok(page_ids.len())
    }

    /// Append one blank page of the given dimensions.
    ///
    /// The page has an empty content stream, no resources, and MediaBox
    /// `[0 0 width height]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the accumulator's page tree cannot be updated.
    pub fn append_blank_page(&mut self, width: f32, height: f32) -> Result<()> {
        let content_id = self
            .doc
            .add_object(Object::Stream(Stream::new(dictionary! {}, vec![])));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Resources" => dictionary! {},
            "Contents" => content_id,
        });

        self.append_pages(&[page_id])
    }

    /// Re-parent `page_ids` onto the accumulator's root page node and attach
    /// them to its Kids array.
    fn append_pages(&mut self, page_ids: &[ObjectId]) -> Result<()> {
        for &page_id in page_ids {
            let page = self.doc.get_object_mut(page_id)?.as_dict_mut()?;
            page.set("Parent", Object::Reference(self.pages_id));
        }

        let pages = self.doc.get_object_mut(self.pages_id)?.as_dict_mut()?;

        let kids = pages.get_mut(b"Kids")?.as_array_mut()?;
        for &page_id in page_ids {
            kids.push(Object::Reference(page_id));
        }

        let count = pages.get(b"Count")?.as_i64()?;
        pages.set("Count", Object::Integer(count + page_ids.len() as i64));

        self.page_count += page_ids.len();

        Ok(())
    }

    /// Finalize the accumulator and return the finished document.
    ///
    /// Prunes objects unreachable from the catalog (the source documents'
    /// own catalogs and page tree roots) and renumbers for a compact id
    /// space. Stream compression is left to the writer.
    pub fn finish(mut self) -> Document {
        self.doc.prune_objects();
        self.doc.renumber_objects();
        self.doc
    }
}

impl Default for PageAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
