//! Page geometry helpers.
//!
//! A page's MediaBox may live on the page dictionary itself or be inherited
//! from an ancestor node of the page tree, and any of its entries may be an
//! indirect reference. The helpers here resolve both so the padding rule
//! always sees concrete dimensions.

use lopdf::{Document, Object, ObjectId};

use crate::error::{DuplexCatError, Result};

/// Upper bound on Parent-chain traversal; guards against reference cycles.
const PARENT_CHAIN_LIMIT: usize = 64;

/// Width and height of a page's effective MediaBox, in points.
///
/// Width is |urx - llx| and height |ury - lly|, so boxes with a non-zero
/// lower-left corner still report their printed size.
///
/// # Errors
///
/// Returns `ConcatFailed` if neither the page nor any ancestor carries a
/// usable MediaBox.
pub fn page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let media_box = effective_media_box(doc, page_id)?;
    let width = (media_box[2] - media_box[0]).abs();
    let height = (media_box[3] - media_box[1]).abs();
    Ok((width, height))
}

/// Resolve a page's effective MediaBox `[llx, lly, urx, ury]`.
///
/// Looks on the page dictionary first, then walks the `/Parent` chain, as
/// page-tree attributes are inheritable.
pub fn effective_media_box(doc: &Document, page_id: ObjectId) -> Result<[f32; 4]> {
    let mut current = page_id;

    for _ in 0..PARENT_CHAIN_LIMIT {
        let dict = doc.get_object(current)?.as_dict()?;

        if let Ok(media_box) = dict.get(b"MediaBox")
            && let Some(rect) = rect_from_object(doc, media_box)
        {
            return Ok(rect);
        }

        match dict.get(b"Parent") {
            Ok(parent) => current = parent.as_reference()?,
            Err(_) => break,
        }
    }

    Err(DuplexCatError::concat_failed(format!(
        "page {} {} has no MediaBox",
        page_id.0, page_id.1
    )))
}

/// Decode a MediaBox object into `[llx, lly, urx, ury]`.
///
/// Follows one level of indirection and tolerates both integer and real
/// entries. Returns `None` for anything that is not a 4-element rectangle.
fn rect_from_object(doc: &Document, obj: &Object) -> Option<[f32; 4]> {
    let obj = match obj {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };

    let arr = obj.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }

    let mut rect = [0.0f32; 4];
    for (slot, entry) in rect.iter_mut().zip(arr.iter()) {
        let entry = match entry {
            Object::Reference(id) => doc.get_object(*id).ok()?,
            other => other,
        };
        *slot = entry.as_float().ok()?;
    }
    Some(rect)
}
