//! High-level rasterization: render + encode, order preserved.

use super::backend::{BackendError, RenderBackend};
use crate::types::PageImage;
use rayon::prelude::*;
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("document has no pages")]
    EmptyDocument,
}

/// Rasterize every page of `document` at `target_width`.
///
/// Pages come back in document order regardless of encode scheduling: the
/// backend renders sequentially, then PNG encoding fans out over rayon and
/// `collect` reassembles results by input position. A zero-page document is
/// rejected here so the assembler never sees an empty sequence.
pub fn rasterize(
    backend: &impl RenderBackend,
    document: &[u8],
    target_width: u32,
) -> Result<Vec<PageImage>, RasterError> {
    let bitmaps = backend.render_pages(document, target_width)?;
    if bitmaps.is_empty() {
        return Err(RasterError::EmptyDocument);
    }

    bitmaps
        .par_iter()
        .enumerate()
        .map(|(index, bitmap)| -> Result<PageImage, RasterError> {
            let mut png = Vec::new();
            bitmap.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
            Ok(PageImage {
                index,
                width: bitmap.width(),
                height: bitmap.height(),
                png,
            })
        })
        .collect()
}
