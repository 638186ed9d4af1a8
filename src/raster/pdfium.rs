//! Production rendering backend backed by pdfium.
//!
//! `pdfium-render` binds libpdfium at runtime: a bundled library next to the
//! binary is preferred, the system library is the fallback. A missing
//! library is a configuration error surfaced when the backend is created —
//! before any page work starts — never retried.

use super::backend::{BackendError, RenderBackend};
use super::calculations::scaled_page_size;
use image::RgbImage;
use pdfium_render::prelude::*;

pub struct PdfiumBackend {
    pdfium: Pdfium,
}

impl PdfiumBackend {
    /// Bind the pdfium library. Checks `./` for a bundled copy first, then
    /// the system library path.
    pub fn new() -> Result<Self, BackendError> {
        let bindings =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library())
                .map_err(|e| BackendError::Unavailable(e.to_string()))?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl RenderBackend for PdfiumBackend {
    fn render_pages(
        &self,
        document: &[u8],
        target_width: u32,
    ) -> Result<Vec<RgbImage>, BackendError> {
        let document = self
            .pdfium
            .load_pdf_from_byte_slice(document, None)
            .map_err(|e| BackendError::RenderingFailed(format!("failed to open PDF: {e}")))?;

        // pdfium is not thread-safe; pages render sequentially. The costly
        // PNG encode is parallelized downstream in `operations::rasterize`.
        let mut bitmaps = Vec::with_capacity(document.pages().len() as usize);
        for (index, page) in document.pages().iter().enumerate() {
            let intrinsic = (page.width().value, page.height().value);
            let (width, height) = scaled_page_size(intrinsic, target_width);
            let bitmap = page
                .render_with_config(
                    &PdfRenderConfig::new()
                        .set_target_width(width as i32)
                        .set_target_height(height as i32),
                )
                .map_err(|e| {
                    BackendError::RenderingFailed(format!("page {index} failed to render: {e}"))
                })?;
            // to_rgb8 drops the alpha channel; pages embed as opaque images.
            bitmaps.push(bitmap.as_image().to_rgb8());
        }
        Ok(bitmaps)
    }
}
