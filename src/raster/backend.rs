//! Rendering backend trait and shared types.
//!
//! The [`RenderBackend`] trait is the seam between the conversion pipeline
//! and the PDF library: "render every page of this document at the target
//! pixel width, in document order". The production implementation is
//! [`PdfiumBackend`](super::pdfium::PdfiumBackend); tests use the recording
//! [`MockBackend`](tests::MockBackend) so pipeline logic can be exercised
//! without a pdfium library installed.

use image::RgbImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The rendering library could not be initialized at all. Fatal for the
    /// request; reported to the caller, never retried.
    #[error("rendering library unavailable: {0}")]
    Unavailable(String),
    /// The document could not be opened or a page failed to render.
    #[error("rendering failed: {0}")]
    RenderingFailed(String),
}

/// Trait for page-rendering backends.
pub trait RenderBackend {
    /// Render every page to an opaque RGB bitmap, preserving each page's
    /// aspect ratio at the given pixel width. The returned order is the
    /// document's page order.
    fn render_pages(&self, document: &[u8], target_width: u32) -> Result<Vec<RgbImage>, BackendError>;
}
