//! End-to-end conversion: source PDF in, flipbook artifact out.
//!
//! Validation happens in order of cost: the file type check rejects
//! non-PDFs before any bytes are read, the pdfium binding is established
//! before any page work, and only then does rasterization start. Every
//! failure is request-level — a partially rendered artifact is never
//! produced.

use crate::assemble;
use crate::config::ViewerConfig;
use crate::naming;
use crate::raster::{self, PdfiumBackend, RasterError, RenderBackend};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("not a PDF file: {0}")]
    InvalidInputType(PathBuf),
    #[error("PDF rendering unavailable: {0}")]
    RenderingUnavailable(String),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A completed conversion.
#[derive(Debug)]
pub struct Conversion {
    /// The self-contained HTML artifact.
    pub artifact: String,
    /// Output filename derived from the source's base name.
    pub file_name: String,
    /// Number of pages embedded.
    pub page_count: usize,
}

/// Convert the PDF at `input` using the production pdfium backend.
pub fn convert(
    input: &Path,
    password: &str,
    config: &ViewerConfig,
) -> Result<Conversion, ConvertError> {
    if !naming::is_pdf_path(input) {
        return Err(ConvertError::InvalidInputType(input.to_path_buf()));
    }
    let document = std::fs::read(input)?;
    let backend = PdfiumBackend::new()
        .map_err(|e| ConvertError::RenderingUnavailable(e.to_string()))?;
    convert_bytes(&backend, &document, input, password, config)
}

/// Backend-parameterized core of [`convert`]; `input` is only used for
/// naming the artifact.
pub fn convert_bytes(
    backend: &impl RenderBackend,
    document: &[u8],
    input: &Path,
    password: &str,
    config: &ViewerConfig,
) -> Result<Conversion, ConvertError> {
    let pages = raster::rasterize(backend, document, config.target_width)?;
    let artifact = assemble::assemble(&pages, password, config);
    Ok(Conversion {
        artifact,
        file_name: naming::artifact_file_name(input),
        page_count: pages.len(),
    })
}
