//! Input-type detection and artifact filename derivation.
//!
//! The conversion accepts exactly one source file type (PDF, matched by
//! extension, case-insensitive) and names its output after the source's base
//! name with a fixed `_flipbook.html` suffix:
//!
//! - `report.pdf` → `report_flipbook.html`
//! - `Quarterly Q3.PDF` → `Quarterly Q3_flipbook.html`

use std::path::Path;

const ARTIFACT_SUFFIX: &str = "_flipbook.html";

/// Whether the path names a recognized source file (`.pdf`, any case).
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Derive the artifact filename from the source path's base name.
pub fn artifact_file_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    format!("{stem}{ARTIFACT_SUFFIX}")
}
