//! Pure dimension math for page rasterization.
//!
//! Everything here is testable without a PDF library or any I/O.

/// Pixel dimensions for a page rendered at `target_width`.
///
/// The zoom factor is `target_width / intrinsic_width`, applied to both
/// axes so the page's aspect ratio is preserved exactly. Height is rounded
/// to the nearest pixel and never drops below 1.
///
/// # Arguments
/// * `intrinsic` - Page size in source units (PDF points), (width, height)
/// * `target_width` - Desired pixel width
pub fn scaled_page_size(intrinsic: (f32, f32), target_width: u32) -> (u32, u32) {
    let (width, height) = intrinsic;
    let zoom = target_width as f64 / width as f64;
    let pixel_height = (height as f64 * zoom).round().max(1.0) as u32;
    (target_width, pixel_height)
}
