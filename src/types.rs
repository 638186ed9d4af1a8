//! Shared types passed between pipeline stages.
//!
//! These cross the rasterize → assemble boundary and must stay identical for
//! both modules.

/// One rasterized page, ready for embedding.
///
/// Produced by the rasterizer, consumed (and discarded) by the assembler.
/// Immutable after creation; `index` matches the source document's page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// 0-based page index, stable across the whole conversion.
    pub index: usize,
    /// Pixel width of the encoded image (equals the target width ± rounding).
    pub width: u32,
    /// Pixel height, scaled by the same zoom factor as the width.
    pub height: u32,
    /// PNG bytes, opaque (no alpha channel).
    pub png: Vec<u8>,
}
