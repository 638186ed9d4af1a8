//! Page rasterization — PDF pages in, opaque PNGs out.
//!
//! | Concern | Where |
//! |---|---|
//! | **Dimension math** | [`calculations`] (pure, unit testable) |
//! | **Backend seam** | [`RenderBackend`] trait |
//! | **Production rendering** | [`PdfiumBackend`] via `pdfium-render` |
//! | **Orchestration** | [`rasterize`] (render → parallel PNG encode) |
//!
//! Every page is rendered at the same target pixel width with its own aspect
//! ratio preserved (`zoom = target_width / intrinsic_width`). Output order
//! always equals document page order.

pub mod backend;
pub mod calculations;
pub mod operations;
pub mod pdfium;

pub use backend::{BackendError, RenderBackend};
pub use operations::{RasterError, rasterize};
pub use pdfium::PdfiumBackend;
