//! # flipdeck
//!
//! Converts a multi-page PDF into a single self-contained HTML file that
//! reads like a physical book: every page is a raster image, pages flip by
//! touch or mouse drag, and the document asks for a password when opened.
//!
//! # Architecture: Generation Pipeline + Embedded Runtime
//!
//! Generation is a straight pipeline; the interesting behavior ships inside
//! the artifact as two inert script payloads:
//!
//! ```text
//! rasterize   PDF bytes  →  Vec<PageImage>      (one opaque PNG per page)
//! assemble    pages      →  artifact String     (HTML + inline images + scripts)
//! ```
//!
//! The artifact then runs standalone — no network, no server, no further
//! dependency on this crate.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`raster`] | Renders PDF pages to PNGs at a target width behind the `RenderBackend` seam |
//! | [`assemble`] | Packages pages + embedded runtime into one deterministic HTML document |
//! | [`convert`] | End-to-end orchestration and the error surface callers see |
//! | [`config`] | `flipdeck.toml` loading, validation, stock config generation |
//! | [`naming`] | Input-type detection and `name_flipbook.html` derivation |
//! | [`types`] | `PageImage`, shared across the pipeline stages |
//!
//! The embedded runtime lives under `assets/` and is compiled into the
//! binary with `include_str!`: `flip.js` (the page-turn state machine),
//! `gate.js` (the access gate), `viewer.css` (the stylesheet).
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! The artifact is generated with [Maud](https://maud.lambda.xyz/):
//! compile-time checked markup, auto-escaped interpolation, and no template
//! files to ship. The only unescaped insertions are the three static assets
//! and the generated init script, whose single dynamic string (the password)
//! goes through `serde_json` to become a valid JS literal.
//!
//! ## Rasterization Behind a Trait
//!
//! `pdfium-render` does the actual page rendering, bound at runtime and
//! wrapped in the [`raster::RenderBackend`] trait. Everything above the
//! trait — dimension math, ordering, PNG encoding, assembly — is exercised
//! in tests with a recording mock, so the pipeline is testable on machines
//! with no pdfium library at all.
//!
//! ## Vanilla-JS Runtime
//!
//! The page-turn engine and gate are small standalone scripts with explicit
//! `attach`/`install` entry points — no bundled jQuery, no plugin pattern,
//! no build step. The engine is a three-state machine (idle → dragging →
//! settling) fed by one pointer-position accessor shared between mouse and
//! touch events.
//!
//! ## The Gate Is a Deterrent, Not DRM
//!
//! The password is embedded verbatim in the artifact and every page image is
//! present in the document source; the copy/print/inspect suppression is
//! best-effort application-level blocking. Anyone who opens the file in a
//! text editor sees everything. Treat the gate as a courtesy lock for casual
//! viewers, never as access control.

pub mod assemble;
pub mod config;
pub mod convert;
pub mod naming;
pub mod raster;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
