//! Artifact assembly.
//!
//! Packages the ordered page images plus the embedded viewer runtime into a
//! single HTML document. The output is fully self-contained: images inline
//! as `data:` URLs, stylesheet and scripts embedded at compile time from
//! `assets/`, no network access needed at view time.
//!
//! Embedding order inside the document:
//!
//! 1. Stylesheet (`assets/viewer.css`, in `<head>`)
//! 2. Page containers, one `div.page` per image, `data-index` keyed
//! 3. Page-turn engine definition (`assets/flip.js`)
//! 4. Access gate definition (`assets/gate.js`)
//! 5. Initialization script wiring gate + engine over the page containers
//!
//! [`assemble`] is a pure function of its inputs: identical pages, password,
//! and config produce a byte-identical artifact.
//!
//! The password is embedded verbatim (as a JS string literal) and every page
//! image is readable from the document source. The gate is a deterrent for
//! casual viewers, not an access control — see the crate docs.

use crate::config::ViewerConfig;
use crate::types::PageImage;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use maud::{DOCTYPE, PreEscaped, html};

const CSS: &str = include_str!("../assets/viewer.css");
const FLIP_JS: &str = include_str!("../assets/flip.js");
const GATE_JS: &str = include_str!("../assets/gate.js");

/// Build the complete artifact from ordered page images.
///
/// Precondition: `pages` is non-empty and ordered by `index`. The conversion
/// layer guarantees this (`RasterError::EmptyDocument` fires upstream).
pub fn assemble(pages: &[PageImage], password: &str, config: &ViewerConfig) -> String {
    let document = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1, viewport-fit=cover";
                title { "Flipbook" }
                style { (PreEscaped(CSS)) }
            }
            body {
                div #app {
                    div #flipbook {
                        @for page in pages {
                            div.page data-index=(page.index) {
                                img src=(data_url(&page.png)) alt={ "Page " (page.index + 1) };
                            }
                        }
                        div.edge-indicator.left {}
                        div.edge-indicator.right {}
                    }
                }
                script { (PreEscaped(FLIP_JS)) }
                script { (PreEscaped(GATE_JS)) }
                script { (PreEscaped(init_script(password, config))) }
            }
        }
    };
    document.into_string()
}

/// Inline a PNG as a binary-safe `data:` URL.
fn data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(png))
}

/// The wiring script: install the gate, then hand the page containers to the
/// engine. The password and viewport numbers are the only generated parts;
/// everything behavioral lives in the static assets.
fn init_script(password: &str, config: &ViewerConfig) -> String {
    // serde_json produces a valid, fully escaped JS string literal.
    let password_literal =
        serde_json::to_string(password).expect("strings always serialize");
    format!(
        "\
(function () {{
  FlipGate.install({{ password: {password_literal} }});
  var container = document.getElementById('flipbook');
  var pages = Array.prototype.slice.call(container.querySelectorAll('.page'));
  FlipBook.attach(container, pages, {{
    designWidth: {width},
    designHeight: {height}
  }});
}})();",
        width = config.design_width,
        height = config.design_height,
    )
}
