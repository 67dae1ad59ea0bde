//! HTML view layer: primitive controls and the page template.
//!
//! Independent of the WebView so pages can be rendered and checked headlessly.

pub mod controls;
pub mod page;
