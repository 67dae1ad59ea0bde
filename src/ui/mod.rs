//! ArticleView UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The page is rendered as HTML/CSS/JS inside the WebView. The page script
//! reports user events through wry IPC; Rust answers with scripts that patch
//! the sidebar and the container's custom properties.

pub mod webview_app;
