//! ArticleView: an article reading page with a dismissible settings sidebar.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod ipc_handler;
pub mod logging;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod types;
pub mod view;

#[cfg(feature = "gui")]
pub mod ui;
