// ArticleView shared type definitions
// Option tables, article state, UI events, and error enums.

pub mod article;
pub mod config;
pub mod content;
pub mod errors;
pub mod event;
pub mod options;
