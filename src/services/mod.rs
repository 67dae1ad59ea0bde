// ArticleView services
// Services load what the page shows and how the host window is configured.

pub mod article_content;
pub mod config_engine;
