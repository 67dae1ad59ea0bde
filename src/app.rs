//! App Core for ArticleView.
//!
//! Central struct holding the config engine and the page shell, managing
//! application lifecycle.

use std::path::PathBuf;

use crate::managers::page_shell::PageShell;
use crate::services::article_content::{ArticleContent, ArticleContentTrait};
use crate::services::config_engine::{ConfigEngine, ConfigEngineTrait};
use crate::types::config::AppConfig;

/// Central application struct.
pub struct App {
    pub config_engine: ConfigEngine,
    pub shell: PageShell,
}

impl App {
    /// Creates a new App: loads the config, starts logging and loads the article.
    ///
    /// `article_override` wins over `content.article_path` from the config;
    /// with neither set the bundled article is shown.
    pub fn new(
        config_path: Option<PathBuf>,
        article_override: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config_engine = ConfigEngine::new(config_path);
        let config = config_engine.load()?;

        crate::logging::init(&config.logging.filter);

        let article_path = article_override.or_else(|| config.content.article_path.map(PathBuf::from));
        let article = ArticleContent::new().load(article_path.as_deref())?;

        tracing::info!(
            config = %config_engine.get_config_path().display(),
            article = %article.title,
            "articleview started"
        );

        Ok(Self {
            config_engine,
            shell: PageShell::new(article),
        })
    }

    pub fn config(&self) -> &AppConfig {
        self.config_engine.get_config()
    }

    /// Shutdown sequence: close the panel without committing.
    pub fn shutdown(&mut self) {
        self.shell.dismiss_panel();
        tracing::info!(commits = self.shell.commit_count(), "articleview shutting down");
    }
}
