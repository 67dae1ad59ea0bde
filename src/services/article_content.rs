//! Content view for ArticleView.
//!
//! Supplies the article shown on the page: the bundled article or a
//! plain-text file. File layout: the first line is the title, an optional
//! second line directly below it is the subtitle, and the body follows as
//! blank-line separated paragraphs.

use std::fs;
use std::path::Path;

use crate::types::content::Article;
use crate::types::errors::ContentError;

const BUNDLED_ARTICLE: &str = include_str!("../../resources/article/default.txt");

/// Trait defining content view operations.
pub trait ArticleContentTrait {
    fn load(&self, path: Option<&Path>) -> Result<Article, ContentError>;
    fn render_html(&self, article: &Article) -> String;
}

/// Loads and renders the static article.
#[derive(Debug, Default)]
pub struct ArticleContent;

impl ArticleContent {
    pub fn new() -> Self {
        Self
    }

    /// The article shipped with the binary.
    pub fn bundled() -> Article {
        // The bundled text is checked by a unit test, so this cannot fail at runtime.
        Self::parse(BUNDLED_ARTICLE, "bundled").unwrap_or_else(|_| Article {
            title: "Untitled".to_string(),
            subtitle: None,
            paragraphs: Vec::new(),
            estimated_read_time_minutes: 1,
        })
    }

    /// Parses the plain-text article layout.
    pub fn parse(text: &str, source: &str) -> Result<Article, ContentError> {
        let mut lines = text.lines().skip_while(|l| l.trim().is_empty());
        let title = lines
            .next()
            .map(|l| l.trim().to_string())
            .ok_or_else(|| ContentError::Empty(source.to_string()))?;

        let rest: Vec<&str> = lines.collect();
        let (subtitle, body) = match rest.first() {
            Some(line) if !line.trim().is_empty() => (Some(line.trim().to_string()), &rest[1..]),
            _ => (None, &rest[..]),
        };

        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in body {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line.trim());
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }

        if paragraphs.is_empty() {
            return Err(ContentError::Empty(source.to_string()));
        }

        let estimated_read_time_minutes = Self::estimate_read_time(&paragraphs);
        Ok(Article {
            title,
            subtitle,
            paragraphs,
            estimated_read_time_minutes,
        })
    }

    /// Estimates reading time based on word count (~200 words/min).
    fn estimate_read_time(paragraphs: &[String]) -> u32 {
        let word_count: usize = paragraphs.iter().map(|p| p.split_whitespace().count()).sum();
        ((word_count as f64) / 200.0).ceil().max(1.0) as u32
    }
}

impl ArticleContentTrait for ArticleContent {
    fn load(&self, path: Option<&Path>) -> Result<Article, ContentError> {
        let Some(path) = path else {
            return Ok(Self::bundled());
        };
        let text = fs::read_to_string(path).map_err(|e| {
            ContentError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&text, &path.to_string_lossy())
    }

    fn render_html(&self, article: &Article) -> String {
        let mut html = String::with_capacity(4096);
        html.push_str("<article class=\"article\">");
        html.push_str("<h1 class=\"article-title\">");
        html.push_str(&escape_html(&article.title));
        html.push_str("</h1>");
        if let Some(subtitle) = &article.subtitle {
            html.push_str("<p class=\"article-subtitle\">");
            html.push_str(&escape_html(subtitle));
            html.push_str("</p>");
        }
        html.push_str(&format!(
            "<div class=\"article-meta\">{} min read</div>",
            article.estimated_read_time_minutes
        ));
        for paragraph in &article.paragraphs {
            html.push_str("<p class=\"article-text\">");
            html.push_str(&escape_html(paragraph));
            html.push_str("</p>");
        }
        html.push_str("</article>");
        html
    }
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
