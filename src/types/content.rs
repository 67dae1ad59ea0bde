use serde::Serialize;

/// Article shown in the content view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Article {
    pub title: String,
    pub subtitle: Option<String>,
    pub paragraphs: Vec<String>,
    pub estimated_read_time_minutes: u32,
}
