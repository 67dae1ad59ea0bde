// ArticleView state managers
// Managers hold the page's mutable state: committed settings, the panel draft, window listeners.

pub mod listener_registry;
pub mod page_shell;
pub mod settings_panel;
