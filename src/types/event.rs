use serde::{Deserialize, Serialize};

use super::article::ArticleField;

/// Window-level events the settings panel may subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerKind {
    PointerDown,
    KeyDown,
}

/// A raw event delivered by the window, outside any control's own handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowEvent {
    /// Pointer pressed; `inside_panel` is true when the target lies in the panel subtree.
    PointerDown { inside_panel: bool },
    KeyDown { key: String },
}

impl WindowEvent {
    pub fn kind(&self) -> ListenerKind {
        match self {
            WindowEvent::PointerDown { .. } => ListenerKind::PointerDown,
            WindowEvent::KeyDown { .. } => ListenerKind::KeyDown,
        }
    }

    /// Whether this event dismisses an open panel.
    pub fn dismisses_panel(&self) -> bool {
        match self {
            WindowEvent::PointerDown { inside_panel } => !inside_panel,
            WindowEvent::KeyDown { key } => key == "Escape",
        }
    }
}

/// Everything the page shell can be asked to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Toggle,
    ChangeField { field: ArticleField, value: String },
    Submit,
    Reset,
    Window(WindowEvent),
}
