//! Page Shell for ArticleView.
//!
//! Holds the committed article settings (the only copy the page renders
//! from), the settings panel, and the window listener registry. Every UI
//! event enters through [`PageShell::dispatch`]; committed settings change
//! only through [`PageShell::on_commit`].

use crate::managers::listener_registry::{ListenerRegistry, ListenerRegistryTrait, SharedRegistry};
use crate::managers::settings_panel::{SettingsPanel, SettingsPanelTrait};
use crate::types::article::ArticleState;
use crate::types::content::Article;
use crate::types::errors::PanelError;
use crate::types::event::{UiEvent, WindowEvent};
use crate::view::page;

/// Owner of the committed article settings.
#[derive(Debug)]
pub struct PageShell {
    committed: ArticleState,
    panel: SettingsPanel,
    registry: SharedRegistry,
    article: Article,
    commits: u64,
}

impl PageShell {
    /// Creates a shell with default settings and a closed panel.
    pub fn new(article: Article) -> Self {
        let committed = ArticleState::default();
        let registry = ListenerRegistry::shared();
        let panel = SettingsPanel::new(committed, registry.clone());
        Self {
            committed,
            panel,
            registry,
            article,
            commits: 0,
        }
    }

    /// Replaces the committed settings wholesale and re-seeds the panel draft.
    pub fn on_commit(&mut self, state: ArticleState) {
        self.committed = state;
        self.commits += 1;
        self.panel.sync_committed(&self.committed);
        tracing::info!(
            font_family = state.font_family.value,
            font_size = state.font_size.value,
            font_color = state.font_color.value,
            content_width = state.content_width.value,
            background_color = state.background_color.value,
            "article settings committed"
        );
    }

    pub fn committed(&self) -> &ArticleState {
        &self.committed
    }

    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Number of commits since start-up.
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// The five custom properties for the content container.
    pub fn style_variables(&self) -> Vec<(&'static str, &'static str)> {
        self.committed.style_variables()
    }

    /// Handles one UI event. Returns true when the page needs re-rendering.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<bool, PanelError> {
        match event {
            UiEvent::Toggle => {
                let was_open = self.panel.is_open();
                self.panel.activate_toggle();
                Ok(!was_open)
            }
            UiEvent::ChangeField { field, value } => {
                self.panel.change_field(field, &value)?;
                Ok(true)
            }
            UiEvent::Submit => {
                let mut proposed = None;
                let closed = self.panel.submit(&mut |s: ArticleState| proposed = Some(s));
                if let Some(state) = proposed {
                    self.on_commit(state);
                }
                Ok(closed)
            }
            UiEvent::Reset => {
                let mut proposed = None;
                let closed = self.panel.reset(&mut |s: ArticleState| proposed = Some(s));
                if let Some(state) = proposed {
                    self.on_commit(state);
                }
                Ok(closed)
            }
            UiEvent::Window(window_event) => Ok(self.route_window_event(&window_event)),
        }
    }

    /// Closes the panel without committing, outside the window-event path.
    pub fn dismiss_panel(&mut self) -> bool {
        self.panel.dismiss()
    }

    /// Delivers a window event only if someone is listening for its kind.
    fn route_window_event(&mut self, event: &WindowEvent) -> bool {
        let listening = match self.registry.lock() {
            Ok(r) => r.is_listening(event.kind()),
            Err(poisoned) => poisoned.into_inner().is_listening(event.kind()),
        };
        if !listening {
            tracing::trace!(?event, "window event with no listeners");
            return false;
        }
        self.panel.handle_window_event(event)
    }

    /// Full page HTML.
    pub fn render(&self) -> String {
        page::render_page(&self.committed, &self.panel, &self.article)
    }

    /// Incremental update for an already loaded page.
    pub fn render_update(&self) -> page::PageUpdate {
        page::render_update(&self.committed, &self.panel)
    }
}
