//! Settings panel for ArticleView.
//!
//! Owns the draft article settings and the panel's visibility. The panel is
//! either `Closed` or `Open`; an open panel always holds a live window
//! listener subscription, so listeners exist exactly while the panel is open.
//! Edits go to the draft only and reach the page through a [`CommitTarget`]
//! on submit or reset.

use crate::managers::listener_registry::{ListenerRegistry, SharedRegistry, Subscription};
use crate::types::article::{ArticleField, ArticleState};
use crate::types::errors::PanelError;
use crate::types::event::{ListenerKind, WindowEvent};

const PANEL_LISTENERS: [ListenerKind; 2] = [ListenerKind::PointerDown, ListenerKind::KeyDown];

/// Receiver of committed article settings.
pub trait CommitTarget {
    fn commit(&mut self, state: ArticleState);
}

impl<F: FnMut(ArticleState)> CommitTarget for F {
    fn commit(&mut self, state: ArticleState) {
        self(state)
    }
}

/// Trait defining the settings panel interface.
pub trait SettingsPanelTrait {
    fn activate_toggle(&mut self);
    fn change_field(&mut self, field: ArticleField, value: &str) -> Result<(), PanelError>;
    fn submit(&mut self, target: &mut dyn CommitTarget) -> bool;
    fn reset(&mut self, target: &mut dyn CommitTarget) -> bool;
    fn dismiss(&mut self) -> bool;
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool;
    fn sync_committed(&mut self, committed: &ArticleState);
    fn is_open(&self) -> bool;
    fn draft(&self) -> &ArticleState;
}

#[derive(Debug)]
enum Visibility {
    Closed,
    Open(Subscription),
}

/// The dismissible settings sidebar.
#[derive(Debug)]
pub struct SettingsPanel {
    draft: ArticleState,
    /// Last committed state handed down by the page.
    seed: ArticleState,
    visibility: Visibility,
    registry: SharedRegistry,
}

impl SettingsPanel {
    /// Creates a closed panel seeded from `committed`.
    pub fn new(committed: ArticleState, registry: SharedRegistry) -> Self {
        Self {
            draft: committed,
            seed: committed,
            visibility: Visibility::Closed,
            registry,
        }
    }

    /// Drops to `Closed`, releasing the listener subscription if there is one.
    fn close(&mut self) -> bool {
        match std::mem::replace(&mut self.visibility, Visibility::Closed) {
            Visibility::Open(subscription) => {
                subscription.release();
                true
            }
            Visibility::Closed => false,
        }
    }
}

impl SettingsPanelTrait for SettingsPanel {
    /// Opens the panel. Already open: no-op, the draft is left as is.
    fn activate_toggle(&mut self) {
        if self.is_open() {
            tracing::trace!("toggle ignored, panel already open");
            return;
        }
        self.draft = self.seed;
        let subscription = ListenerRegistry::subscribe(&self.registry, &PANEL_LISTENERS);
        self.visibility = Visibility::Open(subscription);
        tracing::debug!("settings panel opened");
    }

    fn change_field(&mut self, field: ArticleField, value: &str) -> Result<(), PanelError> {
        if !self.is_open() {
            tracing::warn!(%field, value, "change on closed settings panel ignored");
            return Err(PanelError::NotOpen);
        }
        let option = field.resolve(value).map_err(|e| {
            tracing::warn!(error = %e, "rejected settings change");
            e
        })?;
        self.draft.set(field, option)?;
        tracing::debug!(%field, value = option.value, "draft updated");
        Ok(())
    }

    /// Commits the full draft once and closes. Returns false when already closed.
    fn submit(&mut self, target: &mut dyn CommitTarget) -> bool {
        if !self.is_open() {
            return false;
        }
        let snapshot = self.draft;
        self.close();
        tracing::debug!(?snapshot, "settings submitted");
        target.commit(snapshot);
        true
    }

    /// Restores the defaults into the draft, commits them once, and closes.
    fn reset(&mut self, target: &mut dyn CommitTarget) -> bool {
        if !self.is_open() {
            return false;
        }
        self.draft = ArticleState::default();
        self.close();
        tracing::debug!("settings reset to defaults");
        target.commit(self.draft);
        true
    }

    /// Closes without committing. The draft is abandoned until the next open.
    fn dismiss(&mut self) -> bool {
        let closed = self.close();
        if closed {
            tracing::debug!("settings panel dismissed");
        }
        closed
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        if !self.is_open() || !event.dismisses_panel() {
            return false;
        }
        self.dismiss()
    }

    fn sync_committed(&mut self, committed: &ArticleState) {
        self.seed = *committed;
        self.draft = *committed;
    }

    fn is_open(&self) -> bool {
        matches!(self.visibility, Visibility::Open(_))
    }

    fn draft(&self) -> &ArticleState {
        &self.draft
    }
}
