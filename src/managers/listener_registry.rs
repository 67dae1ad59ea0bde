//! Window-level listener table.
//!
//! The page has one window, so pointer-down and key-down listeners are a
//! shared resource. A component that wants window events takes a
//! [`Subscription`]; its entries stay registered exactly as long as the
//! subscription is alive and are removed on `release()` or on drop.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::types::event::ListenerKind;

/// Registry shared between the page shell and the subscriptions it hands out.
pub type SharedRegistry = Arc<Mutex<ListenerRegistry>>;

/// Trait defining listener registry operations.
pub trait ListenerRegistryTrait {
    fn add(&mut self, kinds: &[ListenerKind]) -> String;
    fn remove(&mut self, subscription_id: &str) -> bool;
    fn is_listening(&self, kind: ListenerKind) -> bool;
    fn listener_count(&self) -> usize;
}

/// In-memory table of active window listeners, keyed by subscription id.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    entries: HashMap<String, Vec<ListenerKind>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedRegistry {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Registers `kinds` and returns a guard that unregisters them.
    pub fn subscribe(registry: &SharedRegistry, kinds: &[ListenerKind]) -> Subscription {
        let id = match registry.lock() {
            Ok(mut r) => r.add(kinds),
            // A poisoned lock still holds a usable table.
            Err(poisoned) => poisoned.into_inner().add(kinds),
        };
        tracing::debug!(subscription = %id, ?kinds, "window listeners attached");
        Subscription {
            id,
            registry: Arc::clone(registry),
            released: false,
        }
    }
}

impl ListenerRegistryTrait for ListenerRegistry {
    fn add(&mut self, kinds: &[ListenerKind]) -> String {
        let id = Uuid::new_v4().to_string();
        self.entries.insert(id.clone(), kinds.to_vec());
        id
    }

    fn remove(&mut self, subscription_id: &str) -> bool {
        self.entries.remove(subscription_id).is_some()
    }

    fn is_listening(&self, kind: ListenerKind) -> bool {
        self.entries.values().any(|kinds| kinds.contains(&kind))
    }

    /// Number of individual (subscription, kind) registrations.
    fn listener_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Scoped registration of window listeners.
#[derive(Debug)]
pub struct Subscription {
    id: String,
    registry: SharedRegistry,
    released: bool,
}

impl Subscription {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Unregisters the listeners now.
    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let removed = match self.registry.lock() {
            Ok(mut r) => r.remove(&self.id),
            Err(poisoned) => poisoned.into_inner().remove(&self.id),
        };
        tracing::debug!(subscription = %self.id, removed, "window listeners detached");
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}
