//! Shared theme storage
//!
//! The engine treats cross-process theme sharing as an external
//! collaborator: a key-value store of themes by id with change
//! notifications. This crate defines that capability as a trait and ships
//! an in-memory reference implementation for tests and demos. Durable
//! persistence and IPC mechanics belong to host applications.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Mutex, RwLock};

use ktheme_engine::Theme;
use thiserror::Error;

/// Storage error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No theme under the requested id.
    #[error("Theme not found in store: {0}")]
    NotFound(String),

    /// A theme without an id cannot be published.
    #[error("Theme is missing an id")]
    MissingId,
}

/// A change observed in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeStoreEvent {
    Added(String),
    Updated(String),
    Removed(String),
}

/// Abstract capability for sharing themes across processes.
///
/// Keyed by `metadata.id`. `put` publishes (insert or overwrite);
/// subscribers observe added/updated/removed ids.
pub trait ThemeStore {
    /// Ids of every available theme.
    fn list_available(&self) -> Vec<String>;

    /// Fetch a theme by id.
    fn get(&self, id: &str) -> Result<Theme, StoreError>;

    /// Publish a theme under its metadata id.
    fn put(&self, theme: Theme) -> Result<(), StoreError>;

    /// Remove a theme by id. Returns whether it was present.
    fn remove(&self, id: &str) -> bool;

    /// Subscribe to change notifications.
    fn subscribe(&self) -> Receiver<ThemeStoreEvent>;
}

/// In-memory reference store.
///
/// Uses interior locking because it models a collaborator shared between
/// logical processes; dropped subscribers are pruned on the next publish.
#[derive(Default)]
pub struct MemoryThemeStore {
    themes: RwLock<HashMap<String, Theme>>,
    subscribers: Mutex<Vec<Sender<ThemeStoreEvent>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn notify(&self, event: ThemeStoreEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|sender| sender.send(event.clone()).is_ok());
    }
}

impl ThemeStore for MemoryThemeStore {
    fn list_available(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.themes.read().unwrap().keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    fn get(&self, id: &str) -> Result<Theme, StoreError> {
        self.themes
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn put(&self, theme: Theme) -> Result<(), StoreError> {
        let id = theme.metadata.id.clone();
        if id.is_empty() {
            return Err(StoreError::MissingId);
        }

        let replaced = self.themes.write().unwrap().insert(id.clone(), theme);
        tracing::debug!(id = %id, replaced = replaced.is_some(), "published theme");

        if replaced.is_some() {
            self.notify(ThemeStoreEvent::Updated(id));
        } else {
            self.notify(ThemeStoreEvent::Added(id));
        }
        Ok(())
    }

    fn remove(&self, id: &str) -> bool {
        let removed = self.themes.write().unwrap().remove(id).is_some();
        if removed {
            self.notify(ThemeStoreEvent::Removed(id.to_string()));
        }
        removed
    }

    fn subscribe(&self) -> Receiver<ThemeStoreEvent> {
        let (sender, receiver) = channel();
        self.subscribers.lock().unwrap().push(sender);
        receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ktheme_engine::{navy_gold_theme, paper_ink_theme};

    #[test]
    fn put_get_list_round_trip() {
        let store = MemoryThemeStore::new();
        store.put(navy_gold_theme()).unwrap();
        store.put(paper_ink_theme()).unwrap();

        assert_eq!(store.list_available(), vec!["navy-gold", "paper-ink"]);
        assert_eq!(store.get("navy-gold").unwrap().metadata.name, "Navy Gold");
    }

    #[test]
    fn missing_theme_is_an_error() {
        let store = MemoryThemeStore::new();
        let err = store.get("ghost").unwrap_err();
        assert_eq!(err.to_string(), "Theme not found in store: ghost");
    }

    #[test]
    fn empty_id_cannot_be_published() {
        let store = MemoryThemeStore::new();
        let theme = Theme::default();
        assert!(matches!(store.put(theme), Err(StoreError::MissingId)));
    }

    #[test]
    fn subscribers_observe_added_updated_removed() {
        let store = MemoryThemeStore::new();
        let events = store.subscribe();

        store.put(navy_gold_theme()).unwrap();
        store.put(navy_gold_theme()).unwrap();
        assert!(store.remove("navy-gold"));
        assert!(!store.remove("navy-gold"));

        assert_eq!(
            events.try_iter().collect::<Vec<_>>(),
            vec![
                ThemeStoreEvent::Added("navy-gold".to_string()),
                ThemeStoreEvent::Updated("navy-gold".to_string()),
                ThemeStoreEvent::Removed("navy-gold".to_string()),
            ]
        );
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let store = MemoryThemeStore::new();
        drop(store.subscribe());
        store.put(navy_gold_theme()).unwrap();
        assert_eq!(store.subscribers.lock().unwrap().len(), 0);
    }
}
