//! Theme and favorites, persisted through a [`KeyValueStore`].
//!
//! Values are read once at startup and written through on every change.
//! Read failures fall back to defaults. Write failures go back to the app,
//! which reports them on the status line.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{HealerId, Theme};
use crate::traits::{KeyValueStore, StorageError};

pub const THEME_KEY: &str = "soulstream_theme";
pub const FAVORITES_KEY: &str = "soulstream_favorites";

pub struct Preferences {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}

impl Preferences {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored theme, or `default` when missing or unreadable.
    pub fn load_theme(&self, default: Theme) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "unrecognized stored theme");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!("failed to read theme: {}", e);
                default
            }
        }
    }

    /// Stored favorites; empty when missing or unreadable.
    pub fn load_favorites(&self) -> BTreeSet<HealerId> {
        let raw = match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeSet::new(),
            Err(e) => {
                warn!("failed to read favorites: {}", e);
                return BTreeSet::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.into_iter().map(HealerId::new).collect(),
            Err(e) => {
                warn!("stored favorites are not a JSON list, starting empty: {}", e);
                BTreeSet::new()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, theme.as_str())?;
        debug!(%theme, "theme saved");
        Ok(())
    }

    pub fn save_favorites(&self, favorites: &BTreeSet<HealerId>) -> Result<(), StorageError> {
        let ids: Vec<&str> = favorites.iter().map(HealerId::as_str).collect();
        let json = serde_json::to_string(&ids)?;
        self.store.set(FAVORITES_KEY, &json)?;
        debug!(count = ids.len(), "favorites saved");
        Ok(())
    }
}
