//! Saved outfits: a flat JSON list of primary outfits under one storage key,
//! unique by exact title.
//!
//! Persistence is best-effort. A missing key or malformed JSON reads as an
//! empty list. The read-modify-write in `toggle` is not protected against a
//! second writer on the same key.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::stylist::models::PrimaryOutfit;
use crate::wardrobe::store::{KeyValueStore, StoreError};

#[derive(Debug, Error)]
pub enum WardrobeError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Could not encode wardrobe: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct Wardrobe {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl Wardrobe {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Reads the list. Only a backend failure is an error.
    async fn read(&self) -> Result<Vec<PrimaryOutfit>, StoreError> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<PrimaryOutfit>>(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                warn!("Saved outfits under '{}' are malformed, treating as empty: {e}", self.key);
                Ok(Vec::new())
            }
        }
    }

    async fn write(&self, list: &[PrimaryOutfit]) -> Result<(), WardrobeError> {
        let raw = serde_json::to_string(list)?;
        self.store.set(&self.key, &raw).await?;
        Ok(())
    }

    /// Every saved outfit; empty when storage cannot be read.
    pub async fn list(&self) -> Vec<PrimaryOutfit> {
        self.read().await.unwrap_or_else(|e| {
            warn!("Could not read saved outfits: {e}");
            Vec::new()
        })
    }

    pub async fn is_saved(&self, title: &str) -> bool {
        self.list().await.iter().any(|o| o.title == title)
    }

    /// Saves `outfit` when its title is absent, otherwise removes every entry
    /// with that title. Returns the new saved state.
    pub async fn toggle(&self, outfit: &PrimaryOutfit) -> Result<bool, WardrobeError> {
        let mut list = self.read().await?;
        let before = list.len();
        list.retain(|o| o.title != outfit.title);

        let saved = if list.len() == before {
            list.push(outfit.clone());
            true
        } else {
            false
        };

        self.write(&list).await?;
        debug!("Outfit '{}' saved={saved} ({} in wardrobe)", outfit.title, list.len());
        Ok(saved)
    }
}
