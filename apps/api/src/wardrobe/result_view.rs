//! Result view: a received recommendation plus its "save to wardrobe" toggle.

use tracing::warn;

use crate::stylist::layout::OutfitLayout;
use crate::stylist::models::Recommendation;
use crate::wardrobe::saved::Wardrobe;

pub struct ResultView {
    recommendation: Recommendation,
    is_saved: bool,
    wardrobe: Wardrobe,
}

impl ResultView {
    /// Looks the primary outfit up in the wardrobe. Unreadable storage means "not saved".
    pub async fn open(recommendation: Recommendation, wardrobe: Wardrobe) -> Self {
        let is_saved = wardrobe
            .is_saved(&recommendation.primary_outfit.title)
            .await;
        Self {
            recommendation,
            is_saved,
            wardrobe,
        }
    }

    pub fn recommendation(&self) -> &Recommendation {
        &self.recommendation
    }

    pub fn is_saved(&self) -> bool {
        self.is_saved
    }

    pub fn layout(&self) -> OutfitLayout {
        OutfitLayout::from(&self.recommendation)
    }

    /// Saves or un-saves the primary outfit. Storage failures are logged and
    /// leave `is_saved` unchanged.
    pub async fn toggle_save(&mut self) -> bool {
        match self
            .wardrobe
            .toggle(&self.recommendation.primary_outfit)
            .await
        {
            Ok(saved) => self.is_saved = saved,
            Err(e) => warn!(
                "Could not update wardrobe for '{}': {e}",
                self.recommendation.primary_outfit.title
            ),
        }
        self.is_saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::stylist::recommender::sample_recommendation;
    use crate::wardrobe::saved::tests::{outfit, FailingStore};
    use crate::wardrobe::store::{KeyValueStore, MemoryStore};

    const KEY: &str = "view.savedOutfits";

    #[tokio::test]
    async fn test_open_reports_existing_save() {
        let wardrobe = Wardrobe::new(Arc::new(MemoryStore::new()), KEY);
        let rec = sample_recommendation();
        wardrobe.toggle(&rec.primary_outfit).await.unwrap();

        let view = ResultView::open(rec, wardrobe).await;
        assert!(view.is_saved());
    }

    #[tokio::test]
    async fn test_open_with_corrupt_storage_is_not_saved() {
        let store = Arc::new(MemoryStore::new());
        store.set(KEY, "garbage").await.unwrap();
        let view = ResultView::open(sample_recommendation(), Wardrobe::new(store, KEY)).await;
        assert!(!view.is_saved());
    }

    #[tokio::test]
    async fn test_toggle_flips_and_persists() {
        let wardrobe = Wardrobe::new(Arc::new(MemoryStore::new()), KEY);
        let mut view = ResultView::open(sample_recommendation(), wardrobe.clone()).await;

        assert!(view.toggle_save().await);
        assert_eq!(wardrobe.list().await.len(), 1);
        assert!(!view.toggle_save().await);
        assert!(wardrobe.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_keeps_other_saved_outfits() {
        let wardrobe = Wardrobe::new(Arc::new(MemoryStore::new()), KEY);
        wardrobe.toggle(&outfit("Weekend Denim")).await.unwrap();
        let mut view = ResultView::open(sample_recommendation(), wardrobe.clone()).await;

        view.toggle_save().await;

        let titles: Vec<String> = wardrobe.list().await.into_iter().map(|o| o.title).collect();
        assert!(titles.contains(&"Weekend Denim".to_string()));
        assert!(titles.contains(&"Soft Cocktail Evening".to_string()));
    }

    #[tokio::test]
    async fn test_failed_write_leaves_flag_unchanged() {
        let store = FailingStore {
            fail_reads: false,
            inner: MemoryStore::new(),
        };
        let mut view = ResultView::open(sample_recommendation(), Wardrobe::new(Arc::new(store), KEY)).await;

        assert!(!view.toggle_save().await);
        assert!(!view.is_saved());
    }

    #[tokio::test]
    async fn test_layout_projects_recommendation() {
        let wardrobe = Wardrobe::new(Arc::new(MemoryStore::new()), KEY);
        let view = ResultView::open(sample_recommendation(), wardrobe).await;
        assert_eq!(view.layout().title, view.recommendation().primary_outfit.title);
    }
}
