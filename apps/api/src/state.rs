use std::sync::Arc;

use crate::stylist::recommender::Recommender;
use crate::wardrobe::saved::Wardrobe;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini when an API key is configured, the sample recommender otherwise.
    pub recommender: Arc<dyn Recommender>,
    pub wardrobe: Wardrobe,
}
