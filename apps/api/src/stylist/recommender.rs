//! Recommender: pluggable, trait-based source of outfit recommendations.
//!
//! Default with a Gemini key: `GeminiRecommender`. Without one: `SampleRecommender`,
//! a fixed look that keeps the app usable offline.
//!
//! `AppState` holds an `Arc<dyn Recommender>`, chosen at startup from config.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::llm_client::{LlmClient, LlmError};
use crate::stylist::models::{AdditionalSuggestion, PrimaryOutfit, Recommendation};
use crate::stylist::prompts::{build_stylist_prompt, stylist_system};

/// Banner text used when a failure carries no displayable message.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while styling your look. Please try again.";

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("{0}")]
    Llm(#[from] LlmError),

    /// May be blank when the failure carried nothing displayable.
    #[error("{0}")]
    Message(String),
}

impl RecommendationError {
    /// Human-readable message carried by the failure, if any.
    pub fn user_message(&self) -> Option<String> {
        match self {
            RecommendationError::Llm(e) => Some(e.to_string()),
            RecommendationError::Message(m) if !m.trim().is_empty() => Some(m.clone()),
            RecommendationError::Message(_) => None,
        }
    }

    /// Message for the error banner, never empty.
    pub fn banner_message(&self) -> String {
        self.user_message()
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
    }
}

/// Opaque asynchronous recommendation call. Implementations own prompt
/// construction, model selection, and response-shape validation.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(
        &self,
        occasion: &str,
        gender: &str,
        preferences: &str,
    ) -> Result<Recommendation, RecommendationError>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}

/// Recommender backed by Gemini through the shared `LlmClient`.
pub struct GeminiRecommender(pub LlmClient);

#[async_trait]
impl Recommender for GeminiRecommender {
    async fn recommend(
        &self,
        occasion: &str,
        gender: &str,
        preferences: &str,
    ) -> Result<Recommendation, RecommendationError> {
        let prompt = build_stylist_prompt(occasion, gender, preferences);
        let recommendation = self
            .0
            .call_json::<Recommendation>(&prompt, &stylist_system())
            .await?;
        if recommendation.primary_outfit.title.trim().is_empty() {
            return Err(RecommendationError::Message(
                "The stylist returned an outfit without a title.".to_string(),
            ));
        }
        info!(
            "Gemini styled '{}' as '{}'",
            occasion, recommendation.primary_outfit.title
        );
        Ok(recommendation)
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}

/// Fixed recommendation used when no API key is configured.
pub struct SampleRecommender;

#[async_trait]
impl Recommender for SampleRecommender {
    async fn recommend(
        &self,
        _occasion: &str,
        _gender: &str,
        _preferences: &str,
    ) -> Result<Recommendation, RecommendationError> {
        Ok(sample_recommendation())
    }

    fn backend(&self) -> &'static str {
        "sample"
    }
}

pub fn sample_recommendation() -> Recommendation {
    Recommendation {
        primary_outfit: PrimaryOutfit {
            title: "Soft Cocktail Evening".to_string(),
            top: "Satin camisole in muted blush with delicate straps.".to_string(),
            bottom: "High-waisted tailored trousers in warm beige.".to_string(),
            footwear: "Strappy block-heel sandals in nude.".to_string(),
            accessories: vec![
                "Minimal gold necklace".to_string(),
                "Structured mini clutch".to_string(),
                "Thin gold bracelet".to_string(),
            ],
            reasoning: "Elegant yet comfortable, suitable for most semi-formal occasions \
                and easy to personalize with makeup and hair."
                .to_string(),
        },
        additional_suggestions: vec![
            AdditionalSuggestion {
                label: "Casual Alternative".to_string(),
                outfit_summary: "Relaxed linen shirt, straight-leg jeans, and white sneakers \
                    with a canvas tote."
                    .to_string(),
            },
            AdditionalSuggestion {
                label: "Trendier Option".to_string(),
                outfit_summary: "Cropped blazer, wide-leg pants, chunky loafers, and a mini \
                    shoulder bag."
                    .to_string(),
            },
            AdditionalSuggestion {
                label: "Budget-Friendly Choice".to_string(),
                outfit_summary: "Solid tee, black jeans, simple flats, and a small crossbody bag."
                    .to_string(),
            },
        ],
        styling_notes: "Keep accessories minimal and let one element stand out: \
            either your bag, shoes, or earrings."
            .to_string(),
    }
}
