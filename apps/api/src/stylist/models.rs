use serde::{Deserialize, Serialize};

/// The featured look: one garment per slot plus accessories.
///
/// Also the record shape of the saved wardrobe list, where `title` is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryOutfit {
    pub title: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub top: String,
    #[serde(default)]
    pub bottom: String,
    #[serde(default)]
    pub footwear: String,
    #[serde(default)]
    pub accessories: Vec<String>,
}

/// A one-line alternative shown next to the primary look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalSuggestion {
    pub label: String,
    pub outfit_summary: String,
}

/// Structured outfit suggestion returned by the recommendation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub primary_outfit: PrimaryOutfit,
    #[serde(default)]
    pub additional_suggestions: Vec<AdditionalSuggestion>,
    #[serde(default)]
    pub styling_notes: String,
}

/// The three values handed to the recommendation service on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub occasion: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub preferences: String,
}
