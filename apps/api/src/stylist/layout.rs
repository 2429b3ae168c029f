//! Display projection of a recommendation. Pure: no storage, no I/O.

use serde::Serialize;

use crate::stylist::models::Recommendation;

const FALLBACK_TITLE: &str = "Curated Look";
const EMPTY_SLOT: &str = "—";
const MAX_ALTERNATIVE_CARDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternativeCard {
    pub label: String,
    pub summary: String,
}

/// What the result page shows, with placeholders already substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutfitLayout {
    pub title: String,
    pub top: String,
    pub bottom: String,
    pub footwear: String,
    pub accessories: String,
    pub reasoning: String,
    pub alternatives: Vec<AlternativeCard>,
    pub styling_notes: Option<String>,
}

impl From<&Recommendation> for OutfitLayout {
    fn from(rec: &Recommendation) -> Self {
        let primary = &rec.primary_outfit;
        let accessories = if primary.accessories.is_empty() {
            EMPTY_SLOT.to_string()
        } else {
            primary.accessories.join(", ")
        };

        OutfitLayout {
            title: or_placeholder(&primary.title, FALLBACK_TITLE),
            top: or_placeholder(&primary.top, EMPTY_SLOT),
            bottom: or_placeholder(&primary.bottom, EMPTY_SLOT),
            footwear: or_placeholder(&primary.footwear, EMPTY_SLOT),
            accessories,
            reasoning: primary.reasoning.clone(),
            alternatives: rec
                .additional_suggestions
                .iter()
                .take(MAX_ALTERNATIVE_CARDS)
                .map(|s| AlternativeCard {
                    label: s.label.clone(),
                    summary: s.outfit_summary.clone(),
                })
                .collect(),
            styling_notes: Some(rec.styling_notes.trim())
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
