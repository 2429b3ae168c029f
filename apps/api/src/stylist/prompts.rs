// Prompt constants for the stylist recommender.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// Persona given to the model before the user's request.
pub const STYLIST_PERSONA: &str = "You are an AI personal stylist. \
    Recommend complete, wearable outfits that suit the occasion and the requested style focus. \
    Respect every stated preference and avoid items the user rules out.";

pub fn stylist_system() -> String {
    format!("{STYLIST_PERSONA} {JSON_ONLY_SYSTEM}")
}

/// Stylist prompt with the request filled in. Each value is inserted once;
/// braces typed by the user are passed through untouched.
pub fn build_stylist_prompt(occasion: &str, gender: &str, preferences: &str) -> String {
    let preferences = if preferences.trim().is_empty() {
        "None"
    } else {
        preferences
    };
    format!(
        r#"User outfit request:
- Occasion / event: "{occasion}"
- Style focus (gender): {gender}
- Extra preferences: "{preferences}"

Return ONLY valid JSON matching exactly this shape:
{{
  "primary_outfit": {{
    "title": "string",
    "top": "string",
    "bottom": "string",
    "footwear": "string",
    "accessories": ["string"],
    "reasoning": "string"
  }},
  "additional_suggestions": [
    {{
      "label": "string",
      "outfit_summary": "string"
    }}
  ],
  "styling_notes": "string"
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_request_values() {
        let prompt = build_stylist_prompt("Gallery Opening", "Female", "love linen");
        assert!(prompt.contains(r#"Occasion / event: "Gallery Opening""#));
        assert!(prompt.contains("Style focus (gender): Female"));
        assert!(prompt.contains(r#"Extra preferences: "love linen""#));
        assert!(!prompt.contains("{occasion}"));
        assert!(prompt.contains(r#""primary_outfit": {"#));
    }

    #[test]
    fn test_prompt_keeps_placeholder_text_typed_by_user() {
        let prompt = build_stylist_prompt("Party themed {preferences}", "Female", "no heels");
        assert!(prompt.contains(r#"Occasion / event: "Party themed {preferences}""#));
        assert!(prompt.contains(r#"Extra preferences: "no heels""#));

        let prompt = build_stylist_prompt("Costume night", "{occasion}", "");
        assert!(prompt.contains("Style focus (gender): {occasion}"));
        assert!(prompt.contains(r#"Occasion / event: "Costume night""#));
    }

    #[test]
    fn test_prompt_blank_preferences_become_none() {
        let prompt = build_stylist_prompt("Weekend Brunch", "Male", "  ");
        assert!(prompt.contains(r#"Extra preferences: "None""#));
    }

    #[test]
    fn test_system_demands_json() {
        assert!(stylist_system().contains("valid JSON only"));
    }
}
