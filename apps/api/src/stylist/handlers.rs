//! Axum route handlers for the styling form.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::stylist::form::{FormController, FormPhase};
use crate::stylist::layout::OutfitLayout;
use crate::stylist::models::{Recommendation, RecommendationRequest};
use crate::stylist::validation::{
    validate, Field, OCCASION_MAX_LENGTH, OCCASION_MIN_LENGTH, PREFERENCES_MAX_LENGTH,
    STYLE_ARCHETYPES, SUGGESTED_OCCASIONS,
};
use crate::wardrobe::result_view::ResultView;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub suggested_occasions: &'static [&'static str],
    pub style_archetypes: &'static [&'static str],
    pub occasion_min_length: usize,
    pub occasion_max_length: usize,
    pub preferences_max_length: usize,
}

#[derive(Debug, Deserialize)]
pub struct ValidateFieldRequest {
    pub field: Field,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateFieldResponse {
    pub field: Field,
    /// Empty when the value is valid.
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub submission_id: Uuid,
    pub recommendation: Recommendation,
    pub layout: OutfitLayout,
    pub is_saved: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/form/options
pub async fn handle_form_options() -> Json<FormOptions> {
    Json(FormOptions {
        suggested_occasions: SUGGESTED_OCCASIONS,
        style_archetypes: STYLE_ARCHETYPES,
        occasion_min_length: OCCASION_MIN_LENGTH,
        occasion_max_length: OCCASION_MAX_LENGTH,
        preferences_max_length: PREFERENCES_MAX_LENGTH,
    })
}

/// POST /api/v1/form/validate
///
/// Validates one field on blur, so the browser shows the same messages the
/// submit gate uses.
pub async fn handle_validate_field(
    Json(request): Json<ValidateFieldRequest>,
) -> Json<ValidateFieldResponse> {
    Json(ValidateFieldResponse {
        field: request.field,
        message: validate(request.field, &request.value),
    })
}

/// POST /api/v1/recommendations
///
/// Runs the form submit cycle server-side: validate all fields, call the
/// recommender, and return the result with its wardrobe status.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let submission_id = Uuid::new_v4();

    let mut form = FormController::new();
    form.set_field(Field::Occasion, request.occasion);
    form.set_field(Field::Gender, request.gender);
    form.set_field(Field::Preferences, request.preferences);

    info!(
        "Submission {submission_id}: styling via {} backend",
        state.recommender.backend()
    );
    form.submit(state.recommender.as_ref()).await;

    match form.phase() {
        FormPhase::Success(recommendation) => {
            let view = ResultView::open(recommendation.clone(), state.wardrobe.clone()).await;
            info!(
                "Submission {submission_id}: styled '{}'",
                recommendation.primary_outfit.title
            );
            Ok(Json(RecommendResponse {
                submission_id,
                layout: view.layout(),
                is_saved: view.is_saved(),
                recommendation: recommendation.clone(),
            }))
        }
        FormPhase::Failure(message) => Err(AppError::Recommendation(message.clone())),
        FormPhase::Idle | FormPhase::Submitting => Err(AppError::InvalidForm(field_errors(&form))),
    }
}

/// Visible validation messages keyed by field.
fn field_errors(form: &FormController) -> BTreeMap<Field, String> {
    Field::ALL
        .iter()
        .filter_map(|f| form.visible_error(*f).map(|m| (*f, m.to_string())))
        .collect()
}
