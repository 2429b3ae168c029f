//! Axum route handlers for the saved-outfit wardrobe.
//! Storage failures never reach the client; they are logged by the wardrobe.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::stylist::models::{PrimaryOutfit, Recommendation};
use crate::wardrobe::result_view::ResultView;

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct SaveStatus {
    pub title: String,
    pub is_saved: bool,
}

/// GET /api/v1/wardrobe
pub async fn handle_list_saved(State(state): State<AppState>) -> Json<Vec<PrimaryOutfit>> {
    Json(state.wardrobe.list().await)
}

/// GET /api/v1/wardrobe/status?title=
pub async fn handle_save_status(
    State(state): State<AppState>,
    Query(params): Query<TitleQuery>,
) -> Result<Json<SaveStatus>, AppError> {
    if params.title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    let is_saved = state.wardrobe.is_saved(&params.title).await;
    Ok(Json(SaveStatus {
        title: params.title,
        is_saved,
    }))
}

/// POST /api/v1/wardrobe/toggle
///
/// Saves the recommendation's primary outfit, or removes it if already saved.
/// On a storage failure the previous state is returned unchanged.
pub async fn handle_toggle_save(
    State(state): State<AppState>,
    Json(recommendation): Json<Recommendation>,
) -> Result<Json<SaveStatus>, AppError> {
    if recommendation.primary_outfit.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    let mut view = ResultView::open(recommendation, state.wardrobe.clone()).await;
    let is_saved = view.toggle_save().await;
    Ok(Json(SaveStatus {
        title: view.recommendation().primary_outfit.title.clone(),
        is_saved,
    }))
}
