pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::stylist::handlers as stylist;
use crate::wardrobe::handlers as wardrobe;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Styling form
        .route("/api/v1/form/options", get(stylist::handle_form_options))
        .route("/api/v1/form/validate", post(stylist::handle_validate_field))
        .route("/api/v1/recommendations", post(stylist::handle_recommend))
        // Wardrobe
        .route("/api/v1/wardrobe", get(wardrobe::handle_list_saved))
        .route("/api/v1/wardrobe/status", get(wardrobe::handle_save_status))
        .route("/api/v1/wardrobe/toggle", post(wardrobe::handle_toggle_save))
        .with_state(state)
}
