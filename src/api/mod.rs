mod error;
mod handlers;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use error::ApiError;
#[allow(unused_imports)]
pub use handlers::{analyze_symptoms, first_aid_index, first_aid_topic, medication, not_found};
pub use models::{AnalysisResponse, ErrorResponse, FirstAidIndex, ServiceErrorResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/analyze-symptoms", post(analyze_symptoms))
        .route("/first-aid", get(first_aid_index))
        .route("/first-aid/:id", get(first_aid_topic))
        .route("/medications/:name", get(medication))
        .fallback(not_found)
        .with_state(state)
}
