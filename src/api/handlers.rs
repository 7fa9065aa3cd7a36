use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::analysis::{fallback_analysis, PatientQuery, DISCLAIMER, EMERGENCY_NOTE};
use crate::catalog::{self, FirstAidTopic, MedicationDetails};
use crate::AppState;

use super::error::ApiError;
use super::models::{AnalysisResponse, ErrorResponse, FirstAidIndex};

pub async fn analyze_symptoms(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PatientQuery>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(query) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let analysis = match state.analyzer.analyze(&query).await {
        Ok(analysis) => {
            info!(candidates = analysis.len(), "symptom analysis complete");
            analysis
        }
        Err(err) if err.is_recoverable() => {
            warn!(error = %err, "symptom analysis failed, serving fallback");
            fallback_analysis()
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Json(AnalysisResponse {
        analysis,
        disclaimer: DISCLAIMER,
        emergency_note: EMERGENCY_NOTE,
    }))
}

pub async fn first_aid_index() -> Json<FirstAidIndex> {
    Json(FirstAidIndex {
        topics: catalog::first_aid_topics(),
        emergency_contacts: catalog::emergency_contacts(),
    })
}

pub async fn first_aid_topic(Path(id): Path<String>) -> Result<Json<FirstAidTopic>, ApiError> {
    catalog::find_first_aid_topic(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No first aid guide for \"{id}\"")))
}

pub async fn medication(Path(name): Path<String>) -> Result<Json<MedicationDetails>, ApiError> {
    catalog::find_medication(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No information found for \"{name}\"")))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
