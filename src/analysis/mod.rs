//! Symptom analysis pipeline: prompt, completion call, normalization.
//!
//! [`SymptomAnalyzer::analyze`] runs the pipeline once and reports failures as
//! an [`AnalysisError`]. Whether a failure is replaced by the
//! [`fallback_analysis`] is left to the caller; see
//! [`AnalysisError::is_recoverable`].

mod fallback;
mod normalize;
mod prompt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::completion::{ChatMessage, CompletionClient, CompletionConfig, CompletionError};

pub use fallback::{fallback_analysis, DISCLAIMER, EMERGENCY_NOTE};
pub use normalize::{normalize, strip_code_fences, DEFAULT_RECOMMENDATION, MAX_CANDIDATES};
pub use prompt::{build_prompt, NOT_SPECIFIED, SYSTEM_PROMPT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCandidate {
    pub condition: String,
    pub probability: String,
    pub description: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientQuery {
    #[serde(default, deserialize_with = "nullable_text")]
    pub symptoms: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
}

impl PatientQuery {
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            ..Self::default()
        }
    }
}

/// `null` counts as absent.
fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a string or a number (the dashboard's age field is numeric).
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("analysis service is misconfigured: {0}")]
    Misconfigured(String),
    #[error("upstream completion failed: {0}")]
    UpstreamFailure(String),
    #[error("upstream returned an unusable response: {0}")]
    MalformedUpstreamResponse(String),
}

impl AnalysisError {
    /// Upstream failures are answered with the fallback analysis instead of
    /// an error status.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UpstreamFailure(_) | Self::MalformedUpstreamResponse(_)
        )
    }
}

impl From<CompletionError> for AnalysisError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::MissingCredential | CompletionError::InvalidCredential => {
                Self::Misconfigured(err.to_string())
            }
            CompletionError::NoChoices | CompletionError::Decode(_) => {
                Self::MalformedUpstreamResponse(err.to_string())
            }
            CompletionError::Timeout(_)
            | CompletionError::Transport(_)
            | CompletionError::Status { .. } => Self::UpstreamFailure(err.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SymptomAnalyzer {
    client: CompletionClient,
}

impl SymptomAnalyzer {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            client: CompletionClient::new(config),
        }
    }

    pub async fn analyze(
        &self,
        query: &PatientQuery,
    ) -> Result<Vec<DiagnosisCandidate>, AnalysisError> {
        if query.symptoms.trim().is_empty() {
            return Err(AnalysisError::InvalidRequest(
                "Symptoms are required".to_string(),
            ));
        }

        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(query)),
        ];

        let raw = self.client.complete(&messages).await?;

        normalize(&raw).inspect_err(|_| {
            debug!(raw_response = %raw, "unparseable model output");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_accepts_numeric_age_and_missing_fields() {
        let query: PatientQuery =
            serde_json::from_str(r#"{"symptoms":"cough","age":42,"gender":""}"#).unwrap();
        assert_eq!(query.symptoms, "cough");
        assert_eq!(query.age.as_deref(), Some("42"));
        assert_eq!(query.gender, None);
        assert_eq!(query.duration, None);

        let empty: PatientQuery = serde_json::from_str("{}").unwrap();
        assert!(empty.symptoms.is_empty());

        let null: PatientQuery = serde_json::from_str(r#"{"symptoms":null}"#).unwrap();
        assert!(null.symptoms.is_empty());
    }

    #[test]
    fn only_upstream_errors_are_recoverable() {
        assert!(AnalysisError::UpstreamFailure("503".into()).is_recoverable());
        assert!(AnalysisError::MalformedUpstreamResponse("x".into()).is_recoverable());
        assert!(!AnalysisError::InvalidRequest("x".into()).is_recoverable());
        assert!(!AnalysisError::Misconfigured("x".into()).is_recoverable());
    }

    #[test]
    fn completion_errors_map_to_analysis_kinds() {
        let status = CompletionError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert!(matches!(
            AnalysisError::from(status),
            AnalysisError::UpstreamFailure(_)
        ));
        assert!(matches!(
            AnalysisError::from(CompletionError::NoChoices),
            AnalysisError::MalformedUpstreamResponse(_)
        ));
        assert!(matches!(
            AnalysisError::from(CompletionError::MissingCredential),
            AnalysisError::Misconfigured(_)
        ));
    }

    #[tokio::test]
    async fn blank_symptoms_rejected_before_any_call() {
        // Unroutable endpoint: reaching it would surface as an upstream failure.
        let analyzer = SymptomAnalyzer::new(CompletionConfig::new("http://127.0.0.1:1/", "key"));
        let err = analyzer.analyze(&PatientQuery::new("   ")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidRequest(_)));
    }
}
