//! Turns raw model output into a bounded list of [`DiagnosisCandidate`]s.
//!
//! Models routinely wrap JSON in Markdown fences, add a sentence of prose, or
//! drop fields. Fences and prose are stripped, missing fields are filled with
//! placeholders, and anything that is not an array of objects is rejected.

use serde_json::{Map, Value};

use super::{AnalysisError, DiagnosisCandidate};

pub const MAX_CANDIDATES: usize = 6;

pub const UNKNOWN_CONDITION: &str = "Unspecified condition";
pub const UNKNOWN_PROBABILITY: &str = "Unknown";
pub const MISSING_DESCRIPTION: &str = "No description was provided for this condition.";
pub const DEFAULT_RECOMMENDATION: &str = "Consult a healthcare professional for proper evaluation";

pub fn normalize(raw: &str) -> Result<Vec<DiagnosisCandidate>, AnalysisError> {
    let body = strip_code_fences(raw);

    let value: Value = serde_json::from_str(body).map_err(|e| {
        AnalysisError::MalformedUpstreamResponse(format!("model output is not valid JSON: {e}"))
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(AnalysisError::MalformedUpstreamResponse(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            )))
        }
    };

    if items.is_empty() {
        return Err(AnalysisError::MalformedUpstreamResponse(
            "model returned an empty diagnosis list".to_string(),
        ));
    }

    items
        .into_iter()
        .take(MAX_CANDIDATES)
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(candidate_from(&fields)),
            other => Err(AnalysisError::MalformedUpstreamResponse(format!(
                "diagnosis {} is {}, not an object",
                index + 1,
                json_kind(&other)
            ))),
        })
        .collect()
}

/// Removes Markdown code-fence markers around a JSON payload.
///
/// Handles a bare payload, a fenced payload with or without a language tag,
/// and a fenced block with prose before or after it.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };

    // Lone closing fence, nothing opened it.
    if open > 0 && open + 3 == trimmed.len() {
        return trimmed[..open].trim();
    }

    let after_open = &trimmed[open + 3..];
    let tag_len = after_open
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(after_open.len());
    let content = &after_open[tag_len..];

    let content = match content.find("```") {
        Some(close) => &content[..close],
        None => content,
    };
    content.trim()
}

fn candidate_from(fields: &Map<String, Value>) -> DiagnosisCandidate {
    DiagnosisCandidate {
        condition: text_field(fields, "condition").unwrap_or_else(|| UNKNOWN_CONDITION.to_string()),
        probability: text_field(fields, "probability")
            .unwrap_or_else(|| UNKNOWN_PROBABILITY.to_string()),
        description: text_field(fields, "description")
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
        recommendations: recommendations(fields.get("recommendations")),
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match fields.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn recommendations(value: Option<&Value>) -> Vec<String> {
    let list: Vec<String> = match value {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    if list.is_empty() {
        vec![DEFAULT_RECOMMENDATION.to_string()]
    } else {
        list
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
