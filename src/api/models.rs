use serde::Serialize;

use crate::analysis::DiagnosisCandidate;
use crate::catalog::{EmergencyContact, FirstAidTopic};

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: Vec<DiagnosisCandidate>,
    pub disclaimer: &'static str,
    pub emergency_note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FirstAidIndex {
    pub topics: &'static [FirstAidTopic],
    pub emergency_contacts: &'static [EmergencyContact],
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned with a 500; never carries internal detail.
#[derive(Debug, Serialize)]
pub struct ServiceErrorResponse {
    pub error: &'static str,
    pub message: &'static str,
    pub recommendations: [&'static str; 4],
}

impl ServiceErrorResponse {
    pub const UNAVAILABLE: Self = Self {
        error: "Medical analysis temporarily unavailable",
        message: "We are unable to process your symptoms at this time. Please consult with a healthcare professional for proper medical evaluation.",
        recommendations: [
            "Contact your primary care physician",
            "If symptoms are severe or concerning, seek immediate medical attention",
            "Visit an urgent care center or emergency room if needed",
            "Keep track of your symptoms for when you see a healthcare provider",
        ],
    };
}
