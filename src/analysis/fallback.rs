use super::DiagnosisCandidate;

pub const DISCLAIMER: &str = "This AI analysis is for informational purposes only and should not replace professional medical advice, diagnosis, or treatment. Always consult with qualified healthcare providers for medical concerns.";

pub const EMERGENCY_NOTE: &str = "If you are experiencing severe symptoms, chest pain, difficulty breathing, severe bleeding, or other emergency symptoms, call emergency services immediately.";

const CONDITION: &str = "Complex Symptom Pattern - Professional Evaluation Required";
const PROBABILITY: &str = "Immediate medical consultation recommended";
const DESCRIPTION: &str = "Your symptom combination requires professional medical evaluation for accurate diagnosis. Multiple conditions could present with similar symptoms, and proper clinical examination, medical history review, and potentially diagnostic tests are needed for accurate assessment.";
const RECOMMENDATIONS: [&str; 6] = [
    "Schedule an appointment with your primary care physician within 24-48 hours",
    "If symptoms are severe, worsening, or include fever, chest pain, difficulty breathing, or severe pain, seek immediate medical attention",
    "Prepare a detailed symptom timeline including onset, triggers, severity, and any relieving factors",
    "List all current medications, supplements, and recent changes in health status",
    "Consider keeping a symptom diary until your appointment",
    "Do not delay seeking care if you feel your condition is serious or worsening",
];

/// Safe stand-in returned whenever the model call or its output fails.
pub fn fallback_analysis() -> Vec<DiagnosisCandidate> {
    vec![DiagnosisCandidate {
        condition: CONDITION.to_string(),
        probability: PROBABILITY.to_string(),
        description: DESCRIPTION.to_string(),
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_entry_pointing_to_a_professional() {
        let analysis = fallback_analysis();
        assert_eq!(analysis.len(), 1);
        assert_eq!(analysis[0].recommendations.len(), 6);
        assert!(analysis[0].recommendations[0].contains("primary care physician"));
        assert_eq!(analysis, fallback_analysis());
    }
}
