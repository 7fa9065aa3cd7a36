use super::PatientQuery;

pub const NOT_SPECIFIED: &str = "Not specified";

pub const SYSTEM_PROMPT: &str = "You are a medical diagnostic AI with advanced training in differential diagnosis, clinical reasoning, and evidence-based medicine. You have access to comprehensive medical knowledge including:

- Disease epidemiology and prevalence data
- Clinical presentation patterns
- Diagnostic criteria and guidelines
- Age and gender-specific considerations
- Red flag symptoms requiring immediate attention

Your responses must be:
- Clinically accurate and evidence-based
- Formatted as valid JSON only
- Focused on specific diagnoses, not general categories
- Include appropriate urgency levels
- Always recommend professional medical evaluation

Remember: This is for educational/informational purposes. Always emphasize the need for professional medical assessment.";

const INSTRUCTIONS: &str = r#"DIAGNOSTIC REQUIREMENTS:
1. Perform systematic differential diagnosis considering:
   - Most likely diagnoses (common conditions)
   - Serious conditions that must be ruled out
   - Age and gender-specific considerations
   - Symptom pattern analysis (acute vs chronic, associated symptoms)

2. Consider these diagnostic categories:
   - Infectious diseases
   - Cardiovascular conditions
   - Respiratory disorders
   - Gastrointestinal conditions
   - Neurological disorders
   - Endocrine/metabolic conditions
   - Musculoskeletal disorders
   - Psychiatric/psychological conditions
   - Dermatological conditions
   - Hematological disorders

3. Provide evidence-based probability assessments based on:
   - Epidemiological data for age/gender
   - Symptom specificity and sensitivity
   - Clinical presentation patterns

RESPONSE FORMAT:
Return a JSON array with 4-6 most likely diagnoses, ordered by probability:

[
  {
    "condition": "Specific Disease Name (ICD-10 compatible)",
    "probability": "High (85-95%)" | "Moderate-High (70-84%)" | "Moderate (50-69%)" | "Low-Moderate (30-49%)" | "Low (15-29%)",
    "description": "Detailed pathophysiology, typical presentation, and clinical course",
    "recommendations": [
      "Immediate actions if urgent",
      "Specific diagnostic tests needed",
      "Treatment considerations",
      "When to seek emergency care",
      "Follow-up recommendations"
    ]
  }
]

CRITICAL INSTRUCTIONS:
- Use specific, recognized disease names (not symptom descriptions)
- Base probabilities on clinical evidence and epidemiology
- Include both common and serious conditions
- Provide actionable medical recommendations
- Consider red flags and emergency situations
- Always recommend professional medical evaluation
- Focus on differential diagnosis, not just symptom matching

Analyze the patient presentation now:"#;

/// Renders the user prompt for one patient presentation.
pub fn build_prompt(query: &PatientQuery) -> String {
    format!(
        "You are an advanced medical AI diagnostic assistant with expertise in differential diagnosis. \
Analyze the following patient presentation and provide a comprehensive medical assessment.

PATIENT INFORMATION:
- Age: {age}
- Gender: {gender}
- Symptom Duration: {duration}
- Presenting Symptoms: {symptoms}

{INSTRUCTIONS}",
        age = or_placeholder(query.age.as_deref()),
        gender = or_placeholder(query.gender.as_deref()),
        duration = or_placeholder(query.duration.as_deref()),
        symptoms = query.symptoms.trim(),
    )
}

fn or_placeholder(field: Option<&str>) -> &str {
    match field.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => NOT_SPECIFIED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_all_fields() {
        let query = PatientQuery {
            symptoms: "headache, fever".to_string(),
            age: Some("34".to_string()),
            gender: Some("female".to_string()),
            duration: Some("2-3-days".to_string()),
        };

        let prompt = build_prompt(&query);
        assert!(prompt.contains("- Age: 34\n"));
        assert!(prompt.contains("- Gender: female\n"));
        assert!(prompt.contains("- Symptom Duration: 2-3-days\n"));
        assert!(prompt.contains("- Presenting Symptoms: headache, fever\n"));
        assert!(prompt.ends_with("Analyze the patient presentation now:"));
    }

    #[test]
    fn missing_and_blank_fields_render_placeholder() {
        let query = PatientQuery {
            symptoms: "cough".to_string(),
            age: None,
            gender: Some("   ".to_string()),
            duration: None,
        };

        let prompt = build_prompt(&query);
        assert!(prompt.contains("- Age: Not specified"));
        assert!(prompt.contains("- Gender: Not specified"));
        assert!(prompt.contains("- Symptom Duration: Not specified"));
    }
}
