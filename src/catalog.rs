//! Static first-aid and medication content served to the dashboard.

use serde::{ser::SerializeStruct, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::High => "Critical",
            Severity::Medium => "Urgent",
            Severity::Low => "Standard",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmergencyStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct FirstAidTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub steps: &'static [EmergencyStep],
}

// `severity_label` is derived from `severity` at serialization time.
impl Serialize for FirstAidTopic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FirstAidTopic", 6)?;
        state.serialize_field("id", self.id)?;
        state.serialize_field("title", self.title)?;
        state.serialize_field("severity", &self.severity)?;
        state.serialize_field("severity_label", self.severity.label())?;
        state.serialize_field("description", self.description)?;
        state.serialize_field("steps", self.steps)?;
        state.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmergencyContact {
    pub region: &'static str,
    pub number: &'static str,
    pub services: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MedicationDetails {
    pub name: &'static str,
    pub generic_name: &'static str,
    pub uses: &'static [&'static str],
    pub dosage: &'static str,
    pub side_effects: &'static [&'static str],
    pub warnings: &'static [&'static str],
    pub interactions: &'static [&'static str],
}

const fn step(step: u8, title: &'static str, description: &'static str) -> EmergencyStep {
    EmergencyStep {
        step,
        title,
        description,
        warning: None,
    }
}

const fn warned_step(
    step: u8,
    title: &'static str,
    description: &'static str,
    warning: &'static str,
) -> EmergencyStep {
    EmergencyStep {
        step,
        title,
        description,
        warning: Some(warning),
    }
}

const fn topic(
    id: &'static str,
    title: &'static str,
    severity: Severity,
    description: &'static str,
    steps: &'static [EmergencyStep],
) -> FirstAidTopic {
    FirstAidTopic {
        id,
        title,
        severity,
        description,
        steps,
    }
}

static BURNS_STEPS: [EmergencyStep; 4] = [
    step(1, "Cool the burn", "Hold the burned area under cool (not cold) running water for 10-20 minutes or until the pain subsides."),
    step(2, "Remove jewelry", "Remove rings, watches, or tight clothing before swelling begins."),
    warned_step(3, "Protect the burn", "Cover with sterile gauze bandage. Do not use cotton or apply ice directly.", "Do not break blisters or apply butter or oils"),
    step(4, "Seek medical help", "For severe burns, burns larger than 3 inches, or burns on face, hands, feet, or genitals."),
];

static CUTS_STEPS: [EmergencyStep; 4] = [
    step(1, "Clean your hands", "Wash your hands thoroughly or use hand sanitizer before treating the wound."),
    step(2, "Stop the bleeding", "Apply direct pressure with a clean cloth or sterile gauze."),
    step(3, "Clean the wound", "Rinse with clean water. Use tweezers to remove debris if necessary."),
    step(4, "Apply bandage", "Cover with adhesive bandage or sterile gauze and tape."),
];

static CHOKING_STEPS: [EmergencyStep; 4] = [
    step(1, "Assess the situation", "If person can cough or speak, encourage coughing. If not, proceed immediately."),
    step(2, "Give back blows", "Stand behind person, lean them forward, give 5 sharp blows between shoulder blades."),
    step(3, "Perform abdominal thrusts", "Stand behind person, place hands below ribcage, give 5 quick upward thrusts."),
    warned_step(4, "Call emergency services", "If obstruction doesn't clear, call emergency immediately and continue alternating steps 2-3.", "For pregnant women or obese individuals, use chest thrusts instead"),
];

static CPR_STEPS: [EmergencyStep; 4] = [
    step(1, "Check responsiveness", "Tap shoulders and shout 'Are you okay?' Check for breathing for no more than 10 seconds."),
    step(2, "Call for help", "Call emergency services immediately. Ask someone to find an AED if available."),
    step(3, "Position hands", "Place heel of one hand on center of chest between nipples. Place other hand on top, interlace fingers."),
    step(4, "Perform compressions", "Push hard and fast at least 2 inches deep, 100-120 compressions per minute. Allow complete chest recoil."),
];

static FRACTURE_STEPS: [EmergencyStep; 4] = [
    step(1, "Don't move the person", "Keep the injured person still unless they are in immediate danger."),
    step(2, "Immobilize the area", "Support the injured area with splints or slings to prevent movement."),
    step(3, "Apply ice", "Apply ice wrapped in cloth for 15-20 minutes to reduce swelling."),
    step(4, "Seek medical attention", "Get immediate medical care. Do not give food or water."),
];

static FAINTING_STEPS: [EmergencyStep; 4] = [
    step(1, "Help them lie down", "If they feel faint, help them lie down. If they've fainted, check for injuries."),
    step(2, "Elevate legs", "Raise their legs 12 inches above heart level to improve blood flow to brain."),
    step(3, "Loosen clothing", "Loosen any tight clothing around neck or waist."),
    step(4, "Monitor and comfort", "Stay with them until they recover. If no improvement in 2 minutes, call emergency services."),
];

static FIRST_AID_TOPICS: [FirstAidTopic; 6] = [
    topic(
        "burns",
        "Burns",
        Severity::High,
        "Treatment for thermal, chemical, or electrical burns",
        &BURNS_STEPS,
    ),
    topic(
        "cuts",
        "Cuts & Bleeding",
        Severity::Medium,
        "How to stop bleeding and treat wounds",
        &CUTS_STEPS,
    ),
    topic(
        "choking",
        "Choking",
        Severity::High,
        "Emergency response for airway obstruction",
        &CHOKING_STEPS,
    ),
    topic(
        "cpr",
        "CPR",
        Severity::High,
        "Cardiopulmonary resuscitation for unresponsive person",
        &CPR_STEPS,
    ),
    topic(
        "fracture",
        "Fractures",
        Severity::Medium,
        "Initial care for suspected broken bones",
        &FRACTURE_STEPS,
    ),
    topic(
        "fainting",
        "Fainting",
        Severity::Low,
        "Care for someone who has fainted or feels faint",
        &FAINTING_STEPS,
    ),
];

static EMERGENCY_CONTACTS: [EmergencyContact; 2] = [
    EmergencyContact {
        region: "United States",
        number: "911",
        services: "Police, Fire, Medical",
    },
    EmergencyContact {
        region: "India",
        number: "108",
        services: "Emergency Medical Services",
    },
];

static MEDICATIONS: [MedicationDetails; 1] = [MedicationDetails {
    name: "Paracetamol",
    generic_name: "Acetaminophen",
    uses: &[
        "Pain relief (headaches, muscle aches, backaches)",
        "Fever reduction",
        "Arthritis pain relief",
        "Post-surgical pain management",
    ],
    dosage: "Adults: 500-1000mg every 4-6 hours. Maximum 4000mg per day",
    side_effects: &[
        "Nausea (rare)",
        "Skin rash (rare)",
        "Liver damage (with overdose)",
        "Allergic reactions (very rare)",
    ],
    warnings: &[
        "Do not exceed recommended dose",
        "Avoid alcohol while taking this medication",
        "Consult doctor if you have liver disease",
        "Not suitable for children under 3 months",
    ],
    interactions: &[
        "Warfarin (blood thinner)",
        "Alcohol (increases liver damage risk)",
        "Other acetaminophen-containing medications",
    ],
}];

pub fn first_aid_topics() -> &'static [FirstAidTopic] {
    &FIRST_AID_TOPICS
}

pub fn find_first_aid_topic(id: &str) -> Option<&'static FirstAidTopic> {
    let id = id.trim();
    FIRST_AID_TOPICS
        .iter()
        .find(|topic| topic.id.eq_ignore_ascii_case(id))
}

pub fn emergency_contacts() -> &'static [EmergencyContact] {
    &EMERGENCY_CONTACTS
}

/// Looks a medication up by brand or generic name.
pub fn find_medication(name: &str) -> Option<&'static MedicationDetails> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    MEDICATIONS.iter().find(|med| {
        med.name.eq_ignore_ascii_case(name) || med.generic_name.eq_ignore_ascii_case(name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_have_sequential_steps() {
        assert_eq!(first_aid_topics().len(), 6);
        for topic in first_aid_topics() {
            let numbers: Vec<u8> = topic.steps.iter().map(|s| s.step).collect();
            assert_eq!(numbers, vec![1, 2, 3, 4], "{}", topic.id);
            let json = serde_json::to_value(topic).unwrap();
            assert_eq!(json["severity_label"], topic.severity.label());
        }
    }

    #[test]
    fn topic_lookup_ignores_case() {
        let cpr = find_first_aid_topic("CPR").unwrap();
        assert_eq!(cpr.title, "CPR");
        assert_eq!(cpr.severity.label(), "Critical");
        assert!(find_first_aid_topic("snakebite").is_none());
    }

    #[test]
    fn medication_lookup_by_brand_or_generic_name() {
        assert_eq!(find_medication(" paracetamol ").unwrap().generic_name, "Acetaminophen");
        assert_eq!(find_medication("ACETAMINOPHEN").unwrap().name, "Paracetamol");
        assert!(find_medication("").is_none());
        assert!(find_medication("ibuprofen").is_none());
    }

    #[test]
    fn warnings_only_serialized_when_present() {
        let burns = serde_json::to_value(find_first_aid_topic("burns").unwrap()).unwrap();
        assert_eq!(burns["severity"], "high");
        assert_eq!(burns["severity_label"], "Critical");
        assert!(burns["steps"][0].get("warning").is_none());
        assert_eq!(burns["steps"][2]["warning"], "Do not break blisters or apply butter or oils");
    }
}
