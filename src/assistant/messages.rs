/// Fixed patient-facing text for assessments and health scores.
/// Calm, non-diagnostic framing; every assessment carries the disclaimer.
pub struct MessageTemplates;

pub const DISCLAIMER: &str = "This assessment is for informational purposes only and is \
     not a substitute for professional medical advice, diagnosis, or treatment. \
     Always consult a qualified healthcare provider about any medical concerns.";

impl MessageTemplates {
    /// Empty input: ask the patient to describe what they feel.
    pub fn describe_symptoms() -> String {
        "Please describe your symptoms so I can help assess your condition.".to_string()
    }

    /// Generic prompt returned as the sole recommendation for empty input.
    pub fn describe_symptoms_prompt() -> String {
        "List each symptom you are experiencing, separated by commas \
         (for example: fever, headache, sore throat)."
            .to_string()
    }

    /// Symptoms were given but none could be recognised.
    pub fn unrecognised_symptoms() -> String {
        "I couldn't recognise the symptoms you described. Try simpler terms \
         such as \"fever\" or \"chest pain\", or consult a healthcare provider."
            .to_string()
    }

    pub fn severe() -> String {
        "Your symptoms may require immediate medical attention. \
         Please contact a healthcare provider or emergency services right away."
            .to_string()
    }

    pub fn moderate() -> String {
        "Your symptoms suggest a condition that should be evaluated by a \
         healthcare provider. Consider scheduling a consultation soon."
            .to_string()
    }

    pub fn mild() -> String {
        "Your symptoms appear mild and can usually be managed with self-care. \
         Monitor how you feel and consult a doctor if they persist or worsen."
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Profile recommendation groups
// ---------------------------------------------------------------------------

pub const SENIOR_RECOMMENDATIONS: &[&str] = &[
    "Schedule an annual comprehensive health check-up",
    "Stay active with low-impact exercise such as walking or swimming",
    "Review your medications regularly with your doctor",
];

pub const MIDLIFE_RECOMMENDATIONS: &[&str] = &[
    "Get regular screenings for blood pressure, cholesterol and blood sugar",
    "Aim for at least 150 minutes of moderate exercise per week",
    "Maintain a healthy weight",
];

pub const YOUNG_ADULT_RECOMMENDATIONS: &[&str] = &[
    "Build healthy habits early: regular exercise and a balanced diet",
    "Get a routine check-up every one to two years",
];

pub const FEMALE_RECOMMENDATIONS: &[&str] = &[
    "Schedule regular breast cancer screenings as advised",
    "Keep up with cervical cancer screening (Pap smear)",
    "Ensure adequate calcium and vitamin D intake for bone health",
];

pub const MALE_RECOMMENDATIONS: &[&str] = &[
    "Discuss prostate health screening with your doctor",
    "Monitor your heart health with regular check-ups",
];

pub const DIABETES_RECOMMENDATIONS: &[&str] = &[
    "Monitor your blood sugar levels regularly",
    "Follow a balanced, low-sugar diet",
    "Have an annual eye and foot examination",
];

pub const HYPERTENSION_RECOMMENDATIONS: &[&str] = &[
    "Check your blood pressure regularly",
    "Reduce your salt intake",
    "Take blood pressure medication as prescribed",
];

pub const ASTHMA_RECOMMENDATIONS: &[&str] = &[
    "Always carry your rescue inhaler",
    "Avoid known asthma triggers such as smoke and allergens",
];

/// Appended to every profile's recommendations.
pub const LIFESTYLE_RECOMMENDATIONS: &[&str] = &[
    "Drink at least 8 glasses of water daily",
    "Get 7-9 hours of sleep each night",
    "Eat plenty of fruits and vegetables",
    "Limit processed foods and sugar",
    "Manage stress through relaxation techniques",
    "Avoid smoking and limit alcohol consumption",
];
