use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::models::enums::Severity;

use super::helpers::normalize_key;
use super::types::AssistantError;

/// What a single reported symptom implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub conditions: Vec<String>,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}

/// Descriptive detail for a named condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRecord {
    pub description: String,
    /// Characteristic symptoms, informational only.
    pub symptoms: Vec<String>,
    pub treatment: String,
    pub when_to_see_doctor: String,
}

/// Symptom and condition tables used by the engine. Read-only once built.
#[derive(Debug, Clone)]
pub struct SymptomReferenceData {
    symptoms: HashMap<String, SymptomRecord>,
    conditions: HashMap<String, ConditionRecord>,
}

const SYMPTOM_FILE: &str = "symptom_database.json";
const CONDITION_FILE: &str = "condition_database.json";

static BUILTIN: LazyLock<Arc<SymptomReferenceData>> = LazyLock::new(|| {
    Arc::new(SymptomReferenceData {
        symptoms: BUILTIN_SYMPTOMS
            .iter()
            .map(|entry| {
                (
                    entry.key.to_string(),
                    SymptomRecord {
                        conditions: to_strings(entry.conditions),
                        severity: entry.severity,
                        recommendations: to_strings(entry.recommendations),
                    },
                )
            })
            .collect(),
        conditions: BUILTIN_CONDITIONS
            .iter()
            .map(|entry| {
                (
                    normalize_key(entry.name),
                    ConditionRecord {
                        description: entry.description.to_string(),
                        symptoms: to_strings(entry.symptoms),
                        treatment: entry.treatment.to_string(),
                        when_to_see_doctor: entry.when_to_see_doctor.to_string(),
                    },
                )
            })
            .collect(),
    })
});

impl SymptomReferenceData {
    /// The tables bundled with the app.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&*BUILTIN)
    }

    /// Build reference data from tables, normalizing condition keys and
    /// rejecting symptom keys that are not already normalized.
    pub fn from_tables(
        symptoms: HashMap<String, SymptomRecord>,
        conditions: HashMap<String, ConditionRecord>,
    ) -> Result<Self, AssistantError> {
        if symptoms.is_empty() {
            return Err(AssistantError::InvalidReferenceData(
                "symptom table is empty".into(),
            ));
        }
        if let Some(bad) = symptoms.keys().find(|key| normalize_key(key) != **key) {
            return Err(AssistantError::InvalidReferenceData(format!(
                "symptom key '{bad}' is not normalized (expected '{}')",
                normalize_key(bad)
            )));
        }

        let conditions = conditions
            .into_iter()
            .map(|(name, record)| (normalize_key(&name), record))
            .collect();

        Ok(Self {
            symptoms,
            conditions,
        })
    }

    /// Load reference data from JSON files in `resources_dir`.
    pub fn load(resources_dir: &Path) -> Result<Self, AssistantError> {
        let symptoms: HashMap<String, SymptomRecord> =
            read_json_table(&resources_dir.join(SYMPTOM_FILE), SYMPTOM_FILE)?;
        let conditions: HashMap<String, ConditionRecord> =
            read_json_table(&resources_dir.join(CONDITION_FILE), CONDITION_FILE)?;

        let data = Self::from_tables(symptoms, conditions)?;
        tracing::info!(
            symptoms = data.symptom_count(),
            conditions = data.condition_count(),
            dir = %resources_dir.display(),
            "Loaded symptom reference data"
        );
        Ok(data)
    }

    /// Whether both reference files exist in `resources_dir`.
    pub fn exists_in(resources_dir: &Path) -> bool {
        resources_dir.join(SYMPTOM_FILE).is_file() && resources_dir.join(CONDITION_FILE).is_file()
    }

    /// Look up a symptom by its normalized key.
    pub fn symptom(&self, key: &str) -> Option<&SymptomRecord> {
        self.symptoms.get(key)
    }

    /// Look up a condition by display or normalized name.
    pub fn condition(&self, name: &str) -> Option<&ConditionRecord> {
        self.conditions.get(&normalize_key(name))
    }

    /// All recognised symptom keys, sorted.
    pub fn symptom_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.symptoms.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }
}

fn read_json_table<T>(path: &Path, name: &str) -> Result<T, AssistantError>
where
    T: serde::de::DeserializeOwned,
{
    let json = std::fs::read_to_string(path).map_err(|e| {
        AssistantError::ReferenceDataLoad(path.display().to_string(), e.to_string())
    })?;
    serde_json::from_str(&json)
        .map_err(|e| AssistantError::ReferenceDataParse(name.into(), e.to_string()))
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Bundled tables
// ---------------------------------------------------------------------------

struct SymptomEntry {
    key: &'static str,
    severity: Severity,
    conditions: &'static [&'static str],
    recommendations: &'static [&'static str],
}

struct ConditionEntry {
    name: &'static str,
    description: &'static str,
    symptoms: &'static [&'static str],
    treatment: &'static str,
    when_to_see_doctor: &'static str,
}

const REST: &str = "Get plenty of rest";
const HYDRATE: &str = "Stay hydrated with water and clear fluids";
const PAIN_RELIEF: &str = "Consider over-the-counter pain relievers as directed";
const EMERGENCY: &str = "Seek emergency medical attention immediately";
const ORAL_REHYDRATION: &str = "Use oral rehydration solutions to replace lost fluids";
const ICE_OR_HEAT: &str = "Apply ice or heat to the affected area";
const LIMIT_CAFFEINE: &str = "Limit caffeine, especially later in the day";

static BUILTIN_SYMPTOMS: &[SymptomEntry] = &[
    SymptomEntry {
        key: "fever",
        severity: Severity::Moderate,
        conditions: &["common cold", "flu", "covid-19", "infection"],
        recommendations: &[
            REST,
            HYDRATE,
            "Take fever reducers like acetaminophen if needed",
            "Monitor your temperature regularly",
        ],
    },
    SymptomEntry {
        key: "headache",
        severity: Severity::Mild,
        conditions: &["tension headache", "migraine", "dehydration", "sinusitis"],
        recommendations: &[
            REST,
            HYDRATE,
            "Rest in a quiet, dark room",
            PAIN_RELIEF,
        ],
    },
    SymptomEntry {
        key: "severe_headache",
        severity: Severity::Severe,
        conditions: &["migraine", "stroke", "meningitis"],
        recommendations: &[
            EMERGENCY,
            "Note when the headache started and how quickly it worsened",
            "Do not take more pain medication than directed while waiting for care",
        ],
    },
    SymptomEntry {
        key: "cough",
        severity: Severity::Mild,
        conditions: &["common cold", "flu", "bronchitis", "allergies"],
        recommendations: &[
            HYDRATE,
            "Use honey to soothe your throat",
            "Use a humidifier",
            "Avoid smoke and other irritants",
        ],
    },
    SymptomEntry {
        key: "sore_throat",
        severity: Severity::Mild,
        conditions: &["common cold", "strep throat", "flu"],
        recommendations: &[
            "Gargle with warm salt water",
            "Drink warm liquids",
            "Use throat lozenges",
        ],
    },
    SymptomEntry {
        key: "runny_nose",
        severity: Severity::Mild,
        conditions: &["common cold", "allergies", "sinusitis"],
        recommendations: &[REST, HYDRATE, "Use a saline nasal spray"],
    },
    SymptomEntry {
        key: "chest_pain",
        severity: Severity::Severe,
        conditions: &["heart attack", "angina", "pneumonia", "anxiety"],
        recommendations: &[
            EMERGENCY,
            "Call emergency services if the pain is severe or spreads to your arm, jaw or back",
            "Do not drive yourself to the hospital",
            "Sit down and rest while waiting for help",
        ],
    },
    SymptomEntry {
        key: "shortness_of_breath",
        severity: Severity::Severe,
        conditions: &["asthma", "pneumonia", "heart failure", "anxiety"],
        recommendations: &[
            EMERGENCY,
            "Sit upright and try to stay calm",
            "Use your rescue inhaler if one has been prescribed",
        ],
    },
    SymptomEntry {
        key: "nausea",
        severity: Severity::Mild,
        conditions: &["food poisoning", "gastroenteritis", "migraine", "pregnancy"],
        recommendations: &[
            "Eat small, bland meals",
            "Sip clear fluids slowly",
            "Avoid strong odors",
        ],
    },
    SymptomEntry {
        key: "vomiting",
        severity: Severity::Moderate,
        conditions: &["food poisoning", "gastroenteritis", "flu"],
        recommendations: &[
            "Sip clear fluids slowly",
            ORAL_REHYDRATION,
            "Seek care if you cannot keep fluids down for 24 hours",
        ],
    },
    SymptomEntry {
        key: "diarrhea",
        severity: Severity::Moderate,
        conditions: &["food poisoning", "gastroenteritis", "irritable bowel syndrome"],
        recommendations: &[
            ORAL_REHYDRATION,
            "Avoid dairy and fatty foods",
            "Wash your hands frequently",
        ],
    },
    SymptomEntry {
        key: "abdominal_pain",
        severity: Severity::Moderate,
        conditions: &[
            "gastroenteritis",
            "appendicitis",
            "food poisoning",
            "irritable bowel syndrome",
        ],
        recommendations: &[
            "Avoid solid food for a few hours",
            "Apply a warm compress to your abdomen",
            "Seek care if the pain is severe or settles in the lower right side",
        ],
    },
    SymptomEntry {
        key: "fatigue",
        severity: Severity::Mild,
        conditions: &["anemia", "depression", "thyroid disorder", "flu"],
        recommendations: &[
            "Maintain a regular sleep schedule",
            "Eat a balanced diet",
            "Exercise moderately",
        ],
    },
    SymptomEntry {
        key: "dizziness",
        severity: Severity::Moderate,
        conditions: &["dehydration", "low blood pressure", "inner ear infection", "anemia"],
        recommendations: &[
            "Sit or lie down until it passes",
            HYDRATE,
            "Avoid sudden movements",
        ],
    },
    SymptomEntry {
        key: "confusion",
        severity: Severity::Severe,
        conditions: &["stroke", "dehydration", "infection"],
        recommendations: &[
            EMERGENCY,
            "Do not leave the person alone",
            "Note when the confusion started",
        ],
    },
    SymptomEntry {
        key: "numbness",
        severity: Severity::Severe,
        conditions: &["stroke", "nerve damage"],
        recommendations: &[
            EMERGENCY,
            "Check for face drooping, arm weakness or speech difficulty",
        ],
    },
    SymptomEntry {
        key: "rash",
        severity: Severity::Mild,
        conditions: &["allergies", "eczema", "contact dermatitis"],
        recommendations: &[
            "Avoid scratching",
            "Apply a cool compress",
            "Use a fragrance-free moisturizer",
        ],
    },
    SymptomEntry {
        key: "joint_pain",
        severity: Severity::Mild,
        conditions: &["arthritis", "injury", "flu"],
        recommendations: &["Rest the affected joint", ICE_OR_HEAT, PAIN_RELIEF],
    },
    SymptomEntry {
        key: "back_pain",
        severity: Severity::Mild,
        conditions: &["muscle strain", "herniated disc", "kidney infection"],
        recommendations: &[ICE_OR_HEAT, "Maintain good posture", "Do gentle stretching"],
    },
    SymptomEntry {
        key: "anxiety",
        severity: Severity::Mild,
        conditions: &["anxiety disorder", "depression"],
        recommendations: &[
            "Practice slow, deep breathing",
            LIMIT_CAFFEINE,
            "Talk to someone you trust",
        ],
    },
    SymptomEntry {
        key: "insomnia",
        severity: Severity::Mild,
        conditions: &["anxiety disorder", "depression", "sleep apnea"],
        recommendations: &[
            "Keep a consistent sleep schedule",
            "Avoid screens for an hour before bed",
            LIMIT_CAFFEINE,
        ],
    },
];

static BUILTIN_CONDITIONS: &[ConditionEntry] = &[
    ConditionEntry {
        name: "common cold",
        description: "A viral infection of the nose and throat",
        symptoms: &["runny_nose", "sore_throat", "cough", "fever"],
        treatment: "Rest, fluids and over-the-counter symptom relief",
        when_to_see_doctor: "If symptoms last more than 10 days or fever is above 38.5°C",
    },
    ConditionEntry {
        name: "flu",
        description: "A contagious respiratory illness caused by influenza viruses",
        symptoms: &["fever", "cough", "fatigue", "joint_pain"],
        treatment: "Rest, fluids, fever reducers; antivirals if prescribed early",
        when_to_see_doctor: "If you have difficulty breathing or belong to a high-risk group",
    },
    ConditionEntry {
        name: "covid-19",
        description: "A respiratory illness caused by the SARS-CoV-2 virus",
        symptoms: &["fever", "cough", "fatigue", "shortness_of_breath"],
        treatment: "Isolation, rest, fluids and symptom relief",
        when_to_see_doctor: "If breathing becomes difficult or symptoms worsen",
    },
    ConditionEntry {
        name: "migraine",
        description: "Recurring headaches, often with nausea and light sensitivity",
        symptoms: &["headache", "nausea"],
        treatment: "Rest in a dark room, pain relievers, prescribed migraine medication",
        when_to_see_doctor: "If headaches are frequent, sudden or unlike previous ones",
    },
    ConditionEntry {
        name: "tension headache",
        description: "A mild to moderate band-like headache often linked to stress",
        symptoms: &["headache"],
        treatment: "Rest, stress management and over-the-counter pain relievers",
        when_to_see_doctor: "If headaches occur more than twice a week",
    },
    ConditionEntry {
        name: "heart attack",
        description: "Blocked blood flow to part of the heart muscle",
        symptoms: &["chest_pain", "shortness_of_breath", "nausea"],
        treatment: "Emergency medical treatment",
        when_to_see_doctor: "Immediately: call emergency services",
    },
    ConditionEntry {
        name: "angina",
        description: "Chest pain caused by reduced blood flow to the heart",
        symptoms: &["chest_pain", "shortness_of_breath"],
        treatment: "Medication and lifestyle changes under medical supervision",
        when_to_see_doctor: "Promptly, and immediately if pain lasts more than a few minutes",
    },
    ConditionEntry {
        name: "pneumonia",
        description: "An infection that inflames the air sacs in the lungs",
        symptoms: &["cough", "fever", "shortness_of_breath", "chest_pain"],
        treatment: "Antibiotics or antivirals depending on the cause, rest and fluids",
        when_to_see_doctor: "As soon as possible, especially with breathing difficulty",
    },
    ConditionEntry {
        name: "asthma",
        description: "A chronic condition where the airways narrow and swell",
        symptoms: &["shortness_of_breath", "cough"],
        treatment: "Inhalers and avoiding known triggers",
        when_to_see_doctor: "If your rescue inhaler does not relieve symptoms",
    },
    ConditionEntry {
        name: "bronchitis",
        description: "Inflammation of the lining of the bronchial tubes",
        symptoms: &["cough", "fatigue"],
        treatment: "Rest, fluids and a humidifier",
        when_to_see_doctor: "If the cough lasts more than three weeks or you cough up blood",
    },
    ConditionEntry {
        name: "gastroenteritis",
        description: "Inflammation of the stomach and intestines, usually from infection",
        symptoms: &["nausea", "vomiting", "diarrhea", "abdominal_pain"],
        treatment: "Fluids, oral rehydration and a bland diet",
        when_to_see_doctor: "If you cannot keep fluids down or see signs of dehydration",
    },
    ConditionEntry {
        name: "food poisoning",
        description: "Illness from eating contaminated food",
        symptoms: &["nausea", "vomiting", "diarrhea", "abdominal_pain"],
        treatment: "Fluids and rest; most cases resolve within 48 hours",
        when_to_see_doctor: "If symptoms are severe or include bloody stools",
    },
    ConditionEntry {
        name: "appendicitis",
        description: "Inflammation of the appendix",
        symptoms: &["abdominal_pain", "nausea", "fever"],
        treatment: "Usually surgical removal of the appendix",
        when_to_see_doctor: "Immediately if abdominal pain is severe or worsening",
    },
    ConditionEntry {
        name: "stroke",
        description: "Interrupted blood supply to part of the brain",
        symptoms: &["numbness", "confusion", "severe_headache", "dizziness"],
        treatment: "Emergency medical treatment",
        when_to_see_doctor: "Immediately: call emergency services",
    },
    ConditionEntry {
        name: "dehydration",
        description: "The body loses more fluid than it takes in",
        symptoms: &["dizziness", "headache", "fatigue"],
        treatment: "Drink fluids and use oral rehydration solutions",
        when_to_see_doctor: "If you are confused, faint or unable to keep fluids down",
    },
    ConditionEntry {
        name: "allergies",
        description: "An immune reaction to a normally harmless substance",
        symptoms: &["runny_nose", "rash", "cough"],
        treatment: "Avoid triggers; antihistamines may help",
        when_to_see_doctor: "If you have swelling of the face or difficulty breathing",
    },
    ConditionEntry {
        name: "strep throat",
        description: "A bacterial infection of the throat",
        symptoms: &["sore_throat", "fever"],
        treatment: "Antibiotics prescribed by a doctor",
        when_to_see_doctor: "If a sore throat comes with fever and no cough",
    },
    ConditionEntry {
        name: "anemia",
        description: "A shortage of healthy red blood cells",
        symptoms: &["fatigue", "dizziness"],
        treatment: "Depends on the cause; often iron or vitamin supplements",
        when_to_see_doctor: "If fatigue is persistent or unexplained",
    },
    ConditionEntry {
        name: "anxiety disorder",
        description: "Persistent, excessive worry that interferes with daily life",
        symptoms: &["anxiety", "insomnia", "chest_pain"],
        treatment: "Therapy, relaxation techniques and sometimes medication",
        when_to_see_doctor: "If worry affects your work, relationships or sleep",
    },
    ConditionEntry {
        name: "arthritis",
        description: "Inflammation of one or more joints",
        symptoms: &["joint_pain"],
        treatment: "Exercise, weight management and pain relief",
        when_to_see_doctor: "If joint pain lasts more than a few days or joints are swollen",
    },
];
