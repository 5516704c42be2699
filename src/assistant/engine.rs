use std::path::Path;
use std::sync::Arc;

use crate::config;
use crate::models::{HealthData, UserProfile};

use super::analysis::analyze_symptoms;
use super::recommendations::get_health_recommendations;
use super::reference::{ConditionRecord, SymptomReferenceData};
use super::scoring::calculate_health_score;
use super::types::{Assessment, AssistantError, HealthAssistant, HealthScore};

/// Default implementation of the health assistant, bound to one set of
/// reference tables. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct DefaultHealthAssistant {
    pub(crate) reference: Arc<SymptomReferenceData>,
}

impl Default for DefaultHealthAssistant {
    fn default() -> Self {
        Self::new(SymptomReferenceData::builtin())
    }
}

impl DefaultHealthAssistant {
    pub fn new(reference: Arc<SymptomReferenceData>) -> Self {
        Self { reference }
    }

    /// Engine over reference data loaded from `resources_dir`.
    pub fn from_dir(resources_dir: &Path) -> Result<Self, AssistantError> {
        let reference = SymptomReferenceData::load(resources_dir)?;
        Ok(Self::new(Arc::new(reference)))
    }

    /// Use custom reference data from the app data directory when present,
    /// falling back to the bundled tables.
    pub fn from_default_location() -> Self {
        Self::from_location(config::reference_data_dir().as_deref())
    }

    /// Custom reference data from `dir` when both files are there and load
    /// cleanly, otherwise the bundled tables.
    pub fn from_location(dir: Option<&Path>) -> Self {
        let Some(dir) = dir else {
            return Self::default();
        };
        if !SymptomReferenceData::exists_in(dir) {
            return Self::default();
        }
        match Self::from_dir(dir) {
            Ok(engine) => engine,
            Err(e) => {
                tracing::warn!(
                    dir = %dir.display(),
                    error = %e,
                    "Custom reference data unusable, using bundled tables"
                );
                Self::default()
            }
        }
    }

    /// Detail for a condition, by display or normalized name.
    pub fn condition_details(&self, name: &str) -> Option<&ConditionRecord> {
        self.reference.condition(name)
    }

    /// Recognised symptom keys, sorted, for input suggestions.
    pub fn known_symptoms(&self) -> Vec<&str> {
        self.reference.symptom_keys()
    }
}

impl HealthAssistant for DefaultHealthAssistant {
    fn analyze_symptoms(&self, symptoms: &[String]) -> Assessment {
        analyze_symptoms(symptoms, &self.reference)
    }

    fn calculate_health_score(
        &self,
        profile: &UserProfile,
        health_data: &HealthData,
    ) -> HealthScore {
        calculate_health_score(profile, health_data)
    }

    fn get_health_recommendations(&self, profile: &UserProfile) -> Vec<String> {
        get_health_recommendations(profile)
    }
}
