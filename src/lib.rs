//! # Healthmate
//!
//! Symptom analysis and health scoring for the Healthmate mobile app.
//!
//! - `assistant`: rule-based symptom → condition matching and the
//!   profile/lifestyle health score
//! - `models`: input profiles and shared enums
//! - `config`: constants and reference-data location
//!
//! UI screens call the functions below with symptoms already split from
//! free text and with profiles read from their own storage; results are
//! plain serde value types.

pub mod assistant;
pub mod config;
pub mod models;

use tracing_subscriber::EnvFilter;

pub use assistant::{
    calculate_health_score, get_health_recommendations, split_symptom_text, Assessment,
    AssistantError, ConditionMatch, DefaultHealthAssistant, HealthAssistant, HealthScore,
    ScoreFactor, SymptomReferenceData,
};
pub use models::{AssessmentSeverity, Gender, HealthData, HealthStatus, Severity, UserProfile};

/// Analyze symptoms against the bundled reference tables.
pub fn analyze_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Assessment {
    assistant::analyze_symptoms(symptoms, &SymptomReferenceData::builtin())
}

/// Install the fmt subscriber, honouring `RUST_LOG`. Safe to call more than
/// once; later calls are ignored.
pub fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();

    if result.is_ok() {
        tracing::info!("{} engine v{} ready", config::APP_NAME, config::APP_VERSION);
    }
}
