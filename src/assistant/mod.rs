//! Symptom analysis and health scoring engine.
//!
//! Stateless and pure: reference tables are built once and never mutated,
//! so every call is independent and the engine may be shared across threads.

pub mod analysis;
pub mod engine;
pub mod helpers;
pub mod messages;
pub mod recommendations;
pub mod reference;
pub mod scoring;
pub mod types;

pub use analysis::analyze_symptoms;
pub use engine::DefaultHealthAssistant;
pub use helpers::{normalize_key, split_symptom_text};
pub use recommendations::get_health_recommendations;
pub use reference::{ConditionRecord, SymptomRecord, SymptomReferenceData};
pub use scoring::calculate_health_score;
pub use types::{Assessment, AssistantError, ConditionMatch, HealthAssistant, HealthScore, ScoreFactor};
