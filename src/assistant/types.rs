use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::{AssessmentSeverity, HealthStatus};
use crate::models::{HealthData, UserProfile};

use super::reference::ConditionRecord;

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// Structured output of one symptom analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Patient-facing summary, chosen by severity tier.
    pub message: String,
    pub severity: AssessmentSeverity,
    /// At most three conditions, most frequently matched first.
    pub conditions: Vec<ConditionMatch>,
    /// Deduplicated advice in first-seen order.
    pub recommendations: Vec<String>,
    pub disclaimer: String,
}

/// A condition implicated by the reported symptoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub name: String,
    /// Number of reported symptoms that list this condition.
    pub matches: u32,
    /// Reference detail, absent when the condition has no entry.
    #[serde(flatten)]
    pub details: Option<ConditionRecord>,
}

// ---------------------------------------------------------------------------
// HealthScore
// ---------------------------------------------------------------------------

/// Structured output of the profile/lifestyle scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Always within `[SCORE_MIN, SCORE_MAX]`.
    pub score: i32,
    pub status: HealthStatus,
    /// One entry per rule that fired, in evaluation order.
    pub breakdown: Vec<ScoreFactor>,
    pub recommendations: Vec<String>,
}

/// One rule's labeled contribution to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub factor: String,
    pub impact: i32,
    pub reason: String,
}

impl ScoreFactor {
    pub fn new(factor: &str, impact: i32, reason: impl Into<String>) -> Self {
        Self {
            factor: factor.to_string(),
            impact,
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AssistantError
// ---------------------------------------------------------------------------

/// Failures are confined to loading and validating reference data; analysis
/// and scoring themselves are total.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

// ---------------------------------------------------------------------------
// HealthAssistant trait
// ---------------------------------------------------------------------------

/// The symptom analysis and health scoring engine.
pub trait HealthAssistant {
    /// Analyze symptoms the caller has already split and trimmed.
    fn analyze_symptoms(&self, symptoms: &[String]) -> Assessment;

    /// Score a profile with optional lifestyle metrics.
    fn calculate_health_score(&self, profile: &UserProfile, health_data: &HealthData)
        -> HealthScore;

    /// General recommendations for a profile.
    fn get_health_recommendations(&self, profile: &UserProfile) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::reference::ConditionRecord;
    use crate::models::enums::AssessmentSeverity;

    #[test]
    fn condition_match_flattens_details() {
        let with_details = ConditionMatch {
            name: "migraine".into(),
            matches: 2,
            details: Some(ConditionRecord {
                description: "Recurring headaches".into(),
                symptoms: vec!["headache".into()],
                treatment: "Rest".into(),
                when_to_see_doctor: "If severe".into(),
            }),
        };
        let json = serde_json::to_value(&with_details).unwrap();
        assert_eq!(json["name"], "migraine");
        assert_eq!(json["matches"], 2);
        assert_eq!(json["description"], "Recurring headaches");
        assert_eq!(json["when_to_see_doctor"], "If severe");

        let bare = ConditionMatch {
            name: "flu".into(),
            matches: 1,
            details: None,
        };
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn assessment_serializes_severity_lowercase() {
        let assessment = Assessment {
            message: "m".into(),
            severity: AssessmentSeverity::Unknown,
            conditions: vec![],
            recommendations: vec![],
            disclaimer: "d".into(),
        };
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["severity"], "unknown");
    }
}
