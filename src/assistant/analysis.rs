//! Symptom analysis: normalize reported symptoms, look them up, and fold the
//! matches into one assessment.
//!
//! Aggregation rules:
//! - severity is the maximum over matched symptoms;
//! - recommendations are concatenated in input order, then deduplicated;
//! - each matched symptom adds one to every condition it lists; the three
//!   most frequent conditions are reported, ties in first-seen order.

use crate::config::MAX_RANKED_CONDITIONS;
use crate::models::enums::{AssessmentSeverity, Severity};

use super::helpers::{dedup_preserving_order, normalize_key};
use super::messages::{MessageTemplates, DISCLAIMER};
use super::reference::SymptomReferenceData;
use super::types::{Assessment, ConditionMatch};

/// Analyze symptoms that the caller has already split and trimmed.
/// Unrecognised symptoms are skipped.
pub fn analyze_symptoms<S>(symptoms: &[S], reference: &SymptomReferenceData) -> Assessment
where
    S: AsRef<str>,
{
    if symptoms.is_empty() {
        return Assessment {
            message: MessageTemplates::describe_symptoms(),
            severity: AssessmentSeverity::Unknown,
            conditions: Vec::new(),
            recommendations: vec![MessageTemplates::describe_symptoms_prompt()],
            disclaimer: DISCLAIMER.to_string(),
        };
    }

    let mut severity: Option<Severity> = None;
    let mut recommendations = Vec::new();
    // Insertion ordered so that ties rank deterministically.
    let mut condition_counts: Vec<(&str, u32)> = Vec::new();
    let mut matched = 0usize;

    for raw in symptoms {
        let key = normalize_key(raw.as_ref());
        let Some(record) = reference.symptom(&key) else {
            tracing::debug!(symptom = %key, "Unrecognised symptom skipped");
            continue;
        };
        matched += 1;

        severity = Some(severity.map_or(record.severity, |s| s.max(record.severity)));
        recommendations.extend(record.recommendations.iter().cloned());

        for condition in &record.conditions {
            match condition_counts
                .iter_mut()
                .find(|(name, _)| *name == condition.as_str())
            {
                Some((_, count)) => *count += 1,
                None => condition_counts.push((condition.as_str(), 1)),
            }
        }
    }

    // Stable: equal counts keep first-seen order.
    condition_counts.sort_by(|a, b| b.1.cmp(&a.1));

    let conditions: Vec<ConditionMatch> = condition_counts
        .into_iter()
        .take(MAX_RANKED_CONDITIONS)
        .map(|(name, matches)| ConditionMatch {
            name: name.to_string(),
            matches,
            details: reference.condition(name).cloned(),
        })
        .collect();

    let severity = severity.map_or(AssessmentSeverity::Unknown, AssessmentSeverity::from);
    let message = match severity {
        AssessmentSeverity::Severe => MessageTemplates::severe(),
        AssessmentSeverity::Moderate => MessageTemplates::moderate(),
        AssessmentSeverity::Mild => MessageTemplates::mild(),
        AssessmentSeverity::Unknown => MessageTemplates::unrecognised_symptoms(),
    };

    tracing::info!(
        reported = symptoms.len(),
        matched,
        severity = severity.as_str(),
        conditions = conditions.len(),
        "Symptom analysis complete"
    );

    Assessment {
        message,
        severity,
        conditions,
        recommendations: dedup_preserving_order(recommendations),
        disclaimer: DISCLAIMER.to_string(),
    }
}
