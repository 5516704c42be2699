//! Profile and lifestyle health score.
//!
//! Starts from `SCORE_MAX` and applies age, medical history, exercise and
//! sleep rules in that order. Each rule that fires adds one breakdown entry.
//! The final score is clamped to `[SCORE_MIN, SCORE_MAX]`.

use crate::config::{SCORE_MAX, SCORE_MIN};
use crate::models::enums::HealthStatus;
use crate::models::{HealthData, UserProfile};

use super::recommendations::get_health_recommendations;
use super::types::{HealthScore, ScoreFactor};

const SENIOR_AGE_PENALTY: i32 = -10;
const MIDLIFE_AGE_PENALTY: i32 = -5;
const PER_CONDITION_PENALTY: i32 = 5;
const MAX_HISTORY_PENALTY: i32 = 20;
const PER_SESSION_BONUS: f64 = 2.0;
const MAX_EXERCISE_BONUS: f64 = 10.0;
const OPTIMAL_SLEEP_BONUS: i32 = 5;
const NEAR_OPTIMAL_SLEEP_BONUS: i32 = 2;
const POOR_SLEEP_PENALTY: i32 = -3;

pub fn calculate_health_score(profile: &UserProfile, health_data: &HealthData) -> HealthScore {
    let breakdown: Vec<ScoreFactor> = [
        age_factor(profile),
        history_factor(profile),
        exercise_factor(health_data),
        sleep_factor(health_data),
    ]
    .into_iter()
    .flatten()
    .collect();

    let raw: i32 = SCORE_MAX + breakdown.iter().map(|f| f.impact).sum::<i32>();
    let score = raw.clamp(SCORE_MIN, SCORE_MAX);
    let status = HealthStatus::from_score(score);

    tracing::info!(
        score,
        raw,
        status = status.as_str(),
        factors = breakdown.len(),
        "Health score calculated"
    );

    HealthScore {
        score,
        status,
        breakdown,
        recommendations: get_health_recommendations(profile),
    }
}

/// Strictly over 65, else strictly over 40.
fn age_factor(profile: &UserProfile) -> Option<ScoreFactor> {
    let age = profile.age?;
    if age > 65 {
        Some(ScoreFactor::new(
            "Age",
            SENIOR_AGE_PENALTY,
            "Age over 65 increases certain health risks",
        ))
    } else if age > 40 {
        Some(ScoreFactor::new(
            "Age",
            MIDLIFE_AGE_PENALTY,
            "Age over 40 calls for more regular screenings",
        ))
    } else {
        None
    }
}

fn history_factor(profile: &UserProfile) -> Option<ScoreFactor> {
    let count = profile.medical_history.len();
    // min(len * 5, 20) without overflowing on absurd lengths
    let capped = count.min((MAX_HISTORY_PENALTY / PER_CONDITION_PENALTY) as usize) as i32;
    let deduction = capped * PER_CONDITION_PENALTY;
    if deduction == 0 {
        return None;
    }
    Some(ScoreFactor::new(
        "Medical History",
        -deduction,
        format!("{count} pre-existing condition(s) on record"),
    ))
}

/// Fires whenever the field is present, including a zero bonus. Only the
/// upper end is capped; a negative frequency yields a negative impact.
fn exercise_factor(health_data: &HealthData) -> Option<ScoreFactor> {
    let frequency = health_data.exercise_frequency?;
    let bonus = (frequency * PER_SESSION_BONUS)
        .min(MAX_EXERCISE_BONUS)
        .round() as i32;
    Some(ScoreFactor::new(
        "Exercise",
        bonus,
        format!("Exercises {frequency} time(s) per week"),
    ))
}

/// 7-9h is optimal; the bands 6-7h and 9-10h earn a smaller bonus;
/// anything else is penalised.
fn sleep_factor(health_data: &HealthData) -> Option<ScoreFactor> {
    let hours = health_data.sleep_hours?;
    let factor = if (7.0..=9.0).contains(&hours) {
        ScoreFactor::new(
            "Sleep",
            OPTIMAL_SLEEP_BONUS,
            format!("{hours} hours of sleep is within the optimal 7-9 hour range"),
        )
    } else if (6.0..=10.0).contains(&hours) {
        ScoreFactor::new(
            "Sleep",
            NEAR_OPTIMAL_SLEEP_BONUS,
            format!("{hours} hours of sleep is close to the optimal range"),
        )
    } else {
        ScoreFactor::new(
            "Sleep",
            POOR_SLEEP_PENALTY,
            format!("{hours} hours of sleep is outside the healthy range"),
        )
    };
    Some(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Gender;

    fn profile_json(json: &str) -> UserProfile {
        serde_json::from_str(json).unwrap()
    }

    fn data_json(json: &str) -> HealthData {
        serde_json::from_str(json).unwrap()
    }

    fn sleep_impact(hours: f64) -> i32 {
        let data = HealthData {
            exercise_frequency: None,
            sleep_hours: Some(hours),
        };
        calculate_health_score(&UserProfile::default(), &data).breakdown[0].impact
    }

    #[test]
    fn senior_with_three_conditions() {
        let profile =
            profile_json(r#"{"age": 70, "medicalHistory": ["diabetes","hypertension","asthma"]}"#);
        let result = calculate_health_score(&profile, &HealthData::default());
        assert_eq!(result.score, 75);
        assert_eq!(result.status, HealthStatus::Good);
        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.breakdown[0].factor, "Age");
        assert_eq!(result.breakdown[0].impact, -10);
        assert_eq!(result.breakdown[1].factor, "Medical History");
        assert_eq!(result.breakdown[1].impact, -15);
    }

    #[test]
    fn optimal_sleep_is_clamped_to_max() {
        let result = calculate_health_score(
            &profile_json(r#"{"age": 30}"#),
            &data_json(r#"{"sleepHours": "8"}"#),
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.status, HealthStatus::Excellent);
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].impact, 5);
    }

    #[test]
    fn age_thresholds_are_strict() {
        let at = |age: u32| {
            let profile = UserProfile {
                age: Some(age),
                ..UserProfile::default()
            };
            calculate_health_score(&profile, &HealthData::default())
        };
        assert_eq!(at(66).score, 90);
        assert_eq!(at(65).score, 95);
        assert_eq!(at(41).score, 95);
        assert_eq!(at(40).score, 100);
        assert!(at(40).breakdown.is_empty());
    }

    #[test]
    fn history_penalty_is_capped() {
        let profile = UserProfile {
            medical_history: (0..10).map(|i| format!("condition {i}")).collect(),
            ..UserProfile::default()
        };
        let result = calculate_health_score(&profile, &HealthData::default());
        assert_eq!(result.breakdown[0].impact, -20);
        assert_eq!(result.score, 80);
    }

    #[test]
    fn exercise_bonus_is_capped() {
        let profile = profile_json(r#"{"age": 70}"#);
        let result = calculate_health_score(&profile, &data_json(r#"{"exerciseFrequency": 7}"#));
        assert_eq!(result.breakdown[1].factor, "Exercise");
        assert_eq!(result.breakdown[1].impact, 10);
        assert_eq!(result.score, 100);

        let result = calculate_health_score(&profile, &data_json(r#"{"exerciseFrequency": 2}"#));
        assert_eq!(result.breakdown[1].impact, 4);
        assert_eq!(result.score, 94);
    }

    #[test]
    fn zero_exercise_still_recorded() {
        let result = calculate_health_score(
            &UserProfile::default(),
            &data_json(r#"{"exerciseFrequency": 0}"#),
        );
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].factor, "Exercise");
        assert_eq!(result.breakdown[0].impact, 0);
    }

    #[test]
    fn negative_exercise_reduces_score() {
        let result = calculate_health_score(
            &UserProfile::default(),
            &data_json(r#"{"exerciseFrequency": -4}"#),
        );
        assert_eq!(result.breakdown[0].factor, "Exercise");
        assert_eq!(result.breakdown[0].impact, -8);
        assert_eq!(result.score, 92);
    }

    #[test]
    fn status_serializes_capitalised() {
        let profile =
            profile_json(r#"{"age": 70, "medicalHistory": ["diabetes","hypertension","asthma"]}"#);
        let score = calculate_health_score(&profile, &HealthData::default());
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["status"], "Good");
        assert_eq!(json["score"], 75);
    }

    #[test]
    fn history_penalty_counts_every_entry() {
        let profile = profile_json(r#"{"medicalHistory": ["Hypertension", 7, null]}"#);
        let result = calculate_health_score(&profile, &HealthData::default());
        assert_eq!(result.breakdown[0].factor, "Medical History");
        assert_eq!(result.breakdown[0].impact, -15);
        assert_eq!(result.score, 85);
    }

    #[test]
    fn sleep_bands() {
        assert_eq!(sleep_impact(7.0), 5);
        assert_eq!(sleep_impact(9.0), 5);
        assert_eq!(sleep_impact(6.0), 2);
        assert_eq!(sleep_impact(6.5), 2);
        assert_eq!(sleep_impact(9.5), 2);
        assert_eq!(sleep_impact(10.0), 2);
        assert_eq!(sleep_impact(5.9), -3);
        assert_eq!(sleep_impact(4.0), -3);
        assert_eq!(sleep_impact(11.0), -3);
    }

    #[test]
    fn malformed_fields_do_not_fire() {
        let result = calculate_health_score(
            &profile_json(r#"{"age": "old", "medicalHistory": "asthma"}"#),
            &data_json(r#"{"sleepHours": "lots", "exerciseFrequency": "often"}"#),
        );
        assert_eq!(result.score, 100);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn recommendations_follow_profile() {
        let profile = UserProfile {
            age: Some(50),
            gender: Some(Gender::Female),
            medical_history: vec!["diabetes".into()],
        };
        let result = calculate_health_score(&profile, &HealthData::default());
        assert_eq!(result.recommendations, get_health_recommendations(&profile));
    }

    #[test]
    fn score_always_within_bounds() {
        let ages = [None, Some(0), Some(41), Some(66), Some(120)];
        let histories = [0usize, 1, 4, 50];
        let exercise = [None, Some(-1e9), Some(-4.0), Some(0.0), Some(3.0), Some(1e9)];
        let sleep = [None, Some(0.0), Some(6.5), Some(8.0), Some(24.0)];

        for age in ages {
            for history in histories {
                for ex in exercise {
                    for hours in sleep {
                        let profile = UserProfile {
                            age,
                            gender: None,
                            medical_history: vec!["x".to_string(); history],
                        };
                        let data = HealthData {
                            exercise_frequency: ex,
                            sleep_hours: hours,
                        };
                        let result = calculate_health_score(&profile, &data);
                        assert!((SCORE_MIN..=SCORE_MAX).contains(&result.score));
                        assert_eq!(result.status, HealthStatus::from_score(result.score));
                    }
                }
            }
        }
    }
}
