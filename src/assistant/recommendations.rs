use crate::models::enums::Gender;
use crate::models::UserProfile;

use super::messages::{
    ASTHMA_RECOMMENDATIONS, DIABETES_RECOMMENDATIONS, FEMALE_RECOMMENDATIONS,
    HYPERTENSION_RECOMMENDATIONS, LIFESTYLE_RECOMMENDATIONS, MALE_RECOMMENDATIONS,
    MIDLIFE_RECOMMENDATIONS, SENIOR_RECOMMENDATIONS, YOUNG_ADULT_RECOMMENDATIONS,
};

/// General recommendations for a profile.
///
/// Groups are appended in a fixed order (age bracket, gender, medical
/// history, lifestyle) and are not deduplicated. The lifestyle group is
/// always present.
pub fn get_health_recommendations(profile: &UserProfile) -> Vec<String> {
    let mut recommendations: Vec<&str> = Vec::new();

    if let Some(age) = profile.age {
        let bracket = match age {
            65.. => SENIOR_RECOMMENDATIONS,
            40..=64 => MIDLIFE_RECOMMENDATIONS,
            _ => YOUNG_ADULT_RECOMMENDATIONS,
        };
        recommendations.extend_from_slice(bracket);
    }

    match profile.gender {
        Some(Gender::Female) => recommendations.extend_from_slice(FEMALE_RECOMMENDATIONS),
        Some(Gender::Male) => recommendations.extend_from_slice(MALE_RECOMMENDATIONS),
        Some(Gender::Other) | None => {}
    }

    let history_groups = [
        ("diabetes", DIABETES_RECOMMENDATIONS),
        ("hypertension", HYPERTENSION_RECOMMENDATIONS),
        ("asthma", ASTHMA_RECOMMENDATIONS),
    ];
    for (condition, group) in history_groups {
        if profile.has_condition(condition) {
            recommendations.extend_from_slice(group);
        }
    }

    recommendations.extend_from_slice(LIFESTYLE_RECOMMENDATIONS);

    recommendations.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: Option<u32>, gender: Option<Gender>, history: &[&str]) -> UserProfile {
        UserProfile {
            age,
            gender,
            medical_history: history.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn strings(group: &[&str]) -> Vec<String> {
        group.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_profile_gets_lifestyle_only() {
        let recs = get_health_recommendations(&UserProfile::default());
        assert_eq!(recs, strings(LIFESTYLE_RECOMMENDATIONS));
    }

    #[test]
    fn age_brackets_are_exclusive() {
        let senior = get_health_recommendations(&profile(Some(65), None, &[]));
        assert_eq!(senior[0], SENIOR_RECOMMENDATIONS[0]);
        assert!(!senior.contains(&MIDLIFE_RECOMMENDATIONS[0].to_string()));

        let midlife_low = get_health_recommendations(&profile(Some(40), None, &[]));
        assert_eq!(midlife_low[0], MIDLIFE_RECOMMENDATIONS[0]);

        let midlife_high = get_health_recommendations(&profile(Some(64), None, &[]));
        assert_eq!(midlife_high[0], MIDLIFE_RECOMMENDATIONS[0]);

        let young = get_health_recommendations(&profile(Some(39), None, &[]));
        assert_eq!(young[0], YOUNG_ADULT_RECOMMENDATIONS[0]);
        assert_eq!(
            young.len(),
            YOUNG_ADULT_RECOMMENDATIONS.len() + LIFESTYLE_RECOMMENDATIONS.len()
        );
    }

    #[test]
    fn gender_groups() {
        let female = get_health_recommendations(&profile(None, Some(Gender::Female), &[]));
        assert_eq!(female[0], FEMALE_RECOMMENDATIONS[0]);

        let male = get_health_recommendations(&profile(None, Some(Gender::Male), &[]));
        assert_eq!(male[0], MALE_RECOMMENDATIONS[0]);

        let other = get_health_recommendations(&profile(None, Some(Gender::Other), &[]));
        assert_eq!(other, strings(LIFESTYLE_RECOMMENDATIONS));
    }

    #[test]
    fn history_groups_fire_independently_in_fixed_order() {
        let recs = get_health_recommendations(&profile(
            None,
            None,
            &["Asthma", "migraine", "diabetes"],
        ));
        let mut expected = strings(DIABETES_RECOMMENDATIONS);
        expected.extend(strings(ASTHMA_RECOMMENDATIONS));
        expected.extend(strings(LIFESTYLE_RECOMMENDATIONS));
        assert_eq!(recs, expected);
    }

    #[test]
    fn groups_concatenate_in_order() {
        let recs = get_health_recommendations(&profile(
            Some(70),
            Some(Gender::Male),
            &["hypertension"],
        ));
        let mut expected = strings(SENIOR_RECOMMENDATIONS);
        expected.extend(strings(MALE_RECOMMENDATIONS));
        expected.extend(strings(HYPERTENSION_RECOMMENDATIONS));
        expected.extend(strings(LIFESTYLE_RECOMMENDATIONS));
        assert_eq!(recs, expected);
    }
}
