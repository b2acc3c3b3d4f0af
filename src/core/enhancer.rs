use crate::models::{AdditionalFactors, Position, Profile};

/// Share of the base score retained in factor-weighted enhancement
const BASE_WEIGHT: f64 = 0.6;

/// Factor-weighted enhancement of a base similarity score.
///
/// Formula:
/// `base * 0.6 + exp_bonus * w_exp + loc_bonus * w_loc + skill_bonus * w_skills`
/// where `exp_bonus = min(years * 2, 20)`, `loc_bonus = 5` when a location is
/// present, and `skill_bonus = min(skills * 1.5, 15)`.
///
/// The result is clamped to [0, 100] regardless of weight magnitudes.
pub fn enhance_with_factors(base_score: f64, factors: &AdditionalFactors) -> f64 {
    let experience_bonus = experience_bonus(factors.experience_years);
    let location_bonus = location_bonus(factors.location.as_deref());
    let skills_bonus = skills_bonus(factors.skills.len());

    let enhanced = base_score * BASE_WEIGHT
        + experience_bonus * factors.experience_weight
        + location_bonus * factors.location_weight
        + skills_bonus * factors.skills_weight;

    enhanced.clamp(0.0, 100.0)
}

fn experience_bonus(years: u32) -> f64 {
    (years as f64 * 2.0).min(20.0)
}

fn location_bonus(location: Option<&str>) -> f64 {
    match location {
        Some(loc) if !loc.trim().is_empty() => 5.0,
        _ => 0.0,
    }
}

fn skills_bonus(skill_count: usize) -> f64 {
    (skill_count as f64 * 1.5).min(15.0)
}

/// Position-fit enhancement used for recommendations.
///
/// Starting from the base score:
/// - +5 if the profile's experience meets the requirement
/// - -10 if it falls more than 2 years short
/// - +3 if both education levels are present and the profile's seniority is
///   at least the required seniority
/// - +2 for the same country, plus a further +3 for the same city
///
/// The adjusted score is clamped to [0, 100].
pub fn position_fit(base_score: f64, profile: &Profile, position: &Position) -> f64 {
    let mut adjusted = base_score;

    let experience = profile.experience_years as i64;
    let required = position.experience_required as i64;
    if experience >= required {
        adjusted += 5.0;
    } else if experience < required - 2 {
        adjusted -= 10.0;
    }

    if let (Some(education), Some(required_education)) =
        (profile.education, position.education_required)
    {
        if education.seniority() >= required_education.seniority() {
            adjusted += 3.0;
        }
    }

    if same_location(&profile.country, &position.country) {
        adjusted += 2.0;
        if same_location(&profile.city, &position.city) {
            adjusted += 3.0;
        }
    }

    adjusted.clamp(0.0, 100.0)
}

fn same_location(a: &str, b: &str) -> bool {
    !a.trim().is_empty() && a.eq_ignore_ascii_case(b)
}
