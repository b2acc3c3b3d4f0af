use std::cmp::Ordering;

use tokio::task::JoinSet;

use crate::core::enhancer::position_fit;
use crate::models::{Position, PositionStatus, Profile, RecommendationItem};
use crate::services::SimilarityClient;

/// Ranks open positions for a candidate profile.
///
/// Each position is scored against the profile's CV text (concurrently, one
/// task per position), adjusted with the position-fit enhancement, filtered
/// by the minimum recommendation score, sorted descending and truncated.
/// A failed scoring task drops only that position from the shortlist.
#[derive(Clone)]
pub struct RecommendationRanker {
    client: SimilarityClient,
    min_score: f64,
    max_results: usize,
}

impl RecommendationRanker {
    pub fn new(client: SimilarityClient, min_score: f64, max_results: usize) -> Self {
        Self {
            client,
            min_score,
            max_results,
        }
    }

    /// Rank all active positions for a profile
    pub async fn rank(&self, profile: &Profile, positions: &[Position]) -> Vec<RecommendationItem> {
        tracing::info!("Ranking {} positions for recommendation", positions.len());
        self.rank_candidates(profile, self.active(positions, |_| true))
            .await
    }

    /// Rank active positions in a given country
    pub async fn rank_by_country(
        &self,
        profile: &Profile,
        positions: &[Position],
        country: &str,
    ) -> Vec<RecommendationItem> {
        tracing::info!("Ranking positions in country: {}", country);
        self.rank_candidates(
            profile,
            self.active(positions, |p| p.country.eq_ignore_ascii_case(country)),
        )
        .await
    }

    /// Rank active positions in a given country and city
    pub async fn rank_by_location(
        &self,
        profile: &Profile,
        positions: &[Position],
        country: &str,
        city: &str,
    ) -> Vec<RecommendationItem> {
        tracing::info!("Ranking positions in {} - {}", country, city);
        self.rank_candidates(
            profile,
            self.active(positions, |p| {
                p.country.eq_ignore_ascii_case(country) && p.city.eq_ignore_ascii_case(city)
            }),
        )
        .await
    }

    /// Rank active positions attached to a target branch
    pub async fn rank_by_branch(
        &self,
        profile: &Profile,
        positions: &[Position],
        branch_id: u64,
    ) -> Vec<RecommendationItem> {
        tracing::info!("Ranking positions for branch: {}", branch_id);
        self.rank_candidates(profile, self.active(positions, |p| p.branch_id == branch_id))
            .await
    }

    fn active<F>(&self, positions: &[Position], filter: F) -> Vec<Position>
    where
        F: Fn(&Position) -> bool,
    {
        positions
            .iter()
            .filter(|p| p.status == PositionStatus::Active && filter(p))
            .cloned()
            .collect()
    }

    /// Shared rank / filter / sort / truncate pipeline for all variants
    async fn rank_candidates(
        &self,
        profile: &Profile,
        candidates: Vec<Position>,
    ) -> Vec<RecommendationItem> {
        let total = candidates.len();
        let mut tasks = JoinSet::new();

        for (index, position) in candidates.into_iter().enumerate() {
            let client = self.client.clone();
            let profile = profile.clone();
            tasks.spawn(async move {
                let base = client.score(&profile.cv_text, &position.job_text()).await;
                let adjusted = position_fit(base.score, &profile, &position);
                (index, build_item(adjusted, &profile, position))
            });
        }

        // Re-assemble in input order so equal scores keep their original
        // relative order through the stable sort below.
        let mut slots: Vec<Option<RecommendationItem>> = (0..total).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, item)) => slots[index] = Some(item),
                Err(e) => tracing::error!("Recommendation scoring task failed: {}", e),
            }
        }

        let mut items: Vec<RecommendationItem> = slots
            .into_iter()
            .flatten()
            .filter(|item| item.match_score >= self.min_score)
            .collect();

        items.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });
        items.truncate(self.max_results);

        tracing::debug!("Kept {} of {} analyzed positions", items.len(), total);
        items
    }
}

fn build_item(adjusted_score: f64, profile: &Profile, position: Position) -> RecommendationItem {
    let match_reason = generate_match_reason(adjusted_score, profile, &position);
    let salary_range = format_salary_range(position.salary_min, position.salary_max);

    RecommendationItem {
        position_id: position.id,
        position_title: position.title,
        department: position.department,
        target_branch: position.branch_name,
        country: position.country,
        city: position.city,
        match_score: adjusted_score,
        match_reason,
        contract_type: position.contract_type,
        experience_required: position.experience_required,
        salary_range,
    }
}

/// Human-readable explanation of a recommendation, built from the score band
/// plus qualifying clauses.
pub fn generate_match_reason(score: f64, profile: &Profile, position: &Position) -> String {
    let mut reason = String::new();

    if score >= 80.0 {
        reason.push_str("Excellent match - ");
    } else if score >= 70.0 {
        reason.push_str("Good match - ");
    } else {
        reason.push_str("Partial match - ");
    }

    if profile.experience_years >= position.experience_required {
        reason.push_str("Sufficient experience. ");
    }

    if !position.country.trim().is_empty()
        && position.country.eq_ignore_ascii_case(&profile.country)
    {
        reason.push_str("Same location. ");
    }

    reason.trim().to_string()
}

/// Format an optional salary range for display
pub fn format_salary_range(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (None, None) => "Not specified".to_string(),
        (None, Some(max)) => format!("Up to {}€", max),
        (Some(min), None) => format!("From {}€", min),
        (Some(min), Some(max)) => format!("{}€ - {}€", min, max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractType, MobilityType};

    fn profile(experience_years: u32) -> Profile {
        Profile {
            cv_text: "java spring docker".to_string(),
            experience_years,
            education: None,
            country: "France".to_string(),
            city: "Paris".to_string(),
            skills: vec![],
        }
    }

    fn position(experience_required: u32, country: &str) -> Position {
        Position {
            id: 1,
            title: "Engineer".to_string(),
            department: "Engineering".to_string(),
            description: "desc".to_string(),
            requirements: "reqs".to_string(),
            salary_min: None,
            salary_max: None,
            contract_type: ContractType::Permanent,
            experience_required,
            education_required: None,
            status: PositionStatus::Active,
            mobility_type: MobilityType::Internal,
            branch_id: 1,
            branch_name: "HQ".to_string(),
            country: country.to_string(),
            city: "Berlin".to_string(),
        }
    }

    #[test]
    fn test_match_reason_bands() {
        let p = profile(0);
        let pos = position(5, "Germany");

        assert!(generate_match_reason(85.0, &p, &pos).starts_with("Excellent match"));
        assert!(generate_match_reason(72.0, &p, &pos).starts_with("Good match"));
        assert!(generate_match_reason(50.0, &p, &pos).starts_with("Partial match"));
    }

    #[test]
    fn test_match_reason_qualifying_clauses() {
        let p = profile(6);
        let pos = position(5, "france");

        let reason = generate_match_reason(85.0, &p, &pos);
        assert!(reason.contains("Sufficient experience."));
        assert!(reason.contains("Same location."));
        // Trailing whitespace is trimmed
        assert_eq!(reason, reason.trim());
    }

    #[test]
    fn test_salary_range_formats() {
        assert_eq!(format_salary_range(None, None), "Not specified");
        assert_eq!(format_salary_range(None, Some(45000.0)), "Up to 45000€");
        assert_eq!(format_salary_range(Some(30000.0), None), "From 30000€");
        assert_eq!(
            format_salary_range(Some(30000.0), Some(45000.0)),
            "30000€ - 45000€"
        );
    }
}
