use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Position, Profile};

/// Weighted bonus factors for enhanced scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalFactors {
    #[serde(rename = "experience_years")]
    pub experience_years: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "experience_weight")]
    pub experience_weight: f64,
    #[serde(rename = "location_weight")]
    pub location_weight: f64,
    #[serde(rename = "skills_weight")]
    pub skills_weight: f64,
}

/// Similarity scoring request.
///
/// Doubles as the wire payload sent to the scoring backend's
/// `POST /similarity` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimilarityRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "candidate_text")]
    pub candidate_text: String,
    #[validate(length(min = 1))]
    #[serde(rename = "job_text")]
    pub job_text: String,
    #[serde(rename = "additional_factors", skip_serializing_if = "Option::is_none")]
    pub additional_factors: Option<AdditionalFactors>,
}

/// Request to score one candidate against many job texts
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BatchScoreRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "candidateText")]
    pub candidate_text: String,
    #[serde(rename = "jobTexts")]
    pub job_texts: Vec<String>,
}

/// Request for the best candidates for one job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopCandidatesRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "jobText")]
    pub job_text: String,
    #[serde(rename = "candidateTexts")]
    pub candidate_texts: Vec<String>,
    #[serde(rename = "topN", default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    5
}

/// Request for the jobs best matching one CV
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchingJobsRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "candidateText")]
    pub candidate_text: String,
    #[serde(rename = "jobTexts")]
    pub job_texts: Vec<String>,
    #[serde(rename = "minScore", default)]
    pub min_score: f64,
}

/// Request to rank positions for a profile.
///
/// The optional country / city / branch fields restrict the candidate
/// position set before scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub profile: Profile,
    pub positions: Vec<Position>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(rename = "branchId", default)]
    pub branch_id: Option<u64>,
}
