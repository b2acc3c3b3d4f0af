use serde::{Deserialize, Serialize};

/// Candidate profile used as scoring input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "cvText")]
    pub cv_text: String,
    #[serde(rename = "experienceYears")]
    pub experience_years: u32,
    #[serde(default)]
    pub education: Option<EducationLevel>,
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Open job position used as scoring input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub id: u64,
    pub title: String,
    pub department: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(rename = "salaryMin", default)]
    pub salary_min: Option<f64>,
    #[serde(rename = "salaryMax", default)]
    pub salary_max: Option<f64>,
    #[serde(rename = "contractType")]
    pub contract_type: ContractType,
    #[serde(rename = "experienceRequired")]
    pub experience_required: u32,
    #[serde(rename = "educationRequired", default)]
    pub education_required: Option<EducationLevel>,
    #[serde(default = "default_status")]
    pub status: PositionStatus,
    #[serde(rename = "mobilityType")]
    pub mobility_type: MobilityType,
    #[serde(rename = "branchId")]
    pub branch_id: u64,
    #[serde(rename = "branchName")]
    pub branch_name: String,
    pub country: String,
    pub city: String,
}

fn default_status() -> PositionStatus {
    PositionStatus::Active
}

impl Position {
    /// Concatenated description + requirements used as the job-side text.
    /// Both parts are trimmed and joined by a single space.
    pub fn job_text(&self) -> String {
        let description = self.description.trim();
        let requirements = self.requirements.trim();

        match (description.is_empty(), requirements.is_empty()) {
            (false, false) => format!("{} {}", description, requirements),
            (false, true) => description.to_string(),
            (true, false) => requirements.to_string(),
            (true, true) => String::new(),
        }
    }
}

/// Education level with an explicit seniority table.
///
/// Comparisons must go through `seniority()` rather than the enum's
/// declaration order, so reordering variants can never change ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    HighSchool,
    Bachelor,
    Master,
    Doctorate,
}

impl EducationLevel {
    /// Numeric seniority ranking, independent of declaration order.
    pub fn seniority(self) -> u8 {
        match self {
            EducationLevel::HighSchool => 1,
            EducationLevel::Bachelor => 2,
            EducationLevel::Master => 3,
            EducationLevel::Doctorate => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Permanent,
    FixedTerm,
    Internship,
    Freelance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    Active,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MobilityType {
    Internal,
    External,
}

/// Provenance of a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    Remote,
    Fallback,
    Enhanced,
    Error,
}

/// Outcome of a single scoring call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    #[serde(rename = "processingTimeMs")]
    pub processing_time_ms: u64,
    pub status: String,
    pub mode: ScoreMode,
    #[serde(rename = "correlationId", default)]
    pub correlation_id: Option<String>,
}

impl MatchResult {
    pub fn remote(score: f64, processing_time_ms: u64, status: String) -> Self {
        Self {
            score: score.clamp(0.0, 100.0),
            processing_time_ms,
            status,
            mode: ScoreMode::Remote,
            correlation_id: None,
        }
    }

    pub fn fallback(score: f64) -> Self {
        Self {
            score: score.clamp(0.0, 100.0),
            processing_time_ms: 0,
            status: "fallback".to_string(),
            mode: ScoreMode::Fallback,
            correlation_id: None,
        }
    }

    pub fn error(status: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            processing_time_ms: 0,
            status: status.into(),
            mode: ScoreMode::Error,
            correlation_id: None,
        }
    }

    pub fn with_correlation(mut self, id: String) -> Self {
        self.correlation_id = Some(id);
        self
    }
}

/// Ranked, explained recommendation produced from a scored position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationItem {
    #[serde(rename = "positionId")]
    pub position_id: u64,
    #[serde(rename = "positionTitle")]
    pub position_title: String,
    pub department: String,
    #[serde(rename = "targetBranch")]
    pub target_branch: String,
    pub country: String,
    pub city: String,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchReason")]
    pub match_reason: String,
    #[serde(rename = "contractType")]
    pub contract_type: ContractType,
    #[serde(rename = "experienceRequired")]
    pub experience_required: u32,
    #[serde(rename = "salaryRange")]
    pub salary_range: String,
}
