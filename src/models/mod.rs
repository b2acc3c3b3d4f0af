// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ContractType, EducationLevel, MatchResult, MobilityType, Position, PositionStatus, Profile,
    RecommendationItem, ScoreMode,
};
pub use requests::{
    AdditionalFactors, BatchScoreRequest, MatchingJobsRequest, RecommendationRequest,
    SimilarityRequest, TopCandidatesRequest,
};
pub use responses::{ErrorResponse, HealthResponse, SimilarityResponse};
