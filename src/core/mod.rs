// Core algorithm exports
pub mod enhancer;
pub mod keywords;
pub mod ranker;

pub use enhancer::{enhance_with_factors, position_fit};
pub use keywords::keyword_similarity;
pub use ranker::{format_salary_range, generate_match_reason, RecommendationRanker};
