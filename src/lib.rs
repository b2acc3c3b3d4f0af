//! Talent Match - CV-to-position matching service
//!
//! This library scores candidate CVs against job descriptions through an
//! external AI similarity backend, degrades to a local keyword-overlap
//! scorer when that backend is unavailable, and produces ranked, explained
//! position recommendations.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{keyword_similarity, RecommendationRanker};
pub use models::{MatchResult, Position, Profile, RecommendationItem, ScoreMode};
pub use services::{HealthMonitor, MetricsRegistry, MetricsSnapshot, SimilarityClient};
