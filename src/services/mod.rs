// Service exports
pub mod health;
pub mod metrics;
pub mod similarity;

pub use health::HealthMonitor;
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use similarity::{SimilarityClient, SimilarityError};
