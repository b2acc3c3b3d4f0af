use serde::{Deserialize, Serialize};

/// Wire response from the scoring backend's `POST /similarity`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResponse {
    #[serde(rename = "similarity_score")]
    pub similarity_score: f64,
    #[serde(rename = "similarity_raw", default)]
    pub similarity_raw: f64,
    #[serde(rename = "processing_time_ms", default)]
    pub processing_time_ms: u64,
    pub status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
