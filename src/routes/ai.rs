use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::RecommendationRanker;
use crate::models::{
    BatchScoreRequest, ErrorResponse, HealthResponse, MatchingJobsRequest, RecommendationRequest,
    SimilarityRequest, TopCandidatesRequest,
};
use crate::services::{HealthMonitor, MetricsRegistry, SimilarityClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub client: SimilarityClient,
    pub ranker: RecommendationRanker,
    pub metrics: Arc<MetricsRegistry>,
    pub monitor: Arc<HealthMonitor>,
}

/// Configure all scoring and recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/ai/similarity", web::post().to(similarity))
        .route("/ai/similarity/batch", web::post().to(batch_similarity))
        .route("/ai/candidates/top", web::post().to(top_candidates))
        .route("/ai/jobs/matching", web::post().to(matching_jobs))
        .route("/ai/metrics", web::get().to(metrics))
        .route("/ai/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommendations));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Request validation failed: {:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Single similarity score, optionally enhanced with weighted factors
///
/// POST /api/v1/ai/similarity
async fn similarity(
    state: web::Data<AppState>,
    req: web::Json<SimilarityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    tracing::info!(
        "Similarity requested (cv: {} chars, job: {} chars)",
        req.candidate_text.len(),
        req.job_text.len()
    );

    let result = state.client.score_enhanced(&req).await;
    HttpResponse::Ok().json(result)
}

/// Batch scoring of one CV against many job descriptions
///
/// POST /api/v1/ai/similarity/batch
async fn batch_similarity(
    state: web::Data<AppState>,
    req: web::Json<BatchScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let results = state
        .client
        .batch_score(&req.candidate_text, &req.job_texts)
        .await;
    HttpResponse::Ok().json(results)
}

/// Best candidates for a job description
///
/// POST /api/v1/ai/candidates/top
async fn top_candidates(
    state: web::Data<AppState>,
    req: web::Json<TopCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let results = state
        .client
        .top_candidates(&req.job_text, &req.candidate_texts, req.top_n)
        .await;
    HttpResponse::Ok().json(results)
}

/// Jobs matching a CV above a minimum score
///
/// POST /api/v1/ai/jobs/matching
async fn matching_jobs(
    state: web::Data<AppState>,
    req: web::Json<MatchingJobsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let results = state
        .client
        .top_jobs(&req.candidate_text, &req.job_texts, req.min_score)
        .await;
    HttpResponse::Ok().json(results)
}

/// Ranked position recommendations for a profile
///
/// POST /api/v1/recommendations
///
/// Optional `country`, `city` and `branchId` fields restrict the candidate
/// position set before scoring.
async fn recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if req.profile.cv_text.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing CV text".to_string(),
            message: "A CV text is required for recommendations".to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let items = match (req.branch_id, req.country.as_deref(), req.city.as_deref()) {
        (Some(branch_id), _, _) => {
            state
                .ranker
                .rank_by_branch(&req.profile, &req.positions, branch_id)
                .await
        }
        (None, Some(country), Some(city)) => {
            state
                .ranker
                .rank_by_location(&req.profile, &req.positions, country, city)
                .await
        }
        (None, Some(country), None) => {
            state
                .ranker
                .rank_by_country(&req.profile, &req.positions, country)
                .await
        }
        (None, None, _) => state.ranker.rank(&req.profile, &req.positions).await,
    };

    HttpResponse::Ok().json(items)
}

/// Scoring service metrics snapshot
///
/// GET /api/v1/ai/metrics
async fn metrics(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.metrics.snapshot())
}

/// Health check endpoint, probes the scoring backend
///
/// GET /api/v1/ai/health
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let backend_healthy = state.monitor.check().await;
    let status = if backend_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
