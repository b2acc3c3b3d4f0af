use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::config::BackendSettings;
use crate::core::{enhance_with_factors, keyword_similarity};
use crate::models::{MatchResult, ScoreMode, SimilarityRequest, SimilarityResponse};
use crate::services::MetricsRegistry;

/// Errors from the AI scoring backend.
///
/// These never cross the public scoring surface; every variant degrades to
/// a fallback or error-mode `MatchResult`.
#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Backend returned status: {0}")]
    BackendStatus(reqwest::StatusCode),
}

/// Client for the AI similarity backend.
///
/// Issues a single `POST /similarity` per scoring call with a configured
/// timeout and no retries. On any failure the call degrades to the local
/// keyword scorer (when fallback is enabled) or an error-mode result.
/// Every invocation that reaches I/O updates the metrics registry exactly
/// once, on either the success or the error branch.
#[derive(Clone)]
pub struct SimilarityClient {
    client: Client,
    base_url: String,
    fallback_enabled: bool,
    similarity_threshold: f64,
    max_text_length: usize,
    metrics: Arc<MetricsRegistry>,
}

impl SimilarityClient {
    pub fn new(
        base_url: String,
        timeout: Duration,
        fallback_enabled: bool,
        similarity_threshold: f64,
        max_text_length: usize,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            fallback_enabled,
            similarity_threshold,
            max_text_length,
            metrics,
        }
    }

    pub fn from_settings(settings: &BackendSettings, metrics: Arc<MetricsRegistry>) -> Self {
        Self::new(
            settings.url.clone(),
            Duration::from_millis(settings.timeout_ms),
            settings.fallback_enabled,
            settings.similarity_threshold,
            settings.max_text_length,
            metrics,
        )
    }

    /// Score one candidate text against one job text.
    ///
    /// Blank input short-circuits to an error-mode result without touching
    /// the network or the metrics registry.
    pub async fn score(&self, candidate_text: &str, job_text: &str) -> MatchResult {
        if is_blank(candidate_text) || is_blank(job_text) {
            tracing::warn!("Rejected scoring call with empty CV or job text");
            return MatchResult::error("empty input");
        }

        let request = SimilarityRequest {
            candidate_text: self.truncate(candidate_text),
            job_text: self.truncate(job_text),
            additional_factors: None,
        };

        let start = Instant::now();
        match self.call_backend(&request).await {
            Ok(body) => {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                self.metrics.record_success(elapsed_ms);
                tracing::debug!(
                    "Backend scored {:.1} in {}ms (status: {})",
                    body.similarity_score,
                    elapsed_ms,
                    body.status
                );
                MatchResult::remote(body.similarity_score, elapsed_ms, body.status)
            }
            Err(e) => {
                self.metrics.record_error();
                tracing::warn!("Scoring backend call failed: {}", e);
                self.handle_fallback(candidate_text, job_text)
            }
        }
    }

    /// Score with optional weighted bonus factors applied on top
    pub async fn score_enhanced(&self, request: &SimilarityRequest) -> MatchResult {
        let mut result = self.score(&request.candidate_text, &request.job_text).await;

        if let Some(factors) = &request.additional_factors {
            if result.mode != ScoreMode::Error {
                result.score = enhance_with_factors(result.score, factors);
                result.mode = ScoreMode::Enhanced;
                result.status = "enhanced".to_string();
            }
        }

        result
    }

    /// Score one candidate against many job texts concurrently.
    ///
    /// Results come back in input order, each tagged `job_{i}`. A failure
    /// in one item degrades only that item.
    pub async fn batch_score(&self, candidate_text: &str, job_texts: &[String]) -> Vec<MatchResult> {
        tracing::debug!("Batch scoring {} job descriptions", job_texts.len());
        self.score_pairs(job_texts, candidate_text, PairSide::Job)
            .await
    }

    /// Detached scoring task.
    ///
    /// The returned future resolves to an error-mode result if the task
    /// panics or is cancelled; callers may also drop it without side
    /// effects beyond the per-call timeout already in flight.
    pub fn score_task(
        &self,
        candidate_text: String,
        job_text: String,
    ) -> impl Future<Output = MatchResult> {
        let client = self.clone();
        let handle = tokio::spawn(async move { client.score(&candidate_text, &job_text).await });

        async move {
            match handle.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("Async scoring task failed: {}", e);
                    MatchResult::error("async scoring task failed")
                }
            }
        }
    }

    /// Best candidates for a job, sorted descending and truncated to `top_n`.
    ///
    /// Filtered by the configured similarity threshold (0-100 scale).
    pub async fn top_candidates(
        &self,
        job_text: &str,
        candidate_texts: &[String],
        top_n: usize,
    ) -> Vec<MatchResult> {
        tracing::debug!(
            "Searching top {} candidates among {}",
            top_n,
            candidate_texts.len()
        );

        let threshold = self.similarity_threshold;
        let mut results = self
            .score_pairs(candidate_texts, job_text, PairSide::Candidate)
            .await;
        results.retain(|r| r.score >= threshold);
        sort_descending(&mut results);
        results.truncate(top_n);
        results
    }

    /// Jobs matching a CV with at least `min_score`, sorted descending.
    ///
    /// `min_score` is expressed on the same 0-100 scale as the scores.
    pub async fn top_jobs(
        &self,
        candidate_text: &str,
        job_texts: &[String],
        min_score: f64,
    ) -> Vec<MatchResult> {
        tracing::debug!("Searching matching jobs with minimum score: {}", min_score);

        let mut results = self
            .score_pairs(job_texts, candidate_text, PairSide::Job)
            .await;
        results.retain(|r| r.score >= min_score);
        sort_descending(&mut results);
        results
    }

    /// Warm the backend model by scoring the first pair of common texts
    pub async fn warmup(&self, common_texts: &[String]) {
        tracing::info!("Warming up scoring backend with {} texts", common_texts.len());
        if common_texts.len() >= 2 {
            let _ = self.score(&common_texts[0], &common_texts[1]).await;
        }
    }

    /// Score a list of texts against one fixed text, one concurrent task
    /// per pair, results returned in input order with correlation ids.
    async fn score_pairs(
        &self,
        texts: &[String],
        fixed_text: &str,
        side: PairSide,
    ) -> Vec<MatchResult> {
        let mut tasks = JoinSet::new();

        for (index, text) in texts.iter().cloned().enumerate() {
            let client = self.clone();
            let fixed = fixed_text.to_string();
            tasks.spawn(async move {
                let result = match side {
                    PairSide::Candidate => client.score(&text, &fixed).await,
                    PairSide::Job => client.score(&fixed, &text).await,
                };
                (index, result.with_correlation(side.correlation_id(index)))
            });
        }

        let mut results: Vec<MatchResult> = (0..texts.len())
            .map(|index| {
                MatchResult::error("scoring task failed").with_correlation(side.correlation_id(index))
            })
            .collect();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => results[index] = result,
                Err(e) => tracing::error!("Scoring task panicked: {}", e),
            }
        }

        results
    }

    async fn call_backend(
        &self,
        request: &SimilarityRequest,
    ) -> Result<SimilarityResponse, SimilarityError> {
        let url = format!("{}/similarity", self.base_url.trim_end_matches('/'));

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(SimilarityError::BackendStatus(response.status()));
        }

        Ok(response.json::<SimilarityResponse>().await?)
    }

    fn handle_fallback(&self, candidate_text: &str, job_text: &str) -> MatchResult {
        if !self.fallback_enabled {
            return MatchResult::error("backend unavailable");
        }

        tracing::info!("Falling back to local keyword similarity");
        MatchResult::fallback(keyword_similarity(candidate_text, job_text))
    }

    fn truncate(&self, text: &str) -> String {
        if text.len() <= self.max_text_length {
            return text.to_string();
        }
        text.chars().take(self.max_text_length).collect()
    }
}

#[derive(Debug, Clone, Copy)]
enum PairSide {
    Candidate,
    Job,
}

impl PairSide {
    fn correlation_id(self, index: usize) -> String {
        match self {
            PairSide::Candidate => format!("candidate_{}", index),
            PairSide::Job => format!("job_{}", index),
        }
    }
}

fn sort_descending(results: &mut [MatchResult]) {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
