use std::collections::HashMap;

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::CrossWireConfig;
use crate::engine::{
    build_remediation_options, calculate_aegis_score, calculate_case_priority, detect_overlaps,
    simulate_remediation, AegisScore, CaseData, CasePriority, CaseSubject, OverlapResult,
    RemediationOption, ScoreSnapshot, ScoreTrend, SimulatedScore, SubjectRecord,
};
use crate::error::AppError;
use crate::profile::{calculate_completeness, CompletenessReport, ProfileData};

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub profile: Option<ProfileData>,
}

#[derive(Debug, Serialize)]
pub struct RemediationResponse {
    pub score: AegisScore,
    pub options: Vec<RemediationOption>,
}

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub base: AegisScore,
    #[serde(default)]
    pub options: Vec<RemediationOption>,
}

#[derive(Debug, Deserialize)]
pub struct TrendRequest {
    #[serde(default)]
    pub history: Vec<ScoreSnapshot>,
}

#[derive(Debug, Deserialize)]
pub struct OverlapRequest {
    pub current: SubjectRecord,
    #[serde(default)]
    pub subjects: Vec<SubjectRecord>,
}

#[derive(Debug, Serialize)]
pub struct OverlapResponse {
    pub overlaps: Vec<OverlapResult>,
    pub scanned: usize,
    pub truncated: bool,
}

#[derive(Debug, Deserialize)]
pub struct CasePriorityRequest {
    pub case: CaseData,
    #[serde(default)]
    pub subjects: Vec<CaseSubject>,
    /// Precomputed scores by subject id; subjects without one are scored from their profile.
    #[serde(default)]
    pub aegis_scores: HashMap<String, AegisScore>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Router exposing the scoring engine as stateless JSON endpoints.
pub fn exposure_router(crosswire: CrossWireConfig) -> Router {
    Router::new()
        .route("/api/v1/profiles/completeness", post(completeness_handler))
        .route("/api/v1/aegis/score", post(score_handler))
        .route("/api/v1/aegis/remediation", post(remediation_handler))
        .route("/api/v1/aegis/simulate", post(simulate_handler))
        .route("/api/v1/aegis/trend", post(trend_handler))
        .route("/api/v1/crosswire/overlaps", post(overlaps_handler))
        .route("/api/v1/cases/priority", post(case_priority_handler))
        .with_state(crosswire)
}

pub(crate) async fn completeness_handler(
    Json(request): Json<ProfileRequest>,
) -> Json<CompletenessReport> {
    Json(calculate_completeness(request.profile.as_ref()))
}

pub(crate) async fn score_handler(Json(request): Json<ProfileRequest>) -> Json<AegisScore> {
    Json(calculate_aegis_score(request.profile.as_ref()))
}

pub(crate) async fn remediation_handler(
    Json(request): Json<ProfileRequest>,
) -> Json<RemediationResponse> {
    let profile = request.profile.as_ref();
    Json(RemediationResponse {
        score: calculate_aegis_score(profile),
        options: build_remediation_options(profile),
    })
}

pub(crate) async fn simulate_handler(Json(request): Json<SimulateRequest>) -> Json<SimulatedScore> {
    Json(simulate_remediation(&request.base, &request.options))
}

pub(crate) async fn trend_handler(
    Json(request): Json<TrendRequest>,
) -> Result<Json<ScoreTrend>, AppError> {
    let trend = ScoreTrend::from_history(&request.history)?;
    Ok(Json(trend))
}

pub(crate) async fn overlaps_handler(
    State(config): State<CrossWireConfig>,
    Json(request): Json<OverlapRequest>,
) -> Json<OverlapResponse> {
    let OverlapRequest {
        current,
        mut subjects,
    } = request;

    subjects.retain(|subject| subject.id != current.id);
    let truncated = subjects.len() > config.max_subjects;
    if truncated {
        info!(
            subject = %current.id,
            supplied = subjects.len(),
            cap = config.max_subjects,
            "crosswire candidate list truncated"
        );
        subjects.truncate(config.max_subjects);
    }

    Json(OverlapResponse {
        overlaps: detect_overlaps(&current, &subjects),
        scanned: subjects.len(),
        truncated,
    })
}

pub(crate) async fn case_priority_handler(
    Json(request): Json<CasePriorityRequest>,
) -> Json<CasePriority> {
    let CasePriorityRequest {
        case,
        subjects,
        mut aegis_scores,
        now,
    } = request;

    for subject in &subjects {
        aegis_scores
            .entry(subject.id.clone())
            .or_insert_with(|| calculate_aegis_score(subject.profile_data.as_ref()));
    }

    let now = now.unwrap_or_else(Utc::now);
    Json(calculate_case_priority(&case, &subjects, &aegis_scores, now))
}
