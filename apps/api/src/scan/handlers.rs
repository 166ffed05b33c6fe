//! Axum route handlers for the Scan API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::job::JobRequirement;
use crate::extraction::{extract_profile, CandidateProfile, ExtractionSummary};
use crate::scoring::combine::ScoreBreakdown;
use crate::scoring::{score_candidate, FitLabel};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// Plain resume text; PDF/DOCX decoding happens upstream.
    pub resume_text: String,
    pub job_description: String,
    /// Explicit requirement overrides; mined from the JD when omitted.
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
    #[serde(default)]
    pub required_experience_years: Option<f64>,
    /// Original upload filename, used as a last-resort name hint.
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub scan_id: Uuid,
    pub match_score: f64,
    pub fit: FitLabel,
    pub summary: String,
    pub candidate_info: CandidateProfile,
    pub score_breakdown: ScoreBreakdown,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub resume_text: String,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub candidate_info: CandidateProfile,
    pub extraction_summary: ExtractionSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/scan
///
/// Extracts a candidate profile from the resume text and scores it against
/// the job description in one pass.
pub async fn handle_scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let profile = extract_profile(&request.resume_text, request.filename.as_deref());
    let job = JobRequirement::derive(
        &request.job_description,
        request.required_skills,
        request.required_experience_years,
    );

    let breakdown = score_candidate(
        &profile,
        &job,
        &request.resume_text,
        state.embedder.as_ref(),
        &state.scoring,
    )
    .await;

    let scan_id = Uuid::new_v4();
    info!(
        "Scan {scan_id}: final={} fit={} (skill={}, experience={}, semantic={})",
        breakdown.final_score,
        breakdown.fit_label.as_str(),
        breakdown.skill_score,
        breakdown.experience_score,
        breakdown.semantic_score
    );

    Ok(Json(ScanResponse {
        scan_id,
        match_score: breakdown.final_score,
        fit: breakdown.fit_label,
        summary: fit_summary(breakdown.fit_label).to_string(),
        candidate_info: profile,
        score_breakdown: breakdown,
    }))
}

/// POST /api/v1/extract
///
/// Extraction only — returns the structured candidate profile without
/// scoring, for callers that preview before picking a job description.
pub async fn handle_extract(
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    let candidate_info = extract_profile(&request.resume_text, request.filename.as_deref());
    let extraction_summary = candidate_info.summary();

    Ok(Json(ExtractResponse {
        candidate_info,
        extraction_summary,
    }))
}

/// One-line verdict shown next to the score.
fn fit_summary(label: FitLabel) -> &'static str {
    match label {
        FitLabel::ExcellentFit => {
            "The resume strongly matches the job description. The candidate is highly suitable for the position."
        }
        FitLabel::GoodFit => {
            "The resume matches the job description well. The candidate is a promising fit for the position."
        }
        FitLabel::ModerateFit => {
            "The resume likely matches the job description. The candidate may be suitable with some training or support."
        }
        FitLabel::PoorFit => {
            "The resume does not closely match the job description. The candidate may not be an ideal fit."
        }
    }
}
