//! Scoring — three independent sub-scores (skill, experience, semantic)
//! combined into a weighted final percentage and a fit label. Every scorer
//! is a pure function of its inputs plus the immutable `ScoringConfig`;
//! nothing here touches shared mutable state.

pub mod combine;
pub mod education;
pub mod experience;
pub mod semantic;
pub mod skill;

use serde::{Deserialize, Serialize};

use crate::embeddings::Embedder;
use crate::extraction::job::{JobLevel, JobRequirement};
use crate::extraction::CandidateProfile;
use crate::scoring::combine::ScoreBreakdown;

/// Static scoring configuration: weights, label thresholds, and the
/// hand-tuned bonus/penalty constants. Loaded once at startup and shared
/// read-only across scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Sub-score weights; sum to 1.0.
    pub skill_weight: f64,
    pub experience_weight: f64,
    pub semantic_weight: f64,

    /// Fit-label thresholds, closed lower bounds.
    pub excellent_threshold: f64,
    pub good_threshold: f64,
    pub moderate_threshold: f64,

    /// Skill scorer: bonus per skill beyond the requirements, and its cap.
    pub extra_skill_bonus_per: f64,
    pub extra_skill_bonus_cap: f64,
    /// Coverage-ratio bonus tiers.
    pub high_coverage_ratio: f64,
    pub high_coverage_bonus: f64,
    pub mid_coverage_ratio: f64,
    pub mid_coverage_bonus: f64,

    /// Experience scorer: optimal-range widths per job level (years above
    /// the requirement that still count as a perfect fit).
    pub junior_optimal_range: f64,
    pub mid_optimal_range: f64,
    pub senior_optimal_range: f64,
    pub optimal_range_bonus: f64,
    /// Over-qualification: penalty per year past the optimal range, capped.
    pub overqual_penalty_per_year: f64,
    pub overqual_penalty_cap: f64,
    /// Under-qualification: base penalty plus a span scaled by the shortfall
    /// ratio, i.e. penalties run from -base to -(base + span).
    pub underqual_penalty_base: f64,
    pub underqual_penalty_span: f64,

    /// Semantic scorer: both texts are truncated to this many characters
    /// before embedding.
    pub semantic_max_chars: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 0.45,
            experience_weight: 0.35,
            semantic_weight: 0.20,
            excellent_threshold: 85.0,
            good_threshold: 70.0,
            moderate_threshold: 50.0,
            extra_skill_bonus_per: 2.0,
            extra_skill_bonus_cap: 15.0,
            high_coverage_ratio: 0.8,
            high_coverage_bonus: 10.0,
            mid_coverage_ratio: 0.6,
            mid_coverage_bonus: 5.0,
            junior_optimal_range: 2.0,
            mid_optimal_range: 3.0,
            senior_optimal_range: 5.0,
            optimal_range_bonus: 10.0,
            overqual_penalty_per_year: 2.0,
            overqual_penalty_cap: 10.0,
            underqual_penalty_base: 5.0,
            underqual_penalty_span: 5.0,
            semantic_max_chars: 1000,
        }
    }
}

impl ScoringConfig {
    pub fn optimal_range_width(&self, level: JobLevel) -> f64 {
        match level {
            JobLevel::Junior => self.junior_optimal_range,
            JobLevel::Mid => self.mid_optimal_range,
            JobLevel::Senior => self.senior_optimal_range,
        }
    }
}

/// Categorical fit verdict. Serialized with the human-readable labels the
/// reporting layer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitLabel {
    #[serde(rename = "Excellent Fit")]
    ExcellentFit,
    #[serde(rename = "Good Fit")]
    GoodFit,
    #[serde(rename = "Moderate Fit")]
    ModerateFit,
    #[serde(rename = "Poor Fit")]
    PoorFit,
}

impl FitLabel {
    /// Threshold boundaries are closed on the lower edge: exactly 85.0 is
    /// Excellent, exactly 70.0 is Good, exactly 50.0 is Moderate.
    pub fn from_score(final_score: f64, config: &ScoringConfig) -> Self {
        if final_score >= config.excellent_threshold {
            FitLabel::ExcellentFit
        } else if final_score >= config.good_threshold {
            FitLabel::GoodFit
        } else if final_score >= config.moderate_threshold {
            FitLabel::ModerateFit
        } else {
            FitLabel::PoorFit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitLabel::ExcellentFit => "Excellent Fit",
            FitLabel::GoodFit => "Good Fit",
            FitLabel::ModerateFit => "Moderate Fit",
            FitLabel::PoorFit => "Poor Fit",
        }
    }
}

/// Rounds to two decimals for output, matching the precision consumers of
/// the breakdown expect.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores one candidate against one job: runs the three sub-scorers plus
/// the auxiliary education score and combines them. Pure given a
/// deterministic embedder; identical inputs produce identical breakdowns.
pub async fn score_candidate(
    profile: &CandidateProfile,
    job: &JobRequirement,
    resume_text: &str,
    embedder: &dyn Embedder,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let skill = skill::score_skills(&profile.skills, &job.required_skills, config);
    let experience = experience::score_experience(
        profile.experience_years,
        job.required_experience_years,
        job.job_level,
        config,
    );
    let semantic =
        semantic::score_semantic(resume_text, &job.description_text, embedder, config).await;
    let education = education::score_education(&profile.education, &job.description_text);

    combine::combine_scores(skill, experience, semantic, education, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = ScoringConfig::default();
        let sum = config.skill_weight + config.experience_weight + config.semantic_weight;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_label_boundaries_are_closed_lower() {
        let config = ScoringConfig::default();
        assert_eq!(FitLabel::from_score(85.0, &config), FitLabel::ExcellentFit);
        assert_eq!(FitLabel::from_score(84.999, &config), FitLabel::GoodFit);
        assert_eq!(FitLabel::from_score(70.0, &config), FitLabel::GoodFit);
        assert_eq!(FitLabel::from_score(69.999, &config), FitLabel::ModerateFit);
        assert_eq!(FitLabel::from_score(50.0, &config), FitLabel::ModerateFit);
        assert_eq!(FitLabel::from_score(49.999, &config), FitLabel::PoorFit);
        assert_eq!(FitLabel::from_score(0.0, &config), FitLabel::PoorFit);
    }

    #[test]
    fn test_fit_label_serializes_with_spaces() {
        let json = serde_json::to_string(&FitLabel::ExcellentFit).unwrap();
        assert_eq!(json, "\"Excellent Fit\"");
    }

    #[test]
    fn test_optimal_range_wider_for_senior() {
        let config = ScoringConfig::default();
        assert!(
            config.optimal_range_width(JobLevel::Senior)
                > config.optimal_range_width(JobLevel::Junior)
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(91.846), 91.85);
        assert_eq!(round2(73.234), 73.23);
        assert_eq!(round2(100.0), 100.0);
    }

    mod pipeline {
        use super::*;
        use crate::embeddings::{Embedder, EmbeddingError};
        use crate::extraction::extract_profile;
        use crate::extraction::job::JobRequirement;
        use async_trait::async_trait;

        /// Deterministic bag-of-chars embedder: same text, same vector.
        struct HashEmbedder;

        #[async_trait]
        impl Embedder for HashEmbedder {
            async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
                let mut vector = vec![0.0_f32; 32];
                for (i, byte) in text.bytes().enumerate() {
                    vector[(byte as usize + i) % 32] += 1.0;
                }
                Ok(vector)
            }
        }

        struct FailingEmbedder;

        #[async_trait]
        impl Embedder for FailingEmbedder {
            async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
                Err(EmbeddingError::Unavailable { retries: 3 })
            }
        }

        const RESUME: &str = "\
John Doe
john@example.com
5 years of experience building web services.
Skills: Python, React, AWS, Django, SQL, Git";

        const JD: &str = "\
We need a backend engineer with 3+ years of experience.
Required skills: Python, React, AWS, Docker.";

        #[tokio::test]
        async fn test_end_to_end_scan_scores_and_labels() {
            let config = ScoringConfig::default();
            let profile = extract_profile(RESUME, None);
            let job = JobRequirement::derive(JD, None, None);

            let breakdown =
                score_candidate(&profile, &job, RESUME, &HashEmbedder, &config).await;

            // Candidate meets the 3-year requirement inside the optimal range.
            assert_eq!(breakdown.experience_analysis.base_score, 100.0);
            assert_eq!(breakdown.experience_analysis.adjustment, 10.0);
            assert!(breakdown.final_score >= 0.0 && breakdown.final_score <= 100.0);
            assert!(!breakdown.semantic_degraded);
        }

        #[tokio::test]
        async fn test_scan_is_idempotent_with_deterministic_embedder() {
            let config = ScoringConfig::default();
            let profile = extract_profile(RESUME, None);
            let job = JobRequirement::derive(JD, None, None);

            let a = score_candidate(&profile, &job, RESUME, &HashEmbedder, &config).await;
            let b = score_candidate(&profile, &job, RESUME, &HashEmbedder, &config).await;
            assert_eq!(a.final_score, b.final_score);
            assert_eq!(a.semantic_score, b.semantic_score);
            assert_eq!(a.fit_label, b.fit_label);
        }

        #[tokio::test]
        async fn test_embedding_outage_still_produces_a_score() {
            let config = ScoringConfig::default();
            let profile = extract_profile(RESUME, None);
            let job = JobRequirement::derive(JD, None, None);

            let breakdown =
                score_candidate(&profile, &job, RESUME, &FailingEmbedder, &config).await;
            assert!(breakdown.semantic_degraded);
            assert_eq!(breakdown.semantic_score, 0.0);
            assert!(breakdown.final_score > 0.0, "Scan must survive an outage");
        }

        #[tokio::test]
        async fn test_spec_worked_example_skill_component() {
            // The JD mines {Python, React, AWS, Docker}; the resume carries
            // {Python, React, AWS, Django, SQL, Git}: skill score 86.
            let config = ScoringConfig::default();
            let profile = extract_profile(RESUME, None);
            let job = JobRequirement::derive(JD, None, None);

            let breakdown =
                score_candidate(&profile, &job, RESUME, &HashEmbedder, &config).await;
            assert_eq!(breakdown.skill_analysis.matched_skills.len(), 3);
            assert_eq!(breakdown.skill_score, 86.0);
        }
    }
}
