//! Experience sub-score: candidate years against the requirement, adjusted
//! by an optimal-range bonus and over/under-qualification penalties. Like
//! the skill score, the result is not clamped before combination.

use serde::{Deserialize, Serialize};

use crate::extraction::job::JobLevel;
use crate::scoring::{round2, ScoringConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceScore {
    /// base + adjustment; may exceed 100 or go below 0.
    pub score: f64,
    pub base_score: f64,
    pub adjustment: f64,
    pub required_years: f64,
    pub candidate_years: f64,
    /// candidate - required; negative means a shortfall.
    pub experience_gap: f64,
}

/// Scores candidate experience against the requirement.
///
/// - No requirement (0 years) is trivially satisfied: flat 100, no bonus.
/// - Meeting the requirement scores base 100; a shortfall scales the base
///   down proportionally.
/// - Years within `[required, required + k]` (k per job level, wider for
///   Senior) earn the optimal-range bonus; years past that range are
///   penalized per excess year up to a cap; a shortfall is penalized
///   proportionally on top of the reduced base.
pub fn score_experience(
    candidate_years: f64,
    required_years: f64,
    job_level: JobLevel,
    config: &ScoringConfig,
) -> ExperienceScore {
    let candidate_years = candidate_years.max(0.0);

    if required_years <= 0.0 {
        return ExperienceScore {
            score: 100.0,
            base_score: 100.0,
            adjustment: 0.0,
            required_years: 0.0,
            candidate_years,
            experience_gap: candidate_years,
        };
    }

    let base_score = if candidate_years >= required_years {
        100.0
    } else {
        100.0 * candidate_years / required_years
    };

    let optimal_upper = required_years + config.optimal_range_width(job_level);
    let adjustment = if candidate_years >= required_years && candidate_years <= optimal_upper {
        config.optimal_range_bonus
    } else if candidate_years > optimal_upper {
        let excess = candidate_years - optimal_upper;
        -(config.overqual_penalty_per_year * excess).min(config.overqual_penalty_cap)
    } else {
        let shortfall_ratio = (required_years - candidate_years) / required_years;
        -(config.underqual_penalty_base + config.underqual_penalty_span * shortfall_ratio)
    };

    ExperienceScore {
        score: round2(base_score + adjustment),
        base_score: round2(base_score),
        adjustment: round2(adjustment),
        required_years,
        candidate_years,
        experience_gap: candidate_years - required_years,
    }
}
