//! Skill sub-score: coverage of the required skill set, with bonuses for
//! breadth beyond the requirements and for high coverage. Deliberately not
//! clamped here — the combiner clamps the final result.

use serde::{Deserialize, Serialize};

use crate::extraction::skills::normalized_key;
use crate::scoring::{round2, ScoringConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillScore {
    /// base + extra_bonus + coverage_bonus; may exceed 100.
    pub score: f64,
    pub base_score: f64,
    pub extra_bonus: f64,
    pub coverage_bonus: f64,
    /// matched / required, in [0,1].
    pub coverage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
}

/// Scores the candidate's skills against the requirement. Both sides are
/// alias-folded before intersection, so "JS" on the resume satisfies a
/// "JavaScript" requirement. An empty requirement is trivially satisfied
/// and scores 100.
pub fn score_skills(
    candidate_skills: &[String],
    required_skills: &[String],
    config: &ScoringConfig,
) -> SkillScore {
    if required_skills.is_empty() {
        return SkillScore {
            score: 100.0,
            base_score: 100.0,
            extra_bonus: 0.0,
            coverage_bonus: 0.0,
            coverage: 1.0,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            extra_skills: candidate_skills.to_vec(),
        };
    }

    let candidate_keys: Vec<String> = candidate_skills.iter().map(|s| normalized_key(s)).collect();
    let required_keys: Vec<String> = required_skills.iter().map(|s| normalized_key(s)).collect();

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for (skill, key) in required_skills.iter().zip(&required_keys) {
        if candidate_keys.contains(key) {
            matched_skills.push(skill.clone());
        } else {
            missing_skills.push(skill.clone());
        }
    }

    let extra_skills: Vec<String> = candidate_skills
        .iter()
        .zip(&candidate_keys)
        .filter(|(_, key)| !required_keys.contains(key))
        .map(|(skill, _)| skill.clone())
        .collect();

    let coverage = matched_skills.len() as f64 / required_skills.len() as f64;
    let base_score = coverage * 100.0;
    let extra_bonus =
        (extra_skills.len() as f64 * config.extra_skill_bonus_per).min(config.extra_skill_bonus_cap);
    let coverage_bonus = if coverage >= config.high_coverage_ratio {
        config.high_coverage_bonus
    } else if coverage >= config.mid_coverage_ratio {
        config.mid_coverage_bonus
    } else {
        0.0
    };

    SkillScore {
        score: round2(base_score + extra_bonus + coverage_bonus),
        base_score: round2(base_score),
        extra_bonus,
        coverage_bonus,
        coverage,
        matched_skills,
        missing_skills,
        extra_skills,
    }
}
