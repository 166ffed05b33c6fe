//! Combiner — folds the sub-scores into the final percentage and fit label,
//! and derives the human-readable recommendations.

use serde::{Deserialize, Serialize};

use crate::scoring::education::EducationScore;
use crate::scoring::experience::ExperienceScore;
use crate::scoring::semantic::SemanticScore;
use crate::scoring::skill::SkillScore;
use crate::scoring::{round2, FitLabel, ScoringConfig};

/// Full scoring output for one (candidate, job) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub final_score: f64,
    pub fit_label: FitLabel,
    pub skill_score: f64,
    pub experience_score: f64,
    pub semantic_score: f64,
    /// Reported for context; never weighted into final_score.
    pub education_score: f64,
    /// True when the embedding backend failed and final_score was computed
    /// from skill and experience alone, with renormalized weights.
    pub semantic_degraded: bool,
    pub skill_analysis: SkillScore,
    pub experience_analysis: ExperienceScore,
    pub education_analysis: EducationScore,
    pub recommendations: Vec<String>,
}

/// Weighted combination: 0.45 skill + 0.35 experience + 0.20 semantic,
/// clamped to [0,100]. Sub-scores arrive unclamped and may exceed 100;
/// only the combined result is clamped. When the semantic score is
/// degraded, the skill and experience weights are renormalized to sum to 1
/// so a backend outage does not drag every candidate down.
pub fn combine_scores(
    skill: SkillScore,
    experience: ExperienceScore,
    semantic: SemanticScore,
    education: EducationScore,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let weighted = if semantic.degraded {
        let remaining = config.skill_weight + config.experience_weight;
        (config.skill_weight / remaining) * skill.score
            + (config.experience_weight / remaining) * experience.score
    } else {
        config.skill_weight * skill.score
            + config.experience_weight * experience.score
            + config.semantic_weight * semantic.score
    };

    let final_score = round2(weighted.clamp(0.0, 100.0));
    let fit_label = FitLabel::from_score(final_score, config);
    let recommendations = build_recommendations(final_score, &skill, &experience, &education);

    ScoreBreakdown {
        final_score,
        fit_label,
        skill_score: skill.score,
        experience_score: experience.score,
        semantic_score: semantic.score,
        education_score: education.score,
        semantic_degraded: semantic.degraded,
        skill_analysis: skill,
        experience_analysis: experience,
        education_analysis: education,
        recommendations,
    }
}

fn build_recommendations(
    final_score: f64,
    skill: &SkillScore,
    experience: &ExperienceScore,
    education: &EducationScore,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if skill.score < 70.0 {
        if skill.missing_skills.is_empty() {
            recommendations
                .push("Highlight your technical skills more prominently in your resume".to_string());
        } else {
            let top: Vec<&str> = skill
                .missing_skills
                .iter()
                .take(3)
                .map(|s| s.as_str())
                .collect();
            recommendations.push(format!("Consider gaining experience with: {}", top.join(", ")));
        }
    }

    if experience.experience_gap < 0.0 {
        recommendations.push(format!(
            "Consider gaining {:.0} more years of experience in this field",
            experience.experience_gap.abs().ceil()
        ));
    } else if experience.experience_gap > 5.0 {
        recommendations
            .push("Consider emphasizing your leadership and mentorship experience".to_string());
    }

    if education.score < 100.0 && !education.required_levels.is_empty() {
        recommendations.push(format!(
            "The position prefers candidates with {} education",
            education.required_levels.join(" or ")
        ));
    }

    if final_score < 50.0 {
        recommendations.push(
            "Consider applying to more junior positions or gaining additional experience"
                .to_string(),
        );
    } else if final_score > 90.0 {
        recommendations.push(
            "You're an excellent match for this position! Highlight your most relevant achievements."
                .to_string(),
        );
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Your profile looks good. Make sure to tailor your application to the job description."
                .to_string(),
        );
    }

    recommendations
}
