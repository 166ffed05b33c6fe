//! Education score — auxiliary signal reported in the breakdown but never
//! part of the weighted final score.

use serde::{Deserialize, Serialize};

const EDUCATION_GROUPS: &[(&str, &[&str])] = &[
    ("bachelor", &["bachelor", "b.tech", "b.e", "b.sc", "bca"]),
    ("master", &["master", "m.tech", "m.e", "m.sc", "mba", "mca"]),
    ("phd", &["phd", "doctorate", "ph.d"]),
    ("diploma", &["diploma", "certificate"]),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationScore {
    /// 100 when the candidate meets a stated requirement, 0 when they do
    /// not, 50 when the JD states no education requirement.
    pub score: f64,
    /// Education levels the JD asks for; empty means no requirement.
    pub required_levels: Vec<String>,
}

pub fn score_education(candidate_education: &[String], job_description: &str) -> EducationScore {
    let jd_lower = job_description.to_lowercase();

    let required_levels: Vec<String> = EDUCATION_GROUPS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| jd_lower.contains(kw)))
        .map(|(level, _)| level.to_string())
        .collect();

    if required_levels.is_empty() {
        return EducationScore {
            score: 50.0,
            required_levels,
        };
    }

    let candidate_text = candidate_education.join(" ").to_lowercase();
    let meets_any = EDUCATION_GROUPS
        .iter()
        .filter(|(level, _)| required_levels.iter().any(|r| r == level))
        .any(|(_, keywords)| keywords.iter().any(|kw| candidate_text.contains(kw)));

    EducationScore {
        score: if meets_any { 100.0 } else { 0.0 },
        required_levels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_requirement_scores_50() {
        let result = score_education(&["Bachelor of Science".to_string()], "Great team.");
        assert_eq!(result.score, 50.0);
        assert!(result.required_levels.is_empty());
    }

    #[test]
    fn test_meeting_requirement_scores_100() {
        let result = score_education(
            &["Bachelor of Technology in CS".to_string()],
            "Bachelor's degree in CS required.",
        );
        assert_eq!(result.score, 100.0);
        assert_eq!(result.required_levels, vec!["bachelor".to_string()]);
    }

    #[test]
    fn test_missing_requirement_scores_0() {
        let result = score_education(&[], "Master's degree required.");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.required_levels, vec!["master".to_string()]);
    }

    #[test]
    fn test_any_of_multiple_requirements_satisfies() {
        let result = score_education(
            &["MBA, IIM".to_string()],
            "Bachelor or Master degree preferred.",
        );
        assert_eq!(result.score, 100.0);
        assert_eq!(result.required_levels.len(), 2);
    }
}
