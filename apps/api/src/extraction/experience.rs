//! Experience extraction — pulls a best-effort years-of-experience figure
//! out of free resume text, plus the coarse level categorization surfaced
//! in the extraction summary.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp|work)",
        r"experience\s*[:.]?\s*(\d+)\+?\s*(?:years?|yrs?)",
        r"(\d+)\+?\s*(?:years?|yrs?)\s*in\s*(?:software|development|programming|coding)",
        r"(\d+)\+?\s*(?:years?|yrs?)\s+as\s+(?:an?\s+)?(?:software\s+)?(?:developer|engineer|programmer)",
        r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:professional|technical|industry)",
        r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:in\s+)?(?:it|software|technology)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience pattern must compile"))
    .collect()
});

/// Extracts years of experience from resume text. Multiple mentions are
/// resolved by taking the maximum; no mention at all means 0.
pub fn extract_experience_years(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let mut max_years = 0.0_f64;

    for pattern in EXPERIENCE_PATTERNS.iter() {
        for caps in pattern.captures_iter(&lower) {
            if let Some(m) = caps.get(1) {
                if let Ok(years) = m.as_str().parse::<f64>() {
                    max_years = max_years.max(years);
                }
            }
        }
    }

    max_years
}

/// Coarse seniority band shown in the extraction summary. Distinct from
/// `JobLevel`, which buckets a job's requirement rather than a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry Level")]
    EntryLevel,
    Junior,
    #[serde(rename = "Mid Level")]
    MidLevel,
    Senior,
    Expert,
}

impl ExperienceLevel {
    pub fn from_years(years: f64) -> Self {
        if years == 0.0 {
            ExperienceLevel::EntryLevel
        } else if years <= 2.0 {
            ExperienceLevel::Junior
        } else if years <= 5.0 {
            ExperienceLevel::MidLevel
        } else if years <= 10.0 {
            ExperienceLevel::Senior
        } else {
            ExperienceLevel::Expert
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "Entry Level",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid Level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_years_of_experience() {
        assert_eq!(extract_experience_years("5 years of experience in Python"), 5.0);
    }

    #[test]
    fn test_abbreviated_yrs() {
        assert_eq!(extract_experience_years("7 yrs experience with Java"), 7.0);
    }

    #[test]
    fn test_plus_suffix() {
        assert_eq!(extract_experience_years("10+ years of experience"), 10.0);
    }

    #[test]
    fn test_labeled_experience_field() {
        assert_eq!(extract_experience_years("Experience: 4 years"), 4.0);
    }

    #[test]
    fn test_years_in_software() {
        assert_eq!(extract_experience_years("3 years in software development"), 3.0);
    }

    #[test]
    fn test_years_as_engineer() {
        assert_eq!(extract_experience_years("6 years as a software engineer"), 6.0);
    }

    #[test]
    fn test_multiple_mentions_takes_maximum() {
        let text = "2 years of experience in React. 8 years of experience overall.";
        assert_eq!(extract_experience_years(text), 8.0);
    }

    #[test]
    fn test_no_mention_is_zero() {
        assert_eq!(extract_experience_years("Fresh graduate, eager to learn."), 0.0);
    }

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(extract_experience_years(""), 0.0);
    }

    #[test]
    fn test_level_bands() {
        assert_eq!(ExperienceLevel::from_years(0.0), ExperienceLevel::EntryLevel);
        assert_eq!(ExperienceLevel::from_years(1.5), ExperienceLevel::Junior);
        assert_eq!(ExperienceLevel::from_years(2.0), ExperienceLevel::Junior);
        assert_eq!(ExperienceLevel::from_years(4.0), ExperienceLevel::MidLevel);
        assert_eq!(ExperienceLevel::from_years(8.0), ExperienceLevel::Senior);
        assert_eq!(ExperienceLevel::from_years(15.0), ExperienceLevel::Expert);
    }
}
