//! Job requirement derivation — turns a raw job description (plus whatever
//! the caller supplied explicitly) into the structured `JobRequirement` the
//! scorers consume.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extraction::skills::{self, contains_term};

static REQUIRED_YEARS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d+)\s*\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)",
        r"(?:experience|exp)\s*(?:of|with)?\s*[:.]?\s*(\d+)\s*\+?\s*(?:years?|yrs?)",
        r"(?:minimum|min\.?|at\s+least)\s*(?:of\s*)?(\d+)\s*\+?\s*(?:years?|yrs?)",
        r"(\d+)\s*\+?\s*(?:years?|yrs?)\s*(?:experience\s*)?(?:required|needed|preferred)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("required-years pattern must compile"))
    .collect()
});

/// Ranges like "3-5 years" or "between 3 and 5 years" — the higher bound wins.
static RANGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d+)\s*[-\u{2013}\u{2014}]\s*(\d+)\s*(?:years?|yrs?)",
        r"(?:between\s+)?(\d+)\s*(?:and|to)\s+(\d+)\s*(?:years?|yrs?)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("range pattern must compile"))
    .collect()
});

const SENIOR_WORDS: &[&str] = &["senior", "lead", "principal", "architect", "staff"];
const JUNIOR_WORDS: &[&str] = &["junior", "entry level", "entry-level", "graduate", "intern", "fresher"];
const MID_WORDS: &[&str] = &["mid-level", "mid level"];

/// Coarse role band inferred from the experience requirement. Only used to
/// pick the optimal-range width in the experience scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobLevel {
    Junior,
    Mid,
    Senior,
}

impl JobLevel {
    pub fn from_required_years(years: f64) -> Self {
        if years <= 2.0 {
            JobLevel::Junior
        } else if years <= 5.0 {
            JobLevel::Mid
        } else {
            JobLevel::Senior
        }
    }
}

/// Everything the scorers need to know about a job. Built once per scan,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    /// Canonical skill names.
    pub required_skills: Vec<String>,
    pub required_experience_years: f64,
    pub description_text: String,
    pub job_level: JobLevel,
}

impl JobRequirement {
    /// Builds a requirement from the JD text and optional explicit overrides.
    /// Skills and years the caller did not supply are mined from the text.
    pub fn derive(
        description: &str,
        explicit_skills: Option<Vec<String>>,
        explicit_years: Option<f64>,
    ) -> Self {
        let required_skills = match explicit_skills {
            Some(list) if !list.is_empty() => {
                let mut canonical: Vec<String> =
                    list.iter().map(|s| skills::canonicalize(s)).collect();
                canonical.sort();
                canonical.dedup();
                canonical
            }
            _ => skills::extract_skills(description),
        };

        let required_experience_years = explicit_years
            .map(|y| y.max(0.0))
            .unwrap_or_else(|| required_experience_from_jd(description));

        JobRequirement {
            required_skills,
            required_experience_years,
            description_text: description.to_string(),
            job_level: JobLevel::from_required_years(required_experience_years),
        }
    }
}

/// Mines the required years of experience from JD text. Explicit figures
/// (including ranges, where the upper bound wins) beat seniority-word
/// defaults; a JD that never mentions experience requires none.
pub fn required_experience_from_jd(description: &str) -> f64 {
    if description.is_empty() {
        return 0.0;
    }
    let lower = description.to_lowercase();

    let mut max_years = 0.0_f64;
    for pattern in REQUIRED_YEARS_PATTERNS.iter() {
        for caps in pattern.captures_iter(&lower) {
            if let Some(m) = caps.get(1) {
                if let Ok(years) = m.as_str().parse::<f64>() {
                    max_years = max_years.max(years);
                }
            }
        }
    }
    for pattern in RANGE_PATTERNS.iter() {
        for caps in pattern.captures_iter(&lower) {
            for idx in 1..=2 {
                if let Some(m) = caps.get(idx) {
                    if let Ok(years) = m.as_str().parse::<f64>() {
                        max_years = max_years.max(years);
                    }
                }
            }
        }
    }
    if max_years > 0.0 {
        return max_years;
    }

    // No explicit figure — fall back to seniority wording.
    if SENIOR_WORDS.iter().any(|w| contains_term(&lower, w)) {
        5.0
    } else if JUNIOR_WORDS.iter().any(|w| contains_term(&lower, w)) {
        1.0
    } else if MID_WORDS.iter().any(|w| contains_term(&lower, w)) {
        3.0
    } else if lower.contains("experience") {
        2.0
    } else {
        0.0
    }
}
