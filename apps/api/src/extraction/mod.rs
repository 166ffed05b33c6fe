//! Candidate extraction — turns plain resume text (already decoded from
//! PDF/DOCX upstream) into the structured profile the scorers consume.

pub mod contact;
pub mod experience;
pub mod job;
pub mod sections;
pub mod skills;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extraction::experience::ExperienceLevel;

/// Structured candidate record. Immutable once produced, owned by the scan
/// request that created it, discarded after scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Canonical skill names, sorted and deduplicated.
    pub skills: Vec<String>,
    pub experience_years: f64,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub social_links: HashMap<String, String>,
    pub extracted_at: DateTime<Utc>,
}

/// How complete the extraction came out, reported alongside the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub total_skills_found: usize,
    pub has_contact_info: bool,
    pub has_address: bool,
    pub experience_level: ExperienceLevel,
    pub education_count: usize,
    pub certification_count: usize,
    pub language_count: usize,
    pub social_profiles: usize,
    pub extraction_quality: ExtractionQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Runs every extractor over the resume text. Degenerate input (empty text)
/// produces an empty-but-valid profile, never an error.
pub fn extract_profile(resume_text: &str, filename: Option<&str>) -> CandidateProfile {
    CandidateProfile {
        name: contact::extract_name(resume_text, filename),
        email: contact::extract_email(resume_text),
        phone: contact::extract_phone(resume_text),
        address: contact::extract_address(resume_text),
        skills: skills::extract_skills(resume_text),
        experience_years: experience::extract_experience_years(resume_text),
        education: sections::extract_education(resume_text),
        certifications: sections::extract_certifications(resume_text),
        languages: sections::extract_languages(resume_text),
        social_links: contact::extract_social_links(resume_text),
        extracted_at: Utc::now(),
    }
}

impl CandidateProfile {
    pub fn summary(&self) -> ExtractionSummary {
        ExtractionSummary {
            total_skills_found: self.skills.len(),
            has_contact_info: self.email.is_some() || self.phone.is_some(),
            has_address: self.address.is_some(),
            experience_level: ExperienceLevel::from_years(self.experience_years),
            education_count: self.education.len(),
            certification_count: self.certifications.len(),
            language_count: self.languages.len(),
            social_profiles: self.social_links.len(),
            extraction_quality: self.quality(),
        }
    }

    /// Weighted field-presence score: name 20, email 20, phone 15,
    /// address 10, skills 20, experience 15.
    fn quality(&self) -> ExtractionQuality {
        let mut score = 0u32;
        if self.name.is_some() {
            score += 20;
        }
        if self.email.is_some() {
            score += 20;
        }
        if self.phone.is_some() {
            score += 15;
        }
        if self.address.is_some() {
            score += 10;
        }
        if !self.skills.is_empty() {
            score += 20;
        }
        if self.experience_years > 0.0 {
            score += 15;
        }

        if score >= 80 {
            ExtractionQuality::Excellent
        } else if score >= 60 {
            ExtractionQuality::Good
        } else if score >= 40 {
            ExtractionQuality::Fair
        } else {
            ExtractionQuality::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
John Doe
Software Engineer
john.doe@example.com | +1 5551234567 | Seattle, WA 98101
linkedin.com/in/john-doe

5 years of experience building web applications.
Skills: Python, JavaScript, React, Django, SQL, Git, AWS
Education: Bachelor of Science in Computer Science
AWS Certified Developer
Languages: English, Hindi";

    #[test]
    fn test_full_profile_extraction() {
        let profile = extract_profile(SAMPLE_RESUME, Some("john_doe.pdf"));
        assert_eq!(profile.name.as_deref(), Some("John Doe"));
        assert_eq!(profile.email.as_deref(), Some("john.doe@example.com"));
        assert!(profile.phone.is_some());
        assert!(profile.address.is_some());
        assert_eq!(profile.experience_years, 5.0);
        assert!(profile.skills.contains(&"Python".to_string()));
        assert!(profile.skills.contains(&"AWS".to_string()));
        assert_eq!(profile.education.len(), 1);
        assert!(!profile.certifications.is_empty());
        assert!(profile.languages.contains(&"English".to_string()));
        assert!(profile.social_links.contains_key("linkedin"));
    }

    #[test]
    fn test_empty_resume_yields_valid_profile() {
        let profile = extract_profile("", None);
        assert_eq!(profile.name, None);
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_years, 0.0);
    }

    #[test]
    fn test_summary_counts_and_quality() {
        let profile = extract_profile(SAMPLE_RESUME, None);
        let summary = profile.summary();
        assert!(summary.has_contact_info);
        assert!(summary.has_address);
        assert_eq!(summary.experience_level, ExperienceLevel::MidLevel);
        assert_eq!(summary.extraction_quality, ExtractionQuality::Excellent);
    }

    #[test]
    fn test_empty_profile_quality_is_poor() {
        let profile = extract_profile("", None);
        assert_eq!(profile.summary().extraction_quality, ExtractionQuality::Poor);
    }
}
