//! Line-scan extraction of education, certification, and language mentions.

use crate::extraction::skills::contains_term;

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "diploma", "certificate", "b.tech", "m.tech",
    "b.e", "m.e", "b.sc", "m.sc", "mba", "bca", "mca",
];

const CERT_KEYWORDS: &[&str] = &[
    "certified", "certification", "certificate", "aws certified", "azure certified", "pmp",
    "scrum master", "cisco", "comptia", "oracle certified",
];

const PROGRAMMING_LANGUAGES: &[&str] = &[
    "python", "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust",
];

const SPOKEN_LANGUAGES: &[&str] = &[
    "english", "spanish", "french", "german", "chinese", "japanese", "hindi",
];

/// Lines mentioning a degree keyword, title-cased, deduplicated.
pub fn extract_education(text: &str) -> Vec<String> {
    keyword_lines(text, EDUCATION_KEYWORDS)
}

/// Lines mentioning a certification keyword.
pub fn extract_certifications(text: &str) -> Vec<String> {
    keyword_lines(text, CERT_KEYWORDS)
}

/// Programming and spoken language names found anywhere in the text.
pub fn extract_languages(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut languages: Vec<String> = Vec::new();

    for lang in PROGRAMMING_LANGUAGES.iter().chain(SPOKEN_LANGUAGES) {
        if contains_term(&lower, lang) {
            let titled = title_word(lang);
            if !languages.contains(&titled) {
                languages.push(titled);
            }
        }
    }

    languages.sort();
    languages
}

fn keyword_lines(text: &str, keywords: &[&str]) -> Vec<String> {
    let mut results: Vec<String> = Vec::new();

    for line in text.lines() {
        let lower = line.to_lowercase();
        if keywords.iter().any(|kw| lower.contains(kw)) {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !results.iter().any(|r| r.eq_ignore_ascii_case(trimmed)) {
                results.push(trimmed.to_string());
            }
        }
    }

    results
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_lines_found() {
        let text = "Education\nBachelor of Technology in Computer Science\nGPA 3.8";
        let education = extract_education(text);
        assert_eq!(education.len(), 1);
        assert!(education[0].contains("Bachelor"));
    }

    #[test]
    fn test_education_deduplicates_lines() {
        let text = "Master of Science\nMaster of Science";
        assert_eq!(extract_education(text).len(), 1);
    }

    #[test]
    fn test_certifications_found() {
        let text = "AWS Certified Solutions Architect\nScrum Master certification 2022";
        let certs = extract_certifications(text);
        assert_eq!(certs.len(), 2);
    }

    #[test]
    fn test_languages_mixed() {
        let text = "Fluent in English and Hindi. Daily coding in Python and Rust.";
        let langs = extract_languages(text);
        for expected in ["English", "Hindi", "Python", "Rust"] {
            assert!(langs.contains(&expected.to_string()), "Missing {expected}");
        }
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_education("").is_empty());
        assert!(extract_certifications("").is_empty());
        assert!(extract_languages("").is_empty());
    }
}
