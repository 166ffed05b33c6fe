//! Skill vocabulary — the canonical skill table, alias folding, and the
//! keyword scan used by both resume extraction and JD requirement mining.

/// Canonical skill name plus the aliases folded into it.
/// Matching is case-insensitive; the canonical form is the display form.
struct SkillEntry {
    canonical: &'static str,
    aliases: &'static [&'static str],
}

const SKILL_TABLE: &[SkillEntry] = &[
    // Programming languages
    SkillEntry { canonical: "Python", aliases: &["py"] },
    SkillEntry { canonical: "Java", aliases: &[] },
    SkillEntry { canonical: "JavaScript", aliases: &["js", "ecmascript"] },
    SkillEntry { canonical: "TypeScript", aliases: &["ts"] },
    SkillEntry { canonical: "C++", aliases: &["cpp"] },
    SkillEntry { canonical: "C#", aliases: &["csharp"] },
    SkillEntry { canonical: "Go", aliases: &["golang"] },
    SkillEntry { canonical: "Rust", aliases: &[] },
    SkillEntry { canonical: "Swift", aliases: &[] },
    SkillEntry { canonical: "Kotlin", aliases: &[] },
    SkillEntry { canonical: "PHP", aliases: &[] },
    SkillEntry { canonical: "Ruby", aliases: &[] },
    SkillEntry { canonical: "Scala", aliases: &[] },
    SkillEntry { canonical: "MATLAB", aliases: &[] },
    SkillEntry { canonical: "Bash", aliases: &["shell scripting"] },
    SkillEntry { canonical: "PowerShell", aliases: &[] },
    // Web technologies
    SkillEntry { canonical: "HTML", aliases: &["html5"] },
    SkillEntry { canonical: "CSS", aliases: &["css3"] },
    SkillEntry { canonical: "Sass", aliases: &["scss"] },
    SkillEntry { canonical: "React", aliases: &["reactjs", "react.js"] },
    SkillEntry { canonical: "Angular", aliases: &["angularjs"] },
    SkillEntry { canonical: "Vue", aliases: &["vuejs", "vue.js"] },
    SkillEntry { canonical: "Next.js", aliases: &["nextjs"] },
    SkillEntry { canonical: "Node.js", aliases: &["nodejs", "node"] },
    SkillEntry { canonical: "Express.js", aliases: &["expressjs", "express"] },
    SkillEntry { canonical: "Django", aliases: &[] },
    SkillEntry { canonical: "Flask", aliases: &[] },
    SkillEntry { canonical: "FastAPI", aliases: &[] },
    SkillEntry { canonical: "Spring", aliases: &["spring boot"] },
    SkillEntry { canonical: "Laravel", aliases: &[] },
    SkillEntry { canonical: "Rails", aliases: &["ruby on rails"] },
    SkillEntry { canonical: "jQuery", aliases: &[] },
    SkillEntry { canonical: "Bootstrap", aliases: &[] },
    SkillEntry { canonical: "Tailwind", aliases: &["tailwindcss"] },
    SkillEntry { canonical: "Webpack", aliases: &[] },
    // Databases
    SkillEntry { canonical: "MySQL", aliases: &[] },
    SkillEntry { canonical: "PostgreSQL", aliases: &["postgres"] },
    SkillEntry { canonical: "MongoDB", aliases: &["mongo"] },
    SkillEntry { canonical: "Redis", aliases: &[] },
    SkillEntry { canonical: "SQLite", aliases: &[] },
    SkillEntry { canonical: "Oracle", aliases: &[] },
    SkillEntry { canonical: "SQL", aliases: &[] },
    SkillEntry { canonical: "Cassandra", aliases: &[] },
    SkillEntry { canonical: "Elasticsearch", aliases: &["elastic search"] },
    SkillEntry { canonical: "DynamoDB", aliases: &[] },
    SkillEntry { canonical: "Firebase", aliases: &[] },
    // Cloud & DevOps
    SkillEntry { canonical: "AWS", aliases: &["amazon web services"] },
    SkillEntry { canonical: "Azure", aliases: &[] },
    SkillEntry { canonical: "GCP", aliases: &["google cloud"] },
    SkillEntry { canonical: "Docker", aliases: &[] },
    SkillEntry { canonical: "Kubernetes", aliases: &["k8s"] },
    SkillEntry { canonical: "Jenkins", aliases: &[] },
    SkillEntry { canonical: "Git", aliases: &[] },
    SkillEntry { canonical: "GitHub", aliases: &[] },
    SkillEntry { canonical: "GitLab", aliases: &[] },
    SkillEntry { canonical: "Terraform", aliases: &[] },
    SkillEntry { canonical: "Ansible", aliases: &[] },
    SkillEntry { canonical: "Nginx", aliases: &[] },
    SkillEntry { canonical: "Helm", aliases: &[] },
    SkillEntry { canonical: "Prometheus", aliases: &[] },
    SkillEntry { canonical: "Grafana", aliases: &[] },
    // AI / ML / data science
    SkillEntry { canonical: "Machine Learning", aliases: &["ml"] },
    SkillEntry { canonical: "Deep Learning", aliases: &[] },
    SkillEntry { canonical: "Artificial Intelligence", aliases: &["ai"] },
    SkillEntry { canonical: "Data Science", aliases: &["datascience"] },
    SkillEntry {
        canonical: "NLP",
        aliases: &["natural language processing"],
    },
    SkillEntry { canonical: "Computer Vision", aliases: &[] },
    SkillEntry { canonical: "TensorFlow", aliases: &[] },
    SkillEntry { canonical: "PyTorch", aliases: &[] },
    SkillEntry { canonical: "Keras", aliases: &[] },
    SkillEntry { canonical: "scikit-learn", aliases: &["sklearn"] },
    SkillEntry { canonical: "Pandas", aliases: &[] },
    SkillEntry { canonical: "NumPy", aliases: &[] },
    SkillEntry { canonical: "OpenCV", aliases: &[] },
    SkillEntry { canonical: "Transformers", aliases: &["hugging face"] },
    SkillEntry { canonical: "LLM", aliases: &["large language models"] },
    // Big data
    SkillEntry { canonical: "Hadoop", aliases: &[] },
    SkillEntry { canonical: "Spark", aliases: &["apache spark"] },
    SkillEntry { canonical: "Kafka", aliases: &["apache kafka"] },
    SkillEntry { canonical: "Airflow", aliases: &[] },
    // Mobile
    SkillEntry { canonical: "Android", aliases: &[] },
    SkillEntry { canonical: "iOS", aliases: &[] },
    SkillEntry { canonical: "React Native", aliases: &[] },
    SkillEntry { canonical: "Flutter", aliases: &[] },
    SkillEntry { canonical: "SwiftUI", aliases: &[] },
    // Testing & quality
    SkillEntry { canonical: "JUnit", aliases: &[] },
    SkillEntry { canonical: "pytest", aliases: &[] },
    SkillEntry { canonical: "Selenium", aliases: &[] },
    SkillEntry { canonical: "Cypress", aliases: &[] },
    SkillEntry { canonical: "Jest", aliases: &[] },
    SkillEntry { canonical: "GitHub Actions", aliases: &[] },
    // Methodologies
    SkillEntry { canonical: "Agile", aliases: &[] },
    SkillEntry { canonical: "Scrum", aliases: &[] },
    SkillEntry { canonical: "Kanban", aliases: &[] },
    SkillEntry {
        canonical: "DevOps",
        aliases: &["dev ops", "development operations"],
    },
    SkillEntry {
        canonical: "CI/CD",
        aliases: &["continuous integration", "continuous deployment"],
    },
    SkillEntry { canonical: "TDD", aliases: &["test driven development"] },
    // APIs & architecture
    SkillEntry {
        canonical: "REST",
        aliases: &["rest api", "rest apis", "restful"],
    },
    SkillEntry { canonical: "GraphQL", aliases: &["graph ql", "graph-ql"] },
    SkillEntry { canonical: "gRPC", aliases: &[] },
    SkillEntry { canonical: "WebSocket", aliases: &["websockets"] },
    SkillEntry { canonical: "Microservices", aliases: &["micro services"] },
    // Security
    SkillEntry { canonical: "OAuth", aliases: &["oauth2"] },
    SkillEntry { canonical: "JWT", aliases: &["json web tokens"] },
    SkillEntry { canonical: "TLS", aliases: &["ssl"] },
    // BI & data engineering
    SkillEntry { canonical: "Tableau", aliases: &[] },
    SkillEntry { canonical: "Power BI", aliases: &["powerbi"] },
    SkillEntry { canonical: "ETL", aliases: &[] },
    SkillEntry { canonical: "Data Warehouse", aliases: &["data warehousing"] },
    SkillEntry { canonical: "Data Pipeline", aliases: &["data pipelines"] },
];

/// Folds a skill string to its canonical display form via the alias table.
/// Unknown skills come back trimmed but otherwise untouched, so callers can
/// still score against vocabularies we do not know about.
pub fn canonicalize(skill: &str) -> String {
    let needle = skill.trim().to_lowercase();
    for entry in SKILL_TABLE {
        if entry.canonical.to_lowercase() == needle {
            return entry.canonical.to_string();
        }
        if entry.aliases.iter().any(|a| *a == needle) {
            return entry.canonical.to_string();
        }
    }
    skill.trim().to_string()
}

/// Lowercased canonical form, the key used for set intersection in the
/// skill scorer.
pub fn normalized_key(skill: &str) -> String {
    canonicalize(skill).to_lowercase()
}

/// Scans free text for known skills. Returns canonical names, deduplicated
/// and sorted.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for entry in SKILL_TABLE {
        let canonical_lower = entry.canonical.to_lowercase();
        let hit = contains_term(&lower, &canonical_lower)
            || entry.aliases.iter().any(|a| contains_term(&lower, a));
        if hit {
            found.push(entry.canonical.to_string());
        }
    }

    found.sort();
    found.dedup();
    found
}

/// Substring match with word boundaries on both sides. Plain `contains` is
/// not enough: "java" must not match inside "javascript", and short aliases
/// like "go" or "ml" would otherwise fire on almost any text. Non-alphanumeric
/// term characters ('+', '#', '.', '/') sit at the boundary themselves, so
/// "c++" and "ci/cd" match without special cases.
pub(crate) fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    let bytes = haystack.as_bytes();
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(term) {
        let begin = start + pos;
        let end = begin + term.len();

        let boundary_before = begin == 0 || !bytes[begin - 1].is_ascii_alphanumeric();
        let term_edges_alnum = term.as_bytes()[term.len() - 1].is_ascii_alphanumeric();
        let boundary_after =
            end == bytes.len() || !term_edges_alnum || !bytes[end].is_ascii_alphanumeric();

        if boundary_before && boundary_after {
            return true;
        }
        start = begin + 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_skills_from_resume_text() {
        let text = "Experienced in Python, Django and React. Daily tools: Git, AWS, SQL.";
        let skills = extract_skills(text);
        for expected in ["Python", "Django", "React", "Git", "AWS", "SQL"] {
            assert!(skills.contains(&expected.to_string()), "Missing {expected}");
        }
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        let skills = extract_skills("I write JavaScript every day.");
        assert!(skills.contains(&"JavaScript".to_string()));
        assert!(!skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_alias_resolves_to_canonical() {
        let skills = extract_skills("Strong background in ML and k8s deployments.");
        assert!(skills.contains(&"Machine Learning".to_string()));
        assert!(skills.contains(&"Kubernetes".to_string()));
    }

    #[test]
    fn test_non_alphanumeric_terms_match() {
        let skills = extract_skills("Languages: C++ and C#. Pipelines via CI/CD.");
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"C#".to_string()));
        assert!(skills.contains(&"CI/CD".to_string()));
    }

    #[test]
    fn test_short_alias_needs_word_boundary() {
        // "go" appears inside "algorithms"; must not match the language.
        let skills = extract_skills("Designed sorting algorithms for embedded targets.");
        assert!(!skills.contains(&"Go".to_string()));
    }

    #[test]
    fn test_canonicalize_folds_aliases() {
        assert_eq!(canonicalize("JS"), "JavaScript");
        assert_eq!(canonicalize("nodejs"), "Node.js");
        assert_eq!(canonicalize("ml"), "Machine Learning");
        assert_eq!(canonicalize("postgres"), "PostgreSQL");
    }

    #[test]
    fn test_canonicalize_is_case_insensitive_on_canonical_names() {
        assert_eq!(canonicalize("PYTHON"), "Python");
        assert_eq!(canonicalize("python"), "Python");
    }

    #[test]
    fn test_canonicalize_passes_unknown_skills_through() {
        assert_eq!(canonicalize("  Fortran "), "Fortran");
    }

    #[test]
    fn test_normalized_key_is_lowercase_canonical() {
        assert_eq!(normalized_key("JS"), "javascript");
        assert_eq!(normalized_key("Machine Learning"), "machine learning");
    }

    #[test]
    fn test_extract_skills_deduplicates_and_sorts() {
        let skills = extract_skills("Python, python, PYTHON and AWS");
        assert_eq!(skills, vec!["AWS".to_string(), "Python".to_string()]);
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        assert!(extract_skills("").is_empty());
    }
}
