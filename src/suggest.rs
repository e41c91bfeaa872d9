//! Rule-based improvement suggestions derived from the match result.

use std::collections::HashSet;

use crate::skills::{CLOUD_DEVOPS, DATABASES, DATA_ML, SECURITY, WEB};
use crate::text::contains_any;

const SENIORITY_CUES: &[&str] = &["lead", "mentor", "architecture", "design scalable", "ownership"];
const PROJECT_CUES: &[&str] = &["project", "capstone", "case study"];
const CLOUD_PROVIDERS: &[&str] = &["aws", "azure", "gcp"];
const CERT_CUES: &[&str] = &["certified", "certificate"];
const AGILE_CUES: &[&str] = &["agile", "scrum"];

const MAX_SUGGESTIONS: usize = 10;

/// Deterministic suggestion ladder. Branches are evaluated in fixed order,
/// the final list is deduplicated preserving first appearance and capped at
/// ten entries.
pub fn generate_suggestions(
    score: f32,
    missing: &[&'static str],
    job_desc: &str,
    resume_text: &str,
) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    // Score-based guidance
    if score < 50.0 {
        suggestions.push(
            "Your score is low. Rewrite key sections with clear, keyword-rich bullet points \
             aligned to the JD (Skills, Experience, Projects)."
                .to_string(),
        );
        suggestions.push(
            "Add 2-3 recent, measurable achievements (e.g., 'Improved API latency by 35% using \
             Redis cache')."
                .to_string(),
        );
    } else if score < 75.0 {
        suggestions.push(
            "Good start. Add missing keywords and strengthen project descriptions with metrics \
             and tooling details."
                .to_string(),
        );
    } else {
        suggestions.push(
            "Strong overall match. Do a final pass to mirror JD phrasing and tighten bullets."
                .to_string(),
        );
    }

    // Missing skills, grouped by cluster
    let clusters: [(&[&str], &str); 5] = [
        (CLOUD_DEVOPS, "cloud/devops"),
        (DATA_ML, "data/ML"),
        (WEB, "web/full-stack"),
        (DATABASES, "databases"),
        (SECURITY, "security"),
    ];
    for (cluster, label) in clusters {
        let gaps: Vec<&str> = missing
            .iter()
            .copied()
            .filter(|s| cluster.contains(s))
            .collect();
        if !gaps.is_empty() {
            let listed = gaps[..gaps.len().min(6)].join(", ");
            suggestions.push(format!(
                "Add {label} evidence: {listed} in Projects/Experience/Skills."
            ));
        }
    }

    // JD seniority cues
    if contains_any(job_desc, SENIORITY_CUES) {
        suggestions.push(
            "JD hints seniority: highlight leadership, system design decisions, and mentoring \
             impact."
                .to_string(),
        );
    }

    // Projects & certification nudges
    if !contains_any(resume_text, PROJECT_CUES) {
        suggestions.push(
            "Add a Projects section with 2-3 bullets per project focusing on problem -> solution \
             -> impact."
                .to_string(),
        );
    }
    if contains_any(job_desc, CLOUD_PROVIDERS) && !contains_any(resume_text, CERT_CUES) {
        suggestions.push(
            "Consider listing relevant cloud certifications (e.g., AWS CCP/Associate, Azure \
             Fundamentals)."
                .to_string(),
        );
    }

    // Soft skills if the JD mentions agile/scrum
    if contains_any(job_desc, AGILE_CUES) && !contains_any(resume_text, AGILE_CUES) {
        suggestions.push(
            "Mention Agile/Scrum collaboration (ceremonies, cross-functional teamwork) where \
             applicable."
                .to_string(),
        );
    }

    // Formatting hygiene, always
    suggestions.push(
        "Ensure consistent formatting: section headings, bullet alignment, and unified tense per \
         section."
            .to_string(),
    );

    // Deduplicate preserving order, keep it concise
    let mut seen = HashSet::new();
    suggestions.retain(|s| seen.insert(s.clone()));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_and_duplicate_free() {
        let missing = [
            "aws",
            "docker",
            "pandas",
            "react",
            "sql",
            "firewall",
            "kubernetes",
        ];
        let jd = "lead role with aws, agile, design scalable systems";
        let s = generate_suggestions(10.0, &missing, jd, "short resume");
        assert!(s.len() <= 10);
        let unique: HashSet<&String> = s.iter().collect();
        assert_eq!(unique.len(), s.len());
    }

    #[test]
    fn low_score_adds_two_remediations() {
        let s = generate_suggestions(42.0, &[], "plain jd", "resume with project work");
        assert!(s[0].starts_with("Your score is low."));
        assert!(s[1].starts_with("Add 2-3 recent"));
    }

    #[test]
    fn mid_and_high_scores_add_one_line_each() {
        let mid = generate_suggestions(60.0, &[], "jd", "resume project");
        assert!(mid[0].starts_with("Good start."));
        let high = generate_suggestions(90.0, &[], "jd", "resume project");
        assert!(high[0].starts_with("Strong overall match."));
    }

    #[test]
    fn clusters_list_at_most_six_missing_skills() {
        let missing = [
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "terraform",
            "jenkins",
        ];
        let s = generate_suggestions(80.0, &missing, "jd", "resume project");
        let cloud_line = s
            .iter()
            .find(|l| l.starts_with("Add cloud/devops evidence"))
            .expect("cloud cluster line missing");
        assert_eq!(cloud_line.matches(", ").count(), 5);
    }

    #[test]
    fn certification_nudge_requires_cloud_jd_and_uncertified_resume() {
        let with = generate_suggestions(80.0, &[], "deploy on aws", "resume project");
        assert!(with.iter().any(|s| s.contains("cloud certifications")));
        let without = generate_suggestions(80.0, &[], "deploy on aws", "aws certified, project");
        assert!(!without.iter().any(|s| s.contains("cloud certifications")));
    }

    #[test]
    fn agile_nudge_only_when_resume_lacks_it() {
        let s = generate_suggestions(80.0, &[], "scrum team", "agile resume project");
        assert!(!s.iter().any(|l| l.contains("Agile/Scrum collaboration")));
    }

    #[test]
    fn projects_nudge_when_resume_has_no_project_terms() {
        let s = generate_suggestions(80.0, &[], "jd", "just work history");
        assert!(s.iter().any(|l| l.starts_with("Add a Projects section")));
    }

    #[test]
    fn formatting_line_is_always_last_branch() {
        let s = generate_suggestions(80.0, &[], "jd", "resume project");
        assert!(s
            .last()
            .map(|l| l.starts_with("Ensure consistent formatting"))
            .unwrap_or(false));
    }
}
