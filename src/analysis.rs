//! The matching pipeline: normalization, scoring, skill diff, suggestions.

use regex::Regex;
use tracing::debug;

use crate::skills::{diff_skills, SkillMatch};
use crate::suggest::generate_suggestions;
use crate::text::clean_text;
use crate::tfidf::match_score;

/// Everything one analysis run produces. Recomputed fresh per request, never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Cosine-similarity score in [0, 100], two decimals.
    pub score: f32,
    pub skills: SkillMatch,
    pub suggestions: Vec<String>,
    /// Normalized resume text, kept for display and highlighting.
    pub resume_text: String,
    pub job_description: String,
}

pub fn analyze(resume_raw: &str, job_desc: &str) -> Analysis {
    let resume_text = clean_text(resume_raw);
    let score = match_score(&resume_text, job_desc);
    let skills = diff_skills(&resume_text, job_desc);
    let suggestions = generate_suggestions(score, &skills.missing, job_desc, &resume_text);
    debug!(
        score,
        matched = skills.matched.len(),
        missing = skills.missing.len(),
        "analysis complete"
    );

    Analysis {
        score,
        skills,
        suggestions,
        resume_text,
        job_description: job_desc.to_string(),
    }
}

/// Score color bucket used by the UI: red below 50, orange below 75, green
/// otherwise.
pub fn score_bucket(score: f32) -> ScoreBucket {
    if score < 50.0 {
        ScoreBucket::Low
    } else if score < 75.0 {
        ScoreBucket::Medium
    } else {
        ScoreBucket::High
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBucket {
    Low,
    Medium,
    High,
}

/// Wraps every matched skill in `**..**`, longest skills first so multi-word
/// entries are not split by their shorter substrings.
pub fn highlight_resume_text(resume_text: &str, matched: &[&str]) -> String {
    let mut skills: Vec<&str> = matched.to_vec();
    skills.sort_by_key(|s| std::cmp::Reverse(s.len()));

    let mut marked = resume_text.to_string();
    for skill in skills {
        let pattern = format!(r"(?i)\b({})\b", regex::escape(skill));
        if let Ok(re) = Regex::new(&pattern) {
            marked = re
                .replace_all(&marked, |caps: &regex::Captures| format!("**{}**", &caps[0]))
                .into_owned();
        }
    }
    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_python_aws_scenario() {
        let analysis = analyze("I know Python", "We need Python and AWS experience");
        assert_eq!(analysis.skills.matched, vec!["python"]);
        assert_eq!(analysis.skills.missing, vec!["aws"]);
        assert!(analysis.score > 0.0 && analysis.score < 100.0);
        assert!(!analysis.suggestions.is_empty());
    }

    #[test]
    fn empty_resume_scores_zero_with_all_jd_skills_missing() {
        let analysis = analyze("", "Python and Docker required");
        assert_eq!(analysis.score, 0.0);
        assert!(analysis.skills.matched.is_empty());
        assert_eq!(analysis.skills.missing, vec!["docker", "python"]);
    }

    #[test]
    fn resume_text_is_normalized() {
        let analysis = analyze("  two\n\nlines\t here ", "anything");
        assert_eq!(analysis.resume_text, "two lines here");
    }

    #[test]
    fn highlight_bolds_matched_skills_case_insensitively() {
        let out = highlight_resume_text("Shipped Python services", &["python"]);
        assert_eq!(out, "Shipped **Python** services");
    }

    #[test]
    fn highlight_prefers_longer_skills() {
        let out = highlight_resume_text("built a REST API layer", &["rest api"]);
        assert_eq!(out, "built a **REST API** layer");
    }

    #[test]
    fn score_buckets_follow_ui_thresholds() {
        assert_eq!(score_bucket(49.99), ScoreBucket::Low);
        assert_eq!(score_bucket(50.0), ScoreBucket::Medium);
        assert_eq!(score_bucket(74.99), ScoreBucket::Medium);
        assert_eq!(score_bucket(75.0), ScoreBucket::High);
    }
}
