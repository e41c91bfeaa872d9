use std::collections::{HashMap, HashSet};

use crate::utils::compute_cosine_similarity;

pub struct TfIdf {
    documents: Vec<String>,
    vocab: HashMap<String, usize>,
    idf: Vec<f32>,
}

pub struct TfIdfBuilder {
    documents: Vec<String>,
}

impl TfIdfBuilder {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    pub fn add(&mut self, document: &str) {
        self.documents.push(document.to_lowercase());
    }

    pub fn build(self) -> TfIdf {
        let mut vocab: HashMap<String, usize> = HashMap::new();
        let mut doc_count: HashMap<String, usize> = HashMap::new();

        // Build vocabulary and per-term document frequency
        for doc in &self.documents {
            let mut seen_words = HashSet::new();
            for word in tokens(doc) {
                let next_id = vocab.len();
                vocab.entry(word.clone()).or_insert(next_id);
                if seen_words.insert(word.clone()) {
                    *doc_count.entry(word).or_insert(0) += 1;
                }
            }
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1. Terms present in every
        // document keep a nonzero weight, so identical documents produce
        // identical nonzero vectors.
        let total_docs = self.documents.len() as f32;
        let mut idf = vec![0.0; vocab.len()];
        for (word, df) in doc_count {
            let score = ((1.0 + total_docs) / (1.0 + df as f32)).ln() + 1.0;
            idf[vocab[&word]] = score;
        }

        TfIdf {
            documents: self.documents,
            vocab,
            idf,
        }
    }
}

impl TfIdf {
    /// TF-IDF vector of the `index`-th document over the shared vocabulary.
    pub fn vector(&self, index: usize) -> Vec<f32> {
        let mut weights = vec![0.0; self.vocab.len()];
        let Some(doc) = self.documents.get(index) else {
            return weights;
        };
        for word in tokens(doc) {
            if let Some(&id) = self.vocab.get(&word) {
                weights[id] += self.idf[id];
            }
        }
        weights
    }
}

/// Cosine similarity between the TF-IDF vectors of the two texts, scaled to
/// [0, 100] and rounded to two decimals. Empty or fully disjoint texts score
/// 0.00; identical texts score 100.00.
pub fn match_score(resume_text: &str, job_desc: &str) -> f32 {
    let mut builder = TfIdfBuilder::new();
    builder.add(resume_text);
    builder.add(job_desc);
    let model = builder.build();

    let similarity = compute_cosine_similarity(&model.vector(0), &model.vector(1));
    (similarity.clamp(0.0, 1.0) * 100.0 * 100.0).round() / 100.0
}

fn tokens(doc: &str) -> impl Iterator<Item = String> + '_ {
    doc.split_whitespace().filter_map(|word| {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            None
        } else {
            Some(word.to_lowercase())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_100() {
        let text = "Experienced Python developer with AWS and Docker skills";
        assert_eq!(match_score(text, text), 100.0);
    }

    #[test]
    fn disjoint_texts_score_0() {
        assert_eq!(match_score("alpha beta gamma", "delta epsilon zeta"), 0.0);
    }

    #[test]
    fn empty_texts_do_not_panic() {
        assert_eq!(match_score("", ""), 0.0);
        assert_eq!(match_score("", "some job description"), 0.0);
        assert_eq!(match_score("some resume", ""), 0.0);
    }

    #[test]
    fn partial_overlap_scores_between_bounds() {
        let score = match_score("I know Python", "We need Python and AWS experience");
        assert!(score > 0.0 && score < 100.0, "score was {score}");
    }

    #[test]
    fn score_is_case_insensitive() {
        assert_eq!(match_score("PYTHON AWS", "python aws"), 100.0);
    }

    #[test]
    fn punctuation_is_trimmed_from_tokens() {
        assert_eq!(match_score("python, aws.", "python aws"), 100.0);
    }
}
