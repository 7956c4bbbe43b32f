//! Key topic ranking with a TF-IDF style score.

use std::collections::{HashMap, HashSet};

use crate::analysis::core::config::TopicConfig;
use crate::analysis::ingest::tokenize::tokenize;

/// Scores are compared after rounding to multiples of `1 / SCORE_RESOLUTION`.
const SCORE_RESOLUTION: f64 = 1e9;

/// Topic candidate with score breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct TopicScore {
    /// Candidate word.
    pub word: String,
    /// `term_frequency * ln(documents / document_frequency)`.
    pub score: f64,
    /// Occurrences across all documents.
    pub occurrences: usize,
    /// Number of documents containing the word.
    pub document_frequency: usize,
    first_seen: usize,
}

/// Score every candidate word across `documents`, best first.
///
/// Term frequency is total occurrences divided by the document count.
/// Ties are broken by higher occurrence count, then by first appearance.
#[must_use]
pub fn score_topics(documents: &[&str], min_word_chars: usize) -> Vec<TopicScore> {
    let mut scores: Vec<TopicScore> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for document in documents {
        let mut seen_here: HashSet<usize> = HashSet::new();
        for token in tokenize(document, min_word_chars) {
            let slot = match index.get(&token) {
                Some(slot) => *slot,
                None => {
                    let slot = scores.len();
                    index.insert(token.clone(), slot);
                    scores.push(TopicScore {
                        word: token,
                        score: 0.0,
                        occurrences: 0,
                        document_frequency: 0,
                        first_seen: slot,
                    });
                    slot
                }
            };
            scores[slot].occurrences += 1;
            if seen_here.insert(slot) {
                scores[slot].document_frequency += 1;
            }
        }
    }

    let total = count_as_f64(documents.len());
    for candidate in &mut scores {
        let tf = count_as_f64(candidate.occurrences) / total;
        let idf = (total / count_as_f64(candidate.document_frequency)).ln();
        candidate.score = tf * idf;
    }

    scores.sort_by(|a, b| {
        quantize(b.score)
            .total_cmp(&quantize(a.score))
            .then_with(|| b.occurrences.cmp(&a.occurrences))
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    });
    scores
}

/// Top topic words for `documents`.
///
/// Returns the configured placeholder when no word qualifies.
#[must_use]
pub fn rank_topics(documents: &[&str], config: &TopicConfig) -> Vec<String> {
    let topics: Vec<String> = score_topics(documents, config.min_word_chars)
        .into_iter()
        .take(config.max_topics)
        .map(|candidate| candidate.word)
        .collect();

    if topics.is_empty() {
        vec![config.placeholder.clone()]
    } else {
        topics
    }
}

fn quantize(score: f64) -> f64 {
    (score * SCORE_RESOLUTION).round()
}

fn count_as_f64(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}
