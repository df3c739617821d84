//! Feature Scoring Engine: weighted voting over candidate fragments for one field.
//!
//! Algorithm:
//! 1. Every fragment starts as a candidate with score 0.
//! 2. A matching discriminative feature adds its weight to the fragment.
//! 3. A matching extractive feature adds its weight to the fragment when the
//!    extracted value equals the fragment text; otherwise the value becomes a new
//!    candidate (appended after the fragments) carrying the weight.
//! 4. The highest score wins. Ties go to the candidate whose source fragment
//!    comes first in reading order; a fragment precedes the values extracted
//!    from it.

use serde::{Deserialize, Serialize};

use crate::models::Fragment;

pub type Predicate<'a> = Box<dyn Fn(&Fragment) -> bool + 'a>;
pub type Extractor<'a> = Box<dyn Fn(&Fragment) -> Option<String> + 'a>;

/// A weighted test over a fragment.
pub enum Feature<'a> {
    /// Contributes only to the score.
    Discriminative(Predicate<'a>, i32),
    /// Contributes to the score and supplies the output value.
    Extractive(Extractor<'a>, i32),
}

impl<'a> Feature<'a> {
    pub fn discriminative(predicate: impl Fn(&Fragment) -> bool + 'a, weight: i32) -> Self {
        Feature::Discriminative(Box::new(predicate), weight)
    }

    pub fn extractive(extractor: impl Fn(&Fragment) -> Option<String> + 'a, weight: i32) -> Self {
        Feature::Extractive(Box::new(extractor), weight)
    }
}

/// Score accumulated by one candidate text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextScore {
    pub text: String,
    pub score: i32,
    /// Set when an extractive feature produced or confirmed this text.
    pub matched: bool,
    /// Index of the fragment this text came from.
    pub source: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOptions {
    /// Return `""` when the best score is not positive.
    pub require_positive: bool,
    /// Join every top-scoring text instead of taking the first.
    pub concatenate_ties: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            require_positive: true,
            concatenate_ties: false,
        }
    }
}

impl SelectOptions {
    /// Always return the best candidate, however low it scored.
    pub fn best_effort() -> Self {
        Self {
            require_positive: false,
            ..Self::default()
        }
    }
}

/// Winning text for a field plus the full candidate table for debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub text: String,
    pub scores: Vec<TextScore>,
}

/// Scores every fragment against `features`, in input order.
pub fn compute_feature_scores(fragments: &[&Fragment], features: &[Feature<'_>]) -> Vec<TextScore> {
    let mut scores: Vec<TextScore> = fragments
        .iter()
        .enumerate()
        .map(|(i, item)| TextScore {
            text: item.text.clone(),
            score: 0,
            matched: false,
            source: i,
        })
        .collect();

    for (i, &item) in fragments.iter().enumerate() {
        for feature in features {
            match feature {
                Feature::Discriminative(predicate, weight) => {
                    if predicate(item) {
                        scores[i].score += *weight;
                    }
                }
                Feature::Extractive(extract, weight) => {
                    let Some(value) = extract(item) else {
                        continue;
                    };
                    if value == item.text {
                        scores[i].score += *weight;
                        scores[i].matched = true;
                    } else {
                        scores.push(TextScore {
                            text: value,
                            score: *weight,
                            matched: true,
                            source: i,
                        });
                    }
                }
            }
        }
    }

    scores
}

/// Selects the text with the highest feature score.
pub fn get_text_with_highest_feature_score(
    fragments: &[&Fragment],
    features: &[Feature<'_>],
    options: SelectOptions,
) -> Selection {
    let scores = compute_feature_scores(fragments, features);

    // Stable sort: fragments sit before extracted values in `scores`.
    let mut ranked: Vec<&TextScore> = scores.iter().collect();
    ranked.sort_by_key(|candidate| candidate.source);

    let mut best: Vec<&str> = Vec::new();
    let mut highest = i32::MIN;
    for candidate in ranked {
        if candidate.score > highest {
            highest = candidate.score;
            best.clear();
            best.push(&candidate.text);
        } else if candidate.score == highest {
            best.push(&candidate.text);
        }
    }

    if options.require_positive && highest <= 0 {
        return Selection {
            text: String::new(),
            scores,
        };
    }

    let text = if options.concatenate_ties {
        best.iter().map(|s| s.trim()).collect::<Vec<_>>().join(" ")
    } else {
        best.first().map(|s| s.to_string()).unwrap_or_default()
    };

    Selection { text, scores }
}
