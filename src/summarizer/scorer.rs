//! Relevance scoring
//!
//! A sentence's score is the sum of its tokens' document frequencies,
//! boosted for sentences near the start or end of the document and for
//! sentences of readable length, then divided by the sentence's word count.
//! The division turns the raw sum into a density: a short sentence packed
//! with frequent content words outranks a long one that merely has more
//! tokens.
//!
//! Edge windows scale with document length: the opening window covers
//! `min(lead_max_sentences, ceil(n / edge_divisor))` sentences and the closing
//! window `min(tail_max_sentences, ceil(n / edge_divisor))`. A sentence can
//! be in both windows, in which case both bonuses apply.

use rayon::prelude::*;

use crate::errors::{Result, SummarizeError};
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::config::ScoringConfig;
use crate::types::{ScoredSentence, Sentence};

use super::frequency::FrequencyTable;

/// Frequency-density scorer with positional and length bonuses
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    tokenizer: Tokenizer,
    config: ScoringConfig,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::with_config(ScoringConfig::default())
    }
}

impl RelevanceScorer {
    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.min_token_chars),
            config,
        }
    }

    /// Score every sentence, preserving input order.
    ///
    /// Fails only if a score comes out NaN or infinite, which can happen
    /// with a misconfigured multiplier.
    pub fn score<'a>(
        &self,
        sentences: &'a [Sentence],
        frequencies: &FrequencyTable,
    ) -> Result<Vec<ScoredSentence<'a>>> {
        let n = sentences.len();
        let (lead_window, tail_window) = self.edge_windows(n);

        sentences
            .par_iter()
            .enumerate()
            .map(|(i, sentence)| {
                let score = self.score_one(i, n, lead_window, tail_window, sentence, frequencies);
                if score.is_finite() {
                    Ok(ScoredSentence::new(sentence, score))
                } else {
                    Err(SummarizeError::NonFiniteScore {
                        position: sentence.position,
                    })
                }
            })
            .collect()
    }

    /// Sizes of the opening and closing bonus windows for `n` sentences.
    pub fn edge_windows(&self, n: usize) -> (usize, usize) {
        let scaled = n.div_ceil(self.config.edge_divisor.max(1));
        (
            scaled.min(self.config.lead_max_sentences),
            scaled.min(self.config.tail_max_sentences),
        )
    }

    fn score_one(
        &self,
        i: usize,
        n: usize,
        lead_window: usize,
        tail_window: usize,
        sentence: &Sentence,
        frequencies: &FrequencyTable,
    ) -> f64 {
        let mut score: f64 = self
            .tokenizer
            .tokens(&sentence.text)
            .iter()
            .map(|token| frequencies.get(token) as f64)
            .sum();

        if i < lead_window {
            score *= self.config.lead_bonus;
        }
        if i >= n - tail_window {
            score *= self.config.tail_bonus;
        }

        let words = sentence.word_count;
        if (self.config.ideal_min_words..=self.config.ideal_max_words).contains(&words) {
            score *= self.config.length_bonus;
        }

        if words == 0 {
            return 0.0;
        }
        score / words as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordSet;
    use crate::summarizer::frequency::FrequencyAnalyzer;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn doc(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(i, *t))
            .collect()
    }

    fn score_doc(sentences: &[Sentence]) -> Vec<f64> {
        let stopwords = StopwordSet::empty();
        let table = FrequencyAnalyzer::default().build(sentences, &stopwords);
        RelevanceScorer::default()
            .score(sentences, &table)
            .unwrap()
            .iter()
            .map(|s| s.score)
            .collect()
    }

    #[test]
    fn test_edge_windows_scale_with_length() {
        let scorer = RelevanceScorer::default();
        assert_eq!(scorer.edge_windows(1), (1, 1));
        assert_eq!(scorer.edge_windows(10), (1, 1));
        assert_eq!(scorer.edge_windows(11), (2, 2));
        assert_eq!(scorer.edge_windows(30), (3, 3));
        assert_eq!(scorer.edge_windows(45), (5, 3));
        assert_eq!(scorer.edge_windows(500), (5, 3));
    }

    #[test]
    fn test_single_sentence_gets_both_edge_bonuses() {
        // five distinct words, each counted once: base 5
        let sentences = doc(&["alpha bravo charlie delta echo"]);
        let scores = score_doc(&sentences);
        // 5 * 1.5 * 1.2 / 5 words, no length bonus below 8 words
        assert_close(scores[0], 1.8);
    }

    #[test]
    fn test_length_bonus_and_normalization() {
        // 12 sentences: lead window 2, tail window 2; index 5 gets no edge bonus
        let mut texts = vec!["filler words without overlap number one"; 12];
        texts[5] = "shared shared shared shared other words make eight";
        let sentences = doc(&texts);
        let scores = score_doc(&sentences);

        // shared: 4 occurrences each weighing 4 -> 16; other/words/make/eight:
        // "words" also appears in the 11 filler sentences -> 12; other 1,
        // make 1, eight 1 -> 16 + 12 + 3 = 31, x1.1 for 8 words, / 8
        assert_close(scores[5], 31.0 * 1.1 / 8.0);
    }

    #[test]
    fn test_density_beats_volume() {
        let sentences = doc(&[
            "opening sentence that sets the scene today",
            "core idea core idea core idea",
            "core idea appears once among many unrelated filler tokens here now",
            "middle filler sentence talking about nothing much",
            "closing sentence that wraps things up nicely",
        ]);
        let scores = score_doc(&sentences);
        assert!(scores[1] > scores[2]);
    }

    #[test]
    fn test_stopwords_contribute_nothing() {
        let sentences = doc(&["de de de de de revolução"]);
        let stopwords = StopwordSet::portuguese();
        let table = FrequencyAnalyzer::default().build(&sentences, &stopwords);
        let scored = RelevanceScorer::default().score(&sentences, &table).unwrap();
        // only "revolução" counts: 1 * 1.5 * 1.2 / 6
        assert_close(scored[0].score, 1.8 / 6.0);
    }

    #[test]
    fn test_order_preserved() {
        let texts: Vec<String> = (0..50).map(|i| format!("sentence {i} with some words")).collect();
        let sentences: Vec<Sentence> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(i, t.as_str()))
            .collect();
        let table = FrequencyAnalyzer::default().build(&sentences, &StopwordSet::empty());
        let scored = RelevanceScorer::default().score(&sentences, &table).unwrap();

        let positions: Vec<_> = scored.iter().map(|s| s.position()).collect();
        assert_eq!(positions, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_non_finite_multiplier_is_an_error() {
        let config = ScoringConfig {
            lead_bonus: f64::INFINITY,
            ..ScoringConfig::default()
        };
        let sentences = doc(&["alpha bravo charlie delta echo"]);
        let table = FrequencyAnalyzer::default().build(&sentences, &StopwordSet::empty());
        let err = RelevanceScorer::with_config(config)
            .score(&sentences, &table)
            .unwrap_err();
        assert!(matches!(err, SummarizeError::NonFiniteScore { position: 0 }));
    }

    #[test]
    fn test_empty_document() {
        let scored = RelevanceScorer::default()
            .score(&[], &FrequencyTable::default())
            .unwrap();
        assert!(scored.is_empty());
    }
}
