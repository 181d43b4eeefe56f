//! Budgeted three-phase sentence selection
//!
//! Sentences are picked in three passes that share one running word count:
//!
//! 1. **Lead**: the opening sentences, in order, while the total stays within
//!    `lead_share` of the budget. Stops at the first sentence that does not
//!    fit.
//! 2. **Core**: every sentence by descending score, skipping the opening and
//!    closing positions, while the total stays within `core_share` of the
//!    budget. Sentences that do not fit are skipped, not fatal.
//! 3. **Closing**: the last `min(closing_max_sentences, ceil(n / 10))`
//!    sentences, in order, while the total stays within the full budget.
//!    Stops at the first sentence that does not fit.
//!
//! A sentence text is never taken twice, even when the document repeats it.
//! The selection is returned in document order.

use rustc_hash::FxHashSet;

use crate::pipeline::config::BudgetConfig;
use crate::types::{ScoredSentence, SelectionPhase, Sentence};

const CLOSING_DIVISOR: usize = 10;

/// A selected sentence and the phase that picked it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedSentence<'a> {
    pub sentence: &'a Sentence,
    pub phase: SelectionPhase,
    /// Relevance score of the sentence
    pub score: f64,
}

/// Result of sentence selection
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence<'a>>,
    /// Words consumed from the budget
    pub words_used: usize,
}

impl<'a> Selection<'a> {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Positions of the selected sentences, ascending.
    pub fn positions(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.sentence.position).collect()
    }

    /// Join the selected sentences into the summary text.
    pub fn assemble(&self) -> String {
        assemble(self.sentences.iter().map(|s| s.sentence.text.as_str()))
    }
}

const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Join sentence texts with `". "` and end the result with a period.
///
/// A sentence that already ends in `.`, `!` or `?` keeps its own
/// punctuation: it is followed by a plain space, and no period is appended
/// after it at the end.
pub fn assemble<'s>(texts: impl IntoIterator<Item = &'s str>) -> String {
    let mut out = String::new();
    for text in texts {
        if !out.is_empty() {
            out = ensure_period(out);
            out.push(' ');
        }
        out.push_str(text);
    }
    ensure_period(out)
}

/// Append a period unless `text` already ends with `.`, `!` or `?`.
pub fn ensure_period(mut text: String) -> String {
    if !text.ends_with(TERMINAL_PUNCTUATION) {
        text.push('.');
    }
    text
}

/// Running state shared by the three phases
struct Budget<'a> {
    max_words: usize,
    used: usize,
    texts: FxHashSet<&'a str>,
    picked: Vec<SelectedSentence<'a>>,
}

impl<'a> Budget<'a> {
    fn new(max_words: usize) -> Self {
        Self {
            max_words,
            used: 0,
            texts: FxHashSet::default(),
            picked: Vec::new(),
        }
    }

    fn fits(&self, words: usize, share: f64) -> bool {
        (self.used + words) as f64 <= self.max_words as f64 * share
    }

    fn is_taken(&self, sentence: &Sentence) -> bool {
        self.texts.contains(sentence.text.as_str())
    }

    /// Add a sentence; returns `false` if its text was already taken.
    fn take(&mut self, scored: &ScoredSentence<'a>, phase: SelectionPhase) -> bool {
        if !self.texts.insert(scored.sentence.text.as_str()) {
            return false;
        }
        self.used += scored.sentence.word_count;
        self.picked.push(SelectedSentence {
            sentence: scored.sentence,
            phase,
            score: scored.score,
        });
        true
    }
}

/// Three-phase budgeted selector
#[derive(Debug, Clone)]
pub struct BudgetedSelector {
    config: BudgetConfig,
}

impl Default for BudgetedSelector {
    fn default() -> Self {
        Self::with_config(BudgetConfig::default())
    }
}

impl BudgetedSelector {
    pub fn with_config(config: BudgetConfig) -> Self {
        Self { config }
    }

    /// Set the lead-in share of the budget
    pub fn with_lead_share(mut self, share: f64) -> Self {
        self.config.lead_share = share;
        self
    }

    /// Set the combined lead-in and core share of the budget
    pub fn with_core_share(mut self, share: f64) -> Self {
        self.config.core_share = share;
        self
    }

    /// Number of closing sentences considered for `n` sentences.
    pub fn closing_window(&self, n: usize) -> usize {
        n.div_ceil(CLOSING_DIVISOR)
            .min(self.config.closing_max_sentences)
    }

    /// Select sentences within `max_words`.
    ///
    /// `scored` must hold one entry per sentence, in document order, as
    /// produced by [`RelevanceScorer::score`](super::scorer::RelevanceScorer::score).
    pub fn select<'a>(&self, scored: &[ScoredSentence<'a>], max_words: usize) -> Selection<'a> {
        let n = scored.len();
        let mut budget = Budget::new(max_words);

        // Phase A: lead-in
        for s in scored.iter().take(self.config.lead_sentences) {
            if !budget.fits(s.sentence.word_count, self.config.lead_share) {
                break;
            }
            budget.take(s, SelectionPhase::Lead);
        }

        // Phase B: core, by descending score; stable sort keeps document
        // order among equal scores
        let mut ranked: Vec<&ScoredSentence<'a>> = scored.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let tail_start = n.saturating_sub(self.config.tail_reserved);
        for s in ranked {
            let position = s.position();
            let reserved = position < self.config.lead_sentences || position >= tail_start;
            if reserved || budget.is_taken(s.sentence) {
                continue;
            }
            if budget.fits(s.sentence.word_count, self.config.core_share) {
                budget.take(s, SelectionPhase::Core);
            }
        }

        // Phase C: closing
        let closing_start = n - self.closing_window(n);
        for s in &scored[closing_start..] {
            if !budget.fits(s.sentence.word_count, 1.0) {
                break;
            }
            budget.take(s, SelectionPhase::Closing);
        }

        let mut sentences = budget.picked;
        sentences.sort_by_key(|s| s.sentence.position);

        Selection {
            sentences,
            words_used: budget.used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sentences whose word counts are given; text is unique per position.
    fn make_sentences(word_counts: &[usize]) -> Vec<Sentence> {
        word_counts
            .iter()
            .enumerate()
            .map(|(i, &wc)| {
                let mut words = vec![format!("s{i}")];
                words.extend((1..wc).map(|w| format!("w{w}")));
                Sentence::new(i, format!("{}.", words.join(" ")))
            })
            .collect()
    }

    fn score_all<'a>(sentences: &'a [Sentence], scores: &[f64]) -> Vec<ScoredSentence<'a>> {
        sentences
            .iter()
            .zip(scores)
            .map(|(s, &score)| ScoredSentence::new(s, score))
            .collect()
    }

    #[test]
    fn test_three_phases_on_twelve_sentences() {
        // budget 100: lead <= 30, core <= 80, closing <= 100
        let sentences = make_sentences(&[10, 10, 15, 10, 10, 10, 10, 10, 10, 10, 10, 10]);
        let scores = [1.0, 1.0, 1.0, 0.1, 0.9, 0.2, 0.8, 0.3, 0.7, 0.4, 5.0, 5.0];
        let scored = score_all(&sentences, &scores);

        let selection = BudgetedSelector::default().select(&scored, 100);

        // lead: 0 and 1 (20 words); 2 would reach 35
        // core by score: 4, 6, 8, 9, 7, 5 bring the total to 80; 3 would reach 90
        // closing window ceil(12/10) = 2: 10 (90), 11 (100)
        let positions = selection.positions();
        assert_eq!(positions, vec![0, 1, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(selection.words_used, 100);
    }

    #[test]
    fn test_lead_stops_at_first_overflow() {
        // budget 20: lead <= 6
        let sentences = make_sentences(&[5, 7, 1, 5, 5]);
        let scored = score_all(&sentences, &[0.0; 5]);
        let selection = BudgetedSelector::default().select(&scored, 20);

        let lead: Vec<_> = selection
            .sentences
            .iter()
            .filter(|s| s.phase == SelectionPhase::Lead)
            .map(|s| s.sentence.position)
            .collect();
        // 1 overflows, so 2 is never looked at even though it would fit
        assert_eq!(lead, vec![0]);
    }

    #[test]
    fn test_core_skips_reserved_positions() {
        let sentences = make_sentences(&[50; 8]);
        // reserved positions get the highest scores
        let scores = [9.0, 9.0, 9.0, 1.0, 2.0, 3.0, 9.0, 9.0];
        let scored = score_all(&sentences, &scores);
        // budget 200: lead 60 takes only 0; core up to 160
        let selection = BudgetedSelector::default().select(&scored, 200);

        let core: Vec<_> = selection
            .sentences
            .iter()
            .filter(|s| s.phase == SelectionPhase::Core)
            .map(|s| s.sentence.position)
            .collect();
        // 5 (score 3) then 4 (score 2); 3 would exceed 160
        assert_eq!(core, vec![4, 5]);
    }

    #[test]
    fn test_core_skips_oversized_and_continues() {
        let sentences = make_sentences(&[5, 5, 5, 40, 6, 5, 5]);
        let scores = [0.0, 0.0, 0.0, 9.0, 1.0, 0.0, 0.0];
        let scored = score_all(&sentences, &scores);
        // budget 50: lead <= 15 takes 0, 1, 2; core <= 40: 3 needs 55, skipped; 4 fits
        let selection = BudgetedSelector::default().select(&scored, 50);
        assert!(selection.positions().contains(&4));
        assert!(!selection.positions().contains(&3));
    }

    #[test]
    fn test_closing_stops_at_first_overflow() {
        // 20 sentences -> closing window 2
        let mut counts = vec![1; 20];
        counts[18] = 30;
        let sentences = make_sentences(&counts);
        let scored = score_all(&sentences, &[0.0; 20]);
        // budget 10: lead <= 3 takes 0, 1, 2; core <= 8 takes five middle sentences
        let selection = BudgetedSelector::default().select(&scored, 10);

        let positions = selection.positions();
        assert!(!positions.contains(&18));
        // 19 would fit but comes after the overflow
        assert!(!positions.contains(&19));
    }

    #[test]
    fn test_duplicate_text_taken_once() {
        let sentences = vec![
            Sentence::new(0, "The same sentence appears twice here."),
            Sentence::new(1, "Another sentence sits between the copies."),
            Sentence::new(2, "The same sentence appears twice here."),
        ];
        let scored = score_all(&sentences, &[1.0, 1.0, 1.0]);
        let selection = BudgetedSelector::default().select(&scored, 100);

        let texts: Vec<_> = selection.sentences.iter().map(|s| &s.sentence.text).collect();
        assert_eq!(texts.len(), 2);
        assert_eq!(selection.positions(), vec![0, 1]);
    }

    #[test]
    fn test_output_in_document_order() {
        let sentences = make_sentences(&[3; 30]);
        let scores: Vec<f64> = (0..30).map(|i| ((i * 7) % 11) as f64).collect();
        let scored = score_all(&sentences, &scores);
        let selection = BudgetedSelector::default().select(&scored, 40);

        let positions = selection.positions();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(selection.words_used <= 40);
    }

    #[test]
    fn test_closing_window() {
        let selector = BudgetedSelector::default();
        assert_eq!(selector.closing_window(0), 0);
        assert_eq!(selector.closing_window(1), 1);
        assert_eq!(selector.closing_window(10), 1);
        assert_eq!(selector.closing_window(11), 2);
        assert_eq!(selector.closing_window(100), 2);
    }

    #[test]
    fn test_single_long_sentence_fits_nowhere() {
        // 30 words, budget 10: too long for every phase
        let sentences = make_sentences(&[30]);
        let scored = score_all(&sentences, &[1.0]);
        let selection = BudgetedSelector::default().select(&scored, 10);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_single_short_sentence_taken_by_lead() {
        let sentences = make_sentences(&[5]);
        let scored = score_all(&sentences, &[1.0]);
        let selection = BudgetedSelector::default().select(&scored, 100);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.sentences[0].phase, SelectionPhase::Lead);
    }

    #[test]
    fn test_custom_shares() {
        let sentences = make_sentences(&[10; 6]);
        let scored = score_all(&sentences, &[1.0; 6]);
        let selection = BudgetedSelector::default()
            .with_lead_share(0.0)
            .with_core_share(0.0)
            .select(&scored, 100);
        // only the closing phase adds anything
        assert_eq!(selection.positions(), vec![5]);
    }

    #[test]
    fn test_empty_input() {
        let selection = BudgetedSelector::default().select(&[], 100);
        assert!(selection.is_empty());
        assert_eq!(selection.assemble(), ".");
    }

    #[test]
    fn test_assemble_does_not_double_punctuate() {
        assert_eq!(
            assemble(["First one.", "Second one?", "Third one"]),
            "First one. Second one? Third one."
        );
        assert_eq!(assemble(["No period", "here"]), "No period. here.");
        assert_eq!(assemble(["Ends with period."]), "Ends with period.");
    }

    #[test]
    fn test_separator_and_ending_follow_one_rule() {
        assert_eq!(
            assemble(["Is this the first one?", "Yes it is!"]),
            "Is this the first one? Yes it is!"
        );
        assert_eq!(assemble(["Only a question?"]), "Only a question?");
        assert_eq!(ensure_period("Wow!".to_string()), "Wow!");
        assert_eq!(ensure_period("plain".to_string()), "plain.");
        assert_eq!(ensure_period(String::new()), ".");
    }
}
