//! Content-word frequency table
//!
//! Counts every content token (long enough, not a stopword) across all
//! sentences of one document. Sentences are counted in parallel and the
//! partial tables merged; addition commutes, so the result does not depend
//! on scheduling.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordSet;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::Sentence;

/// Lowercase content token -> occurrence count, for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl FrequencyTable {
    /// Count of `token`, zero when absent.
    #[inline]
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct content tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Tokens by descending count, ties broken alphabetically.
    pub fn top_n(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    fn merge(mut self, other: FrequencyTable) -> Self {
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
        self
    }
}

/// Builds a [`FrequencyTable`] from segmented sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyAnalyzer {
    tokenizer: Tokenizer,
}

impl FrequencyAnalyzer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn build(&self, sentences: &[Sentence], stopwords: &StopwordSet) -> FrequencyTable {
        sentences
            .par_iter()
            .map(|sentence| {
                let mut table = FrequencyTable::default();
                for token in self.tokenizer.content_tokens(&sentence.text, stopwords) {
                    *table.counts.entry(token).or_insert(0) += 1;
                }
                table
            })
            .reduce(FrequencyTable::default, FrequencyTable::merge)
    }
}
