//! Natural Language Processing components
//!
//! Whitespace normalization, sentence segmentation, tokenization and
//! stopword filtering.

pub mod normalizer;
pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
