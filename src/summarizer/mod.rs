//! Extractive summarization
//!
//! Sentences are scored by content-word frequency density and picked under
//! a word budget in three phases (lead-in, core, closing). When no sentence
//! can be picked, the text is truncated instead.

pub mod facade;
pub mod fallback;
pub mod frequency;
pub mod scorer;
pub mod selector;
