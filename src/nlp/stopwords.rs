//! Stopword sets
//!
//! A [`StopwordSet`] is built once and then only read. The process-wide
//! default holds the curated Portuguese list and is initialized lazily on
//! first use; other languages come from the `stop-words` crate.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Curated Portuguese function words.
const PORTUGUESE: &[&str] = &[
    "a", "o", "de", "e", "do", "da", "em", "um", "uma", "para", "que", "se", "com", "os", "as",
    "no", "na", "por", "uns", "umas", "ao", "aos", "à", "às", "pelo", "pela", "pelos", "pelas",
    "num", "numa", "nuns", "numas", "dum", "duma", "duns", "dumas", "este", "esta", "estes",
    "estas", "esse", "essa", "esses", "essas", "aquele", "aquela", "aqueles", "aquelas", "isto",
    "isso", "aquilo", "outro", "outra", "outros", "outras", "tal", "tais", "qual", "quais",
    "cujo", "cuja", "cujos", "cujas", "quanto", "quanta", "quantos", "quantas", "qualquer",
    "quaisquer", "algum", "alguma", "alguns", "algumas", "nenhum", "nenhuma", "nenhuns",
    "nenhumas", "todo", "toda", "todos", "todas", "cada", "vários", "várias", "outrem", "tudo",
    "nada", "algo", "alguém", "ninguém", "quem", "sem", "sob", "sobre", "tras", "ante", "apos",
    "ate", "perante", "quando", "enquanto", "antes", "depois", "desde", "onde", "aonde", "como",
    "porque", "pois", "embora", "mesmo", "talvez", "sempre", "nunca", "jamais", "agora", "logo",
    "aqui", "ali", "la",
];

static DEFAULT_STOPWORDS: Lazy<Arc<StopwordSet>> = Lazy::new(|| Arc::new(StopwordSet::portuguese()));

/// The process-wide default set (curated Portuguese).
pub fn shared_default() -> Arc<StopwordSet> {
    Arc::clone(&DEFAULT_STOPWORDS)
}

/// An immutable set of lowercase stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Load the `stop-words` list for a language code or name.
    ///
    /// Unknown languages fall back to English; use [`is_supported_language`]
    /// to check first.
    pub fn new(language: &str) -> Self {
        let lang = language_for(language).unwrap_or(LANGUAGE::English);
        Self {
            words: get(lang).iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// The curated Portuguese list used by default.
    pub fn portuguese() -> Self {
        Self::from_list(PORTUGUESE)
    }

    /// An empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a custom list; words are lowercased.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Exact lookup for an already-lowercased token.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Case-insensitive lookup.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Whether [`StopwordSet::new`] has a list for `language`.
pub fn is_supported_language(language: &str) -> bool {
    language_for(language).is_some()
}

fn language_for(language: &str) -> Option<LANGUAGE> {
    let lang = match language.to_lowercase().as_str() {
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "en" | "english" => LANGUAGE::English,
        "es" | "spanish" => LANGUAGE::Spanish,
        "fr" | "french" => LANGUAGE::French,
        "de" | "german" => LANGUAGE::German,
        "it" | "italian" => LANGUAGE::Italian,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "ru" | "russian" => LANGUAGE::Russian,
        _ => return None,
    };
    Some(lang)
}
