use serde::Serialize;
use tracing::debug;

use crate::frequency::{FrequencyTable, VocabularySet};
use crate::ir::{CommonWord, CommonWords, WordLookup};
use crate::jaccard::{Similarity, similarity};
use crate::tokenize::{normalize, normalize_query};

/// Derived structures for one loaded document. The token sequence itself is
/// dropped once these are built.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub token_count: usize,
    pub frequencies: FrequencyTable,
    pub vocabulary: VocabularySet,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(&normalize(text))
    }

    pub fn from_tokens(tokens: &[String]) -> Self {
        let document = Self {
            token_count: tokens.len(),
            frequencies: FrequencyTable::from_tokens(tokens),
            vocabulary: VocabularySet::from_tokens(tokens),
        };
        debug!(
            tokens = document.token_count,
            vocabulary = document.vocabulary.len(),
            "document built"
        );
        document
    }

    pub fn is_empty(&self) -> bool {
        self.token_count == 0
    }
}

pub fn common_words(a: &FrequencyTable, b: &FrequencyTable) -> CommonWords {
    let words: Vec<CommonWord> = a
        .iter()
        .filter(|(word, _)| b.count(word) > 0)
        .map(|(word, count_a)| CommonWord {
            word: word.to_string(),
            count_a,
            count_b: b.count(word),
        })
        .collect();
    if words.is_empty() {
        CommonWords::NoneFound
    } else {
        CommonWords::Found(words)
    }
}

pub fn search_word(word: &str, a: &FrequencyTable, b: &FrequencyTable) -> WordLookup {
    let word = normalize_query(word);
    let count_a = a.count(&word);
    let count_b = b.count(&word);
    WordLookup {
        found: count_a > 0 || count_b > 0,
        word,
        count_a,
        count_b,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    CommonWords,
    Search(String),
    Similarity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    CommonWords(CommonWords),
    Search(WordLookup),
    Similarity(Similarity),
}

/// One comparison session over two documents. Each session owns its data;
/// nothing is shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    pub first: Document,
    pub second: Document,
}

impl Comparison {
    pub fn new(first: Document, second: Document) -> Self {
        Self { first, second }
    }

    pub fn from_texts(first: &str, second: &str) -> Self {
        Self::new(Document::from_text(first), Document::from_text(second))
    }

    pub fn common_words(&self) -> CommonWords {
        common_words(&self.first.frequencies, &self.second.frequencies)
    }

    pub fn search_word(&self, word: &str) -> WordLookup {
        search_word(word, &self.first.frequencies, &self.second.frequencies)
    }

    pub fn similarity(&self) -> Similarity {
        similarity(&self.first.vocabulary, &self.second.vocabulary)
    }

    /// False when either side produced no tokens.
    pub fn both_loaded(&self) -> bool {
        !self.first.is_empty() && !self.second.is_empty()
    }

    pub fn answer(&self, request: &Request) -> Response {
        debug!(?request, "answering request");
        match request {
            Request::CommonWords => Response::CommonWords(self.common_words()),
            Request::Search(word) => Response::Search(self.search_word(word)),
            Request::Similarity => Response::Similarity(self.similarity()),
        }
    }
}
