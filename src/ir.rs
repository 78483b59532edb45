use std::path::PathBuf;

use serde::Serialize;

use crate::jaccard::Similarity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonWord {
    pub word: String,
    pub count_a: usize,
    pub count_b: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "words", rename_all = "snake_case")]
pub enum CommonWords {
    NoneFound,
    Found(Vec<CommonWord>),
}

impl CommonWords {
    pub fn words(&self) -> &[CommonWord] {
        match self {
            CommonWords::NoneFound => &[],
            CommonWords::Found(words) => words,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordLookup {
    pub word: String,
    pub found: bool,
    pub count_a: usize,
    pub count_b: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    LikelyPlagiarism,
    NoPlagiarism,
}

impl Verdict {
    pub fn from_percentage(percentage: f64, threshold: f64) -> Self {
        if percentage >= threshold {
            Verdict::LikelyPlagiarism
        } else {
            Verdict::NoPlagiarism
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub path: PathBuf,
    pub tokens: usize,
    pub vocabulary: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MissingInput,
    EmptyDocument,
    InvalidUtf8,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub version: u8,
    pub generated_at: String,
    pub essays: [DocumentSummary; 2],
    pub common_words: CommonWords,
    pub similarity: Similarity,
    pub threshold: f64,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<WordLookup>,
    pub warnings: Vec<Warning>,
}
