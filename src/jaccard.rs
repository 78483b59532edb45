use serde::Serialize;

use crate::frequency::VocabularySet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Similarity {
    pub percentage: f64,
    pub intersection_size: usize,
    pub union_size: usize,
}

/// Jaccard overlap of two vocabularies as a percentage in `[0, 100]`.
///
/// Two empty vocabularies have an empty union and score 0.
pub fn similarity(a: &VocabularySet, b: &VocabularySet) -> Similarity {
    let intersection_size = a.intersection(b).count();
    let union_size = a.union_len(b);
    let percentage = if union_size == 0 {
        0.0
    } else {
        100.0 * intersection_size as f64 / union_size as f64
    };
    Similarity {
        percentage,
        intersection_size,
        union_size,
    }
}
