//! TF-IDF vectorization and pairwise cosine similarity
//!
//! Term frequencies are raw counts, IDF is smoothed as
//! `ln((1 + n) / (1 + df)) + 1`, and every document vector is L2-normalized
//! so cosine similarity reduces to a sparse dot product.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::time::Instant;

use sprs::CsVec;

/// Cosine similarity between two document vectors
///
/// Zero vectors score 0 against everything. The result is clamped to [0, 1],
/// which is the full range for non-negative TF-IDF weights.
pub fn cosine_similarity(a: &CsVec<f64>, b: &CsVec<f64>) -> f64 {
    let denom = a.l2_norm() * b.l2_norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(0.0, 1.0)
}

/// Vocabulary and IDF weights fitted over a whole corpus
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fits the vocabulary and IDF weights
    ///
    /// Terms are whitespace-separated tokens. Column indices follow sorted
    /// term order so the layout is deterministic.
    pub fn fit(documents: &[String]) -> Self {
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<&str> = doc.split_whitespace().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let terms: BTreeSet<&str> = document_frequency.keys().copied().collect();
        let n = documents.len() as f64;

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (column, term) in terms.into_iter().enumerate() {
            let df = document_frequency[term] as f64;
            vocabulary.insert(term.to_string(), column);
            idf.push(((1.0 + n) / (1.0 + df)).ln() + 1.0);
        }

        Self { vocabulary, idf }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Column index of a term, if it was seen during fitting
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    #[cfg(test)]
    pub(crate) fn idf(&self, term: &str) -> Option<f64> {
        self.column(term).map(|column| self.idf[column])
    }

    /// L2-normalized TF-IDF vector for a document
    ///
    /// Terms outside the fitted vocabulary are ignored. An empty document
    /// yields the zero vector.
    pub fn transform(&self, document: &str) -> CsVec<f64> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for term in document.split_whitespace() {
            if let Some(column) = self.column(term) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        // CsVec wants strictly increasing indices
        let mut weights: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, count)| (column, count as f64 * self.idf[column]))
            .collect();
        weights.sort_by_key(|(column, _)| *column);
        let (indices, data): (Vec<usize>, Vec<f64>) = weights.into_iter().unzip();

        let mut vector = CsVec::new(self.vocabulary_size(), indices, data);
        let norm = vector.l2_norm();
        if norm > 0.0 {
            vector.map_inplace(|value| value / norm);
        }
        vector
    }
}

/// Dense, symmetric N x N cosine similarity matrix
///
/// Row `i` corresponds to dataset row `i`. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Vectorizes the corpus and computes every pairwise score
    pub fn build(documents: &[String]) -> Self {
        let started = Instant::now();

        let vectorizer = TfIdfVectorizer::fit(documents);
        let vectors: Vec<CsVec<f64>> = documents
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect();

        let matrix = Self::from_vectors(&vectors);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        tracing::info!(
            documents = documents.len(),
            vocabulary = vectorizer.vocabulary_size(),
            elapsed_ms,
            "Built similarity matrix"
        );

        matrix
    }

    /// Computes the upper triangle and mirrors it
    pub fn from_vectors(vectors: &[CsVec<f64>]) -> Self {
        let dim = vectors.len();
        let mut scores = vec![0.0; dim * dim];

        for i in 0..dim {
            scores[i * dim + i] = 1.0;
            for j in (i + 1)..dim {
                let score = cosine_similarity(&vectors[i], &vectors[j]);
                scores[i * dim + j] = score;
                scores[j * dim + i] = score;
            }
        }

        Self { dim, scores }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Scores of row `i` against every row, including itself
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.dim {
            return None;
        }
        Some(&self.scores[i * self.dim..(i + 1) * self.dim])
    }

    pub fn score(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.dim || j >= self.dim {
            return None;
        }
        Some(self.scores[i * self.dim + j])
    }
}
