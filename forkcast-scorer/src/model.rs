//! TF-IDF vector space fitted to a user's cuisine phrases.
//!
//! Each cuisine phrase is one document. Term weights are raw counts scaled
//! by a smoothed inverse document frequency, `ln((1 + n) / (1 + df)) + 1`,
//! and every vector is L2-normalised. Candidate text is projected with the
//! fitted vocabulary only; unseen terms contribute nothing.

use std::collections::{BTreeMap, HashMap};

use forkcast_core::{TextRelevance, UserProfile};
use log::trace;

use crate::tokenize;

/// A sparse, L2-normalised term vector keyed by vocabulary index.
pub type SparseVector = BTreeMap<usize, f64>;

/// A fitted TF-IDF model holding one reference vector per cuisine phrase.
///
/// # Examples
/// ```
/// use forkcast_core::TextRelevance;
/// use forkcast_scorer::TfIdfModel;
///
/// let model = TfIdfModel::fit(&["Pho", "Bun Cha"]);
/// assert_eq!(model.vocabulary_len(), 3);
/// assert!((model.score("pho") - 1.0).abs() < 1e-12);
/// assert!((model.score("Bun Bo Hue") - 0.707_106_781).abs() < 1e-6);
/// assert_eq!(model.score("Com Tam"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TfIdfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    references: Vec<SparseVector>,
}

impl TfIdfModel {
    /// Fit a model where each entry of `documents` is one document.
    ///
    /// Documents that yield no tokens still count towards the document total
    /// but contribute an all-zero reference vector. When no document yields a
    /// token the model has no reference vectors and scores everything `0.0`.
    #[must_use]
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|document| tokenize(document.as_ref()))
            .collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term).or_default() += 1;
            }
        }

        if document_frequency.is_empty() {
            trace!("no cuisine tokens; relevance model is empty");
            return Self::default();
        }

        let total = document_count(documents.len());
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, frequency)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term.to_owned(), index);
            idf.push(smoothed_idf(total, document_count(frequency)));
        }

        let mut model = Self {
            vocabulary,
            idf,
            references: Vec::new(),
        };
        model.references = tokenized
            .iter()
            .map(|tokens| model.weigh(tokens))
            .collect();
        trace!(
            "fitted relevance model: {} documents, {} terms",
            model.references.len(),
            model.vocabulary.len()
        );
        model
    }

    /// Fit a model to a profile's cuisine phrases.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self::fit(profile.cuisines())
    }

    /// Number of distinct terms in the fitted vocabulary.
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether the model has no reference vectors to compare against.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Project `text` into the fitted vector space.
    #[must_use]
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&tokenize(text))
    }

    /// Project every text in `texts` independently.
    #[must_use]
    pub fn transform_batch(&self, texts: &[&str]) -> Vec<SparseVector> {
        texts.iter().map(|text| self.transform(text)).collect()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "term weighting multiplies counts by idf"
    )]
    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut vector = SparseVector::new();
        for token in tokens {
            let Some(&index) = self.vocabulary.get(token) else {
                continue;
            };
            let Some(&weight) = self.idf.get(index) else {
                continue;
            };
            *vector.entry(index).or_default() += weight;
        }
        normalise(&mut vector);
        vector
    }

    /// Best cosine similarity between `vector` and any reference vector.
    fn best_match(&self, vector: &SparseVector) -> f64 {
        let best = self
            .references
            .iter()
            .map(|reference| cosine_similarity(vector, reference))
            .fold(0.0, f64::max);
        <Self as TextRelevance>::sanitise(best)
    }
}

impl TextRelevance for TfIdfModel {
    fn score(&self, text: &str) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.best_match(&self.transform(text))
    }

    fn best_score(&self, texts: &[&str]) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.transform_batch(texts)
            .iter()
            .map(|vector| self.best_match(vector))
            .fold(0.0, f64::max)
    }
}

/// Build a relevance model from the user's cuisine phrases.
///
/// # Examples
/// ```
/// use forkcast_scorer::{build_relevance_model, score_against};
///
/// let model = build_relevance_model(&["Italian Pizza", "Pizza", "Sushi"]);
/// assert!((score_against(&model, "Italian") - 0.795_960_5).abs() < 1e-6);
///
/// let empty = build_relevance_model::<&str>(&[]);
/// assert_eq!(score_against(&empty, "Italian"), 0.0);
/// ```
#[must_use]
pub fn build_relevance_model<S: AsRef<str>>(cuisines: &[S]) -> TfIdfModel {
    TfIdfModel::fit(cuisines)
}

/// Score `text` against a fitted model.
#[must_use]
pub fn score_against(model: &TfIdfModel, text: &str) -> f64 {
    model.score(text)
}

/// Cosine similarity of two sparse vectors; `0.0` when either is all zero.
#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity is a normalised dot product"
)]
#[must_use]
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(index, weight)| b.get(index).map(|other| weight * other))
        .sum();
    let norms = norm(a) * norm(b);
    if norms == 0.0 {
        return 0.0;
    }
    dot / norms
}

#[expect(clippy::float_arithmetic, reason = "Euclidean norm")]
fn norm(vector: &SparseVector) -> f64 {
    vector.values().map(|weight| weight * weight).sum::<f64>().sqrt()
}

#[expect(clippy::float_arithmetic, reason = "L2 normalisation divides by the norm")]
fn normalise(vector: &mut SparseVector) {
    let length = norm(vector);
    if length == 0.0 {
        return;
    }
    for weight in vector.values_mut() {
        *weight /= length;
    }
}

#[expect(clippy::float_arithmetic, reason = "idf is a logarithmic ratio")]
fn smoothed_idf(documents: f64, frequency: f64) -> f64 {
    ((1.0 + documents) / (1.0 + frequency)).ln() + 1.0
}

#[expect(
    clippy::cast_precision_loss,
    reason = "document counts are far below 2^52"
)]
fn document_count(count: usize) -> f64 {
    count as f64
}
