//! TF-IDF relevance scoring for Forkcast.
//!
//! A [`TfIdfModel`] is fitted per request to the user's cuisine phrases,
//! treating each phrase as one document. Menu item names are then projected
//! into the same space and scored by their best cosine similarity to any
//! phrase. The model implements [`forkcast_core::TextRelevance`], so it plugs
//! straight into [`forkcast_core::recommend`].
//!
//! # Examples
//!
//! ```
//! use forkcast_core::TextRelevance;
//! use forkcast_scorer::build_relevance_model;
//!
//! let model = build_relevance_model(&["Pho", "Bun Cha", "Banh Mi"]);
//! assert!((model.score("Banh Mi Thit") - 1.0).abs() < 1e-12);
//! assert_eq!(model.best_score(&["Com Tam", "Pho Bo"]), 1.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod model;
mod tokenizer;

pub use model::{
    SparseVector, TfIdfModel, build_relevance_model, cosine_similarity, score_against,
};
pub use tokenizer::{MIN_TOKEN_CHARS, tokenize};
