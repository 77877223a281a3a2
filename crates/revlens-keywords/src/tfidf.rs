//! TF-IDF term weighting over a tokenized corpus.
//!
//! Smoothed idf (`ln((1 + n) / (1 + df)) + 1`), term frequency normalized
//! by document length, and a per-term aggregate weight summed across the
//! corpus. Model state is local to one fit and discarded after ranking.

use std::collections::{HashMap, HashSet};

use revlens_core::errors::KeywordError;

/// A fitted term-weighting model.
#[derive(Debug)]
pub struct TfidfModel {
    weights: HashMap<String, f64>,
}

impl TfidfModel {
    /// Fit over pre-tokenized documents.
    ///
    /// Documents that tokenized to nothing still count toward `n`; a corpus
    /// whose vocabulary is empty after tokenization is an error the caller
    /// degrades into a sentinel.
    pub fn fit(docs: &[Vec<String>]) -> Result<Self, KeywordError> {
        if docs.is_empty() {
            return Err(KeywordError::EmptyCorpus);
        }

        let n = docs.len() as f64;
        let mut doc_frequency: HashMap<&str, usize> = HashMap::new();
        for doc in docs {
            let unique: HashSet<&str> = doc.iter().map(|t| t.as_str()).collect();
            for term in unique {
                *doc_frequency.entry(term).or_insert(0) += 1;
            }
        }
        if doc_frequency.is_empty() {
            return Err(KeywordError::EmptyVocabulary);
        }

        let idf: HashMap<&str, f64> = doc_frequency
            .iter()
            .map(|(&term, &df)| (term, ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0))
            .collect();

        let mut weights: HashMap<String, f64> = HashMap::new();
        for doc in docs {
            if doc.is_empty() {
                continue;
            }
            let len = doc.len() as f64;
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for term in doc {
                *counts.entry(term.as_str()).or_insert(0) += 1;
            }
            for (term, count) in counts {
                let tf = count as f64 / len;
                *weights.entry(term.to_string()).or_insert(0.0) += tf * idf[term];
            }
        }

        Ok(Self { weights })
    }

    /// Top `n` terms by aggregate weight, descending; equal weights break
    /// lexicographically so rankings are reproducible.
    pub fn top_terms(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<(&String, f64)> =
            self.weights.iter().map(|(t, &w)| (t, w)).collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        ranked.into_iter().take(n).map(|(t, _)| t.clone()).collect()
    }

    /// Aggregate corpus weight for one term.
    pub fn weight(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.weights.len()
    }
}
