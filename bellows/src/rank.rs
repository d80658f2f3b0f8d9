use crate::text::normalize;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankError {
    #[error("there are no sentences to compare the query against")]
    InsufficientData,
    #[error("no sentence shares a term with the query")]
    NoConfidentMatch,
}

/// Sparse document row keyed by vocabulary id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermVector(BTreeMap<usize, f64>);

impl TermVector {
    pub fn weight(&self, term: usize) -> f64 {
        self.0.get(&term).copied().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.values().all(|w| *w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.0.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        let (short, long) = if self.0.len() <= other.0.len() {
            (self, other)
        } else {
            (other, self)
        };
        short
            .0
            .iter()
            .map(|(term, w)| w * long.weight(*term))
            .sum()
    }

    /// Cosine of the angle between two rows. A zero row scores 0 against
    /// everything, itself included.
    pub fn cosine(&self, other: &Self) -> f64 {
        let norms = self.norm() * other.norm();
        if norms == 0.0 {
            return 0.0;
        }
        self.dot(other) / norms
    }

    fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            self.0.values_mut().for_each(|w| *w /= norm);
        }
        self
    }
}

/// TF-IDF document-term matrix fitted over one fixed set of documents.
///
/// Term frequency is the raw count, inverse document frequency is smoothed as
/// `ln((1 + n) / (1 + df)) + 1`, and every row is L2-normalized.
#[derive(Clone, Debug, Default)]
pub struct TfIdf {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    rows: Vec<TermVector>,
}

impl TfIdf {
    pub fn fit<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokenized: Vec<Vec<String>> = documents
            .into_iter()
            .map(|doc| normalize(doc.as_ref()))
            .collect();

        let mut vocabulary = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in tokens {
                if !vocabulary.contains_key(token) {
                    vocabulary.insert(token.clone(), document_frequency.len());
                    document_frequency.push(0);
                }
            }
            for token in unique {
                document_frequency[vocabulary[token]] += 1;
            }
        }

        let n = tokenized.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|df| ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
                for token in tokens {
                    *counts.entry(vocabulary[token]).or_default() += 1.0;
                }
                counts.iter_mut().for_each(|(term, w)| *w *= idf[*term]);
                TermVector(counts).l2_normalized()
            })
            .collect();

        Self {
            vocabulary,
            idf,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn term_id(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_id(term).map(|id| self.idf[id])
    }

    pub fn row(&self, doc: usize) -> Option<&TermVector> {
        self.rows.get(doc)
    }

    /// Cosine similarity of row `doc` against every row, in document order.
    pub fn similarities(&self, doc: usize) -> Vec<f64> {
        let Some(probe) = self.row(doc) else {
            return Vec::new();
        };
        self.rows.iter().map(|row| probe.cosine(row)).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match {
    pub index: usize,
    pub score: f64,
}

/// Finds the pool sentence most similar to `query`.
///
/// The model is fitted over the pool plus the query, so IDF reflects all
/// `pool.len() + 1` documents, but the query row itself is never a candidate
/// and the pool is left untouched. Equal scores resolve to the lowest index.
pub fn rank<S: AsRef<str>>(pool: &[S], query: &str) -> Result<Match, RankError> {
    if pool.is_empty() {
        return Err(RankError::InsufficientData);
    }

    let documents = pool
        .iter()
        .map(|sentence| sentence.as_ref())
        .chain(std::iter::once(query));
    let model = TfIdf::fit(documents);
    let mut scores = model.similarities(pool.len());
    scores.truncate(pool.len());

    let mut best = Match {
        index: 0,
        score: scores[0],
    };
    for (index, score) in scores.iter().copied().enumerate().skip(1) {
        if score > best.score {
            best = Match { index, score };
        }
    }

    tracing::debug!(
        candidates = pool.len(),
        terms = model.vocabulary_size(),
        best_index = best.index,
        best_score = best.score,
        "ranked query"
    );

    if best.score <= 0.0 {
        return Err(RankError::NoConfidentMatch);
    }
    Ok(best)
}
