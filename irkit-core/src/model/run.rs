extern crate float_ord;

use std::collections::HashSet;
use std::slice;

use self::float_ord::FloatOrd;

use super::{Document, Query, System};

/// A document retrieved, or judged, at a given rank with a given score
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredDocument {
    /// Document that was returned
    pub document: Document,
    /// System score, or relevance level for ground truth
    pub score: f64,
    /// 1-based rank
    pub rank: usize,
}

impl ScoredDocument {
    /// Creates a new scored document
    pub fn new(document: Document, score: f64, rank: usize) -> Self {
        ScoredDocument {
            document,
            score,
            rank,
        }
    }
}

/// The ranked results one system returned for one query.
///
/// Results are always stored in rank order, whatever the order they were added in.
#[derive(Clone, Debug)]
pub struct Run {
    query: Query,
    system: System,
    results: Vec<ScoredDocument>,
}

impl Run {
    /// Creates an empty run
    pub fn new(query: Query, system: System) -> Self {
        Run {
            query,
            system,
            results: Vec::new(),
        }
    }

    /// Query the run answers
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// System that produced the run
    pub fn system(&self) -> &System {
        &self.system
    }

    /// Appends a document after the current last result
    pub fn push(&mut self, document: Document, score: f64) {
        let rank = self.results.len() + 1;
        self.results.push(ScoredDocument::new(document, score, rank));
    }

    /// Inserts a result at the position given by its rank.  Results sharing a rank
    /// keep their insertion order.
    pub fn insert(&mut self, result: ScoredDocument) {
        match self.results.last() {
            Some(last) if last.rank > result.rank => {
                let pos = self.results.partition_point(|r| r.rank <= result.rank);
                self.results.insert(pos, result);
            }
            _ => self.results.push(result),
        }
    }

    /// Number of results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the run holds no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over the results in rank order
    pub fn iter(&self) -> slice::Iter<ScoredDocument> {
        self.results.iter()
    }

    /// Results in rank order
    pub fn as_slice(&self) -> &[ScoredDocument] {
        &self.results
    }

    /// First `min(cutoff, len)` results, or all of them without a cutoff
    pub fn top(&self, cutoff: Option<usize>) -> &[ScoredDocument] {
        let k = cutoff.unwrap_or(self.results.len()).min(self.results.len());
        &self.results[..k]
    }

    /// Returns a copy of the run sorted by descending `key(score)` and re-ranked.
    /// Ties keep their current order.  A document listed more than once keeps only
    /// its last entry, so a repeated judgment replaces the earlier one.
    pub fn ideal_ordering<F>(&self, key: F) -> Run
    where
        F: Fn(f64) -> f64,
    {
        let mut seen = HashSet::new();
        let mut results: Vec<ScoredDocument> = self
            .results
            .iter()
            .rev()
            .filter(|r| seen.insert(&r.document))
            .cloned()
            .collect();
        results.reverse();
        results.sort_by_key(|r| FloatOrd(-key(r.score)));
        for (i, result) in results.iter_mut().enumerate() {
            result.rank = i + 1;
        }

        Run {
            query: self.query.clone(),
            system: self.system.clone(),
            results,
        }
    }
}

impl<'a> IntoIterator for &'a Run {
    type Item = &'a ScoredDocument;
    type IntoIter = slice::Iter<'a, ScoredDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
