//! Query classification and the linear matcher.
//!
//! A query is classified once, at parse time: integer literals become exact
//! pincode lookups, everything else becomes a case-insensitive substring
//! scan over office name, district, and state. The scan itself is
//! infallible — rows were typed at load, so there is no malformed cell left
//! to trip over — and always preserves dataset row order.

use crate::dataset::Dataset;
use crate::error::QueryError;
use crate::types::PostOffice;

/// A classified query. Owns the trimmed raw text (sessions and export
/// captions reuse it verbatim) plus its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    kind: QueryKind,
}

/// How a query matches records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// The raw text parsed as a base-10 integer: exact pincode equality.
    /// Held as `i64` so out-of-range and negative literals simply match
    /// nothing instead of failing classification.
    Pincode(i64),
    /// Anything else: lower-cased substring containment, office OR district
    /// OR state.
    Text(String),
}

impl Query {
    /// Classify raw user text.
    ///
    /// Leading/trailing whitespace is trimmed first; input that is empty
    /// after the trim is rejected here, before any matching, so the matcher
    /// never sees it. Integer parsing follows `i64::from_str`: optional
    /// sign, then digits — `"+110001"` is a pincode query, `"110 001"` is a
    /// text query.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(QueryError::Empty);
        }

        let kind = match raw.parse::<i64>() {
            Ok(pincode) => QueryKind::Pincode(pincode),
            Err(_) => QueryKind::Text(raw.to_lowercase()),
        };

        Ok(Self { raw: raw.to_string(), kind })
    }

    /// The trimmed text as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &QueryKind {
        &self.kind
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Dataset {
    /// Return every record matching `query`, in dataset row order.
    ///
    /// No ranking, no deduplication step: the text predicate is an OR across
    /// fields of a single row, so a row can match at most once by
    /// construction.
    pub fn search(&self, query: &Query) -> Vec<&PostOffice> {
        self.records()
            .iter()
            .filter(|record| matches(record, query.kind()))
            .collect()
    }
}

fn matches(record: &PostOffice, kind: &QueryKind) -> bool {
    match kind {
        QueryKind::Pincode(pincode) => i64::from(record.pincode) == *pincode,
        QueryKind::Text(needle) => {
            contains_ci(&record.office, needle)
                || contains_ci(&record.district, needle)
                || contains_ci(&record.state, needle)
        }
    }
}

/// Case-insensitive containment. The needle is already lower-cased by
/// [`Query::parse`]; only the haystack is folded here.
fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
