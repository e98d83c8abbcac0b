//! Single-match resolution over a list of records
//!
//! Resolves free-text user input to exactly one record by case-insensitive
//! prefix test against two candidate fields. There is no ranking: anything
//! other than exactly one hit is reported as an error, never broken by
//! silently taking the first.

use thiserror::Error;

/// Errors from resolving a fragment against the record list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("no matches found for '{0}'")]
    NoMatch(String),

    #[error("multiple matches found for '{query}':\n{}", .candidates.join("\n"))]
    Ambiguous {
        query: String,
        /// Stable one-line labels for each matching record
        candidates: Vec<String>,
    },
}

/// A record that can be resolved by fragment
pub trait Candidate {
    /// The two text fields a fragment is matched against
    fn fields(&self) -> [&str; 2];

    /// One-line summary used in ambiguity reports
    fn label(&self) -> String;
}

/// Find the unique record where either candidate field starts with `query`.
///
/// Matching is case-insensitive and prefix-only (not substring). Zero hits
/// yield [`MatchError::NoMatch`]; two or more yield [`MatchError::Ambiguous`]
/// listing every hit in input order.
pub fn find_single_match<'a, T: Candidate>(
    query: &str,
    records: &'a [T],
) -> Result<&'a T, MatchError> {
    let query = query.to_lowercase();

    let matches: Vec<&T> = records
        .iter()
        .filter(|r| {
            r.fields()
                .iter()
                .any(|f| f.to_lowercase().starts_with(&query))
        })
        .collect();

    match matches.as_slice() {
        [] => Err(MatchError::NoMatch(query)),
        [single] => Ok(*single),
        many => Err(MatchError::Ambiguous {
            query,
            candidates: many.iter().map(|r| r.label()).collect(),
        }),
    }
}
