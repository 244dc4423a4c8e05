use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of the inverted index: a distinct keyword token and the slugs of
/// every document whose keyword list contains it, in catalog-processing order.
///
/// A single document contributes its slug at most once per token, even when
/// the token repeats inside its own title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEntry {
    pub token: String,
    pub matches: Vec<String>,
}

/// The token→document inverted index.
///
/// Built once from the full catalog by [`super::build_index`] and immutable
/// afterwards; queries only read it. Entry order carries no meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Index {
    pub entries: Vec<IndexEntry>,
}

impl Index {
    /// Number of distinct tokens in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of one query.
///
/// `Reset` means the query produced no usable tokens, so no filter applies and
/// every document stays displayable. That is a different situation from
/// `Matches` with an empty set, which means a filter applied and nothing
/// survived it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No filter; show everything.
    Reset,
    /// Filter applied; show exactly these slugs.
    Matches(HashSet<String>),
}

impl SearchOutcome {
    pub fn is_reset(&self) -> bool {
        matches!(self, SearchOutcome::Reset)
    }
}
