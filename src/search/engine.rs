use super::types::{Index, IndexEntry, SearchOutcome};
use crate::normalize::types::CleanedFileRecord;
use crate::search::tokenizer::tokenize;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Advisory delay for callers wiring search-as-you-type: coalesce keystrokes
/// for this long before invoking [`search`]. Not a correctness requirement.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Builds the inverted index from the full catalog.
///
/// For every record, every keyword token maps back to the record's slug.
/// Postings lists keep catalog-processing order, and a record contributes its
/// slug at most once per token even when the token repeats in its title.
/// The returned value is the only index there is; nothing mutates it later.
pub fn build_index(records: &[CleanedFileRecord]) -> Index {
    let mut postings: HashMap<String, Vec<String>> = HashMap::new();

    for record in records {
        let mut seen: HashSet<&str> = HashSet::new();
        for token in record.keywords.iter() {
            if !seen.insert(token.as_str()) {
                continue;
            }
            postings
                .entry(token.clone())
                .or_default()
                .push(record.slug.clone());
        }
    }

    let entries: Vec<IndexEntry> = postings
        .into_iter()
        .map(|(token, matches)| IndexEntry { token, matches })
        .collect();

    tracing::debug!(
        "Inverted index built: {} distinct tokens across {} records",
        entries.len(),
        records.len()
    );

    Index { entries }
}

/// Runs one query against the index.
///
/// The query is tokenized with the same tokenizer used for titles. A query
/// that yields no tokens (empty string, or only sub-2-char fragments) returns
/// [`SearchOutcome::Reset`]: no filter applies. Otherwise every query token
/// must match, where "match" means substring containment against index tokens
/// ("son" matches "chanson"), and the surviving slug sets are intersected.
pub fn search(query: &str, index: &Index) -> SearchOutcome {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return SearchOutcome::Reset;
    }

    let results = intersect_postings(&tokens, |t| {
        index
            .entries
            .iter()
            .filter(|entry| entry.token.contains(t))
            .flat_map(|entry| entry.matches.iter().cloned())
            .collect()
    });

    SearchOutcome::Matches(results)
}

/// Folds query tokens over a postings lookup, intersecting as it goes.
///
/// The first token seeds the accumulator; each later token's postings are
/// intersected into it. A token with no postings at all ends the query
/// immediately with an empty set: later tokens are never looked up.
/// Taking the lookup as a closure keeps that short-circuit observable.
pub fn intersect_postings(
    tokens: &[String],
    mut lookup: impl FnMut(&str) -> Vec<String>,
) -> HashSet<String> {
    let mut results: Option<HashSet<String>> = None;

    for token in tokens {
        let filtered = lookup(token);
        if filtered.is_empty() {
            return HashSet::new();
        }

        let filtered: HashSet<String> = filtered.into_iter().collect();
        results = Some(match results {
            None => filtered,
            Some(acc) => acc.intersection(&filtered).cloned().collect(),
        });
    }

    results.unwrap_or_default()
}

/// Translates a query outcome into per-document visibility.
///
/// [`SearchOutcome::Reset`] shows every record; [`SearchOutcome::Matches`]
/// shows exactly the matched slugs and hides the rest. The presentation layer
/// applies this plan to its own elements; the core never touches UI state.
pub fn display_plan(
    records: &[CleanedFileRecord],
    outcome: &SearchOutcome,
) -> HashMap<String, bool> {
    records
        .iter()
        .map(|record| {
            let visible = match outcome {
                SearchOutcome::Reset => true,
                SearchOutcome::Matches(slugs) => slugs.contains(&record.slug),
            };
            (record.slug.clone(), visible)
        })
        .collect()
}
