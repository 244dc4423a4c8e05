//! Search Service Module
//!
//! The core component responsible for answering live queries against the
//! in-memory inverted index.
//!
//! ## Overview
//! This module implements the Information Retrieval (IR) pipeline for the
//! songbook page. It bridges the presentation layer (a search box filtering a
//! navigation menu) with the catalog of cleaned records.
//!
//! ## Responsibilities
//! - **Tokenization**: Parsing raw query strings and document titles into
//!   normalized, searchable tokens. One tokenizer serves both sides, so a query
//!   and a title always tokenize identically.
//! - **Indexing**: Building the token→document postings map once from the full
//!   catalog; the index is immutable afterwards.
//! - **Querying**: Substring-matching each query token against index tokens and
//!   intersecting the resulting postings lists (AND semantics, boolean match,
//!   no scoring).
//!
//! ## Submodules
//! - **`engine`**: Index construction and the multi-token intersection query.
//! - **`tokenizer`**: Text normalization (case-folding, diacritic stripping,
//!   word splitting, length filtering).
//! - **`types`**: The index structures and the query outcome type.

pub mod engine;
pub mod tokenizer;
pub mod types;


pub use engine::{build_index, display_plan, search, DEBOUNCE_WINDOW};
pub use types::{Index, IndexEntry, SearchOutcome};
