//! Normalization Data Types
//!
//! Defines the record shapes flowing through the pipeline: the raw manifest
//! record on the way in, the cleaned display record on the way out.

use serde::{Deserialize, Serialize};

/// A file record exactly as the build-time manifest supplies it.
///
/// `title` carries the date/series encoding to be extracted. `slug` is the
/// stable identifier the presentation layer keys its elements by; a record
/// without one cannot be displayed or indexed and is rejected during catalog
/// construction, before normalization runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFileRecord {
    pub title: String,
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub extname: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A fully normalized record, ready for presentation and indexing.
///
/// `keywords` are the tokens of the *original* title, before marker stripping,
/// order preserved and never deduplicated: they are the indexing unit.
/// `years` is always sorted ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedFileRecord {
    /// Original title with every extracted marker spliced out, trimmed.
    pub title: String,
    /// Final display string: `"[EVS] <title> (<month>-<years, comma-joined>)"`,
    /// bracket prefix and month segment only when present.
    pub name: String,
    pub date: Option<String>,
    pub path: Option<String>,
    pub extname: Option<String>,
    pub slug: String,
    /// Extracted year tokens (numeric value ≥ 1000), canonical decimal form,
    /// ascending order.
    pub years: Vec<String>,
    /// Extracted sub-1000 numeric token, original text preserved. When the
    /// date prefix holds several, the last one wins.
    pub month: Option<String>,
    /// The series marker, present iff the first token after the date prefix
    /// is exactly `"evs"`.
    pub evs: Option<String>,
    /// Ordered tokens of the original title, the indexing unit.
    pub keywords: Vec<String>,
}
