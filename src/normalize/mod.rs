//! Title Normalization Module
//!
//! Extracts the date/series encoding embedded in filename-derived titles and
//! produces the cleaned, display-ready record.
//!
//! ## Workflow
//! 1. **Tokenize**: Splits the title with the shared search tokenizer, so the
//!    keyword list used for indexing matches what queries will produce.
//! 2. **Scan**: Classifies the leading run of numeric tokens as years (≥ 1000)
//!    or a month-like value (< 1000), then performs a single-shot check of the
//!    first following token against the series marker.
//! 3. **Strip**: Splices each extracted marker out of the title text, first
//!    occurrence only.
//! 4. **Compose**: Builds the final display name from the surviving title and
//!    the extracted markers.

pub mod scanner;
pub mod types;

#[cfg(test)]
mod tests;

pub use scanner::normalize_record;
pub use types::{CleanedFileRecord, RawFileRecord};
