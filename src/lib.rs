//! Chansonnier Catalog Core Library
//!
//! This library crate defines the core modules behind the songbook page: it turns
//! raw file records (titles with an embedded date/series encoding) into normalized
//! display records, and serves live search-as-you-type queries over them.
//! Presentation (DOM construction, menu rendering, show/hide toggling) consumes
//! the output of this crate as opaque data and lives outside it.
//!
//! ## Architecture Modules
//! The crate is composed of three loosely coupled subsystems:
//!
//! - **`catalog`**: The intake pipeline. Parses the build-time manifest, rejects
//!   records without a stable identifier, and produces the presentation-ordered
//!   catalog of cleaned records.
//! - **`normalize`**: The title-metadata normalizer. Scans leading title tokens
//!   for year/month markers and the series flag, splices them out of the title,
//!   and composes the final display name.
//! - **`search`**: The information retrieval logic. Contains the shared
//!   tokenizer, the token→document inverted index, and the substring AND-query
//!   engine.

pub mod catalog;
pub mod normalize;
pub mod search;
