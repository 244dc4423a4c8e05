//! Catalog Error Types
//!
//! The one fatal-input class the pipeline recognizes. Everything else about a
//! record degrades to empty or absent derived fields instead of failing.

use thiserror::Error;

/// Rejection reasons raised during catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A record arrived without a `slug`. Without the stable identifier it can
    /// be neither indexed nor correlated with a presentation element, so the
    /// whole manifest is rejected before normalization.
    #[error("record \"{title}\" is missing its slug identifier")]
    MissingIdentifier { title: String },
}
