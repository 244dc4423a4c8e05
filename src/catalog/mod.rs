//! Catalog Intake Module
//!
//! Handles the acquisition and validation of file records and assembles the
//! catalog the rest of the system runs on.
//!
//! ## Workflow
//! 1. **Load**: Parses the build-time JSON manifest into raw file records.
//! 2. **Validate**: Rejects any record missing its `slug` identifier; nothing
//!    without a stable identity reaches the normalizer.
//! 3. **Normalize**: Runs each surviving record through the title normalizer.
//! 4. **Order**: Sorts the cleaned records case-insensitively by display name,
//!    which is the presentation order for the navigation menu.

pub mod builder;
pub mod types;


pub use builder::{build_catalog, load_manifest};
pub use types::CatalogError;
