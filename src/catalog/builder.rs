use super::types::CatalogError;
use crate::normalize::normalize_record;
use crate::normalize::types::{CleanedFileRecord, RawFileRecord};
use anyhow::{Context, Result};

/// Parses the build-time JSON manifest into raw file records.
///
/// The manifest is a JSON array of record objects; `title`, `name` are
/// required, the remaining fields optional. Slug validation happens later, in
/// [`build_catalog`], so a manifest parses even when records are incomplete.
pub fn load_manifest(json: &str) -> Result<Vec<RawFileRecord>> {
    let records: Vec<RawFileRecord> =
        serde_json::from_str(json).context("failed to parse file manifest")?;

    tracing::info!("Manifest loaded: {} raw records", records.len());
    Ok(records)
}

/// Builds the presentation-ordered catalog from raw records.
///
/// Every record must carry a `slug`; the first one without it rejects the
/// whole batch with [`CatalogError::MissingIdentifier`]. Surviving records are
/// normalized and sorted case-insensitively by display name.
pub fn build_catalog(raws: &[RawFileRecord]) -> Result<Vec<CleanedFileRecord>, CatalogError> {
    let mut catalog: Vec<CleanedFileRecord> = Vec::with_capacity(raws.len());

    for raw in raws {
        let slug = match raw.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug,
            _ => {
                tracing::error!("Rejecting record without slug: {:?}", raw.title);
                return Err(CatalogError::MissingIdentifier {
                    title: raw.title.clone(),
                });
            }
        };

        catalog.push(normalize_record(raw, slug));
    }

    catalog.sort_by_key(|record| record.name.to_lowercase());

    tracing::info!("Catalog built: {} records", catalog.len());
    Ok(catalog)
}
