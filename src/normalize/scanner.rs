use super::types::{CleanedFileRecord, RawFileRecord};
use crate::search::tokenizer::tokenize;

/// The literal token flagging membership in the named sub-series.
pub const SERIES_MARKER: &str = "evs";

/// Normalizes one raw record into its cleaned, display-ready form.
///
/// Total over its input: a title with no numeric prefix simply yields empty
/// `years`, no `month`, no `evs`, and a display name ending in `" ()"`.
/// The `slug` has already been validated by the catalog.
pub fn normalize_record(raw: &RawFileRecord, slug: &str) -> CleanedFileRecord {
    let keywords = tokenize(&raw.title);

    let mut years: Vec<String> = Vec::new();
    let mut month: Option<String> = None;
    let mut evs: Option<String> = None;

    // Phase 1 consumes the leading numeric run; the first non-numeric token
    // ends it and falls through to the series check without being skipped.
    // The series check is single-shot: only that one token is inspected,
    // never the rest of the title.
    let mut in_date_prefix = true;
    for token in keywords.iter() {
        if in_date_prefix {
            if let Ok(num) = token.parse::<u64>() {
                if num >= 1000 {
                    years.push(num.to_string());
                } else {
                    month = Some(token.clone());
                }
                continue;
            }
            in_date_prefix = false;
        }

        if token == SERIES_MARKER {
            evs = Some(token.clone());
        }
        break;
    }

    // Equal-length decimal strings, so lexicographic sort orders by value.
    years.sort();

    // Splice each marker out of the title once, first occurrence only. A
    // marker value recurring later in the title stays put.
    let mut title = raw.title.clone();
    for marker in years.iter().chain(month.iter()).chain(evs.iter()) {
        title = title.replacen(marker.as_str(), "", 1);
    }
    let title = title.trim().to_string();

    let name = compose_name(&title, &years, month.as_deref(), evs.as_deref());

    CleanedFileRecord {
        title,
        name,
        date: raw.date.clone(),
        path: raw.path.clone(),
        extname: raw.extname.clone(),
        slug: slug.to_string(),
        years,
        month,
        evs,
        keywords,
    }
}

/// Builds the display name. The parenthesized date suffix is always appended,
/// even when no markers were extracted ("<title> ()").
fn compose_name(title: &str, years: &[String], month: Option<&str>, evs: Option<&str>) -> String {
    let prefix = match evs {
        Some(marker) => format!("[{}] ", marker.to_uppercase()),
        None => String::new(),
    };
    let month_segment = match month {
        Some(m) => format!("{}-", m),
        None => String::new(),
    };

    format!("{}{} ({}{})", prefix, title, month_segment, years.join(", "))
}
