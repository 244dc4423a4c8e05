use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Splits text into normalized tokens: lower-cased, diacritics stripped,
/// word characters only, at least two characters long.
///
/// The same function serves document titles and search queries, so a string
/// always tokenizes identically regardless of which side it came from.
/// Token order follows the source text; duplicates are preserved.
pub fn tokenize(input: &str) -> Vec<String> {
    let re = Regex::new(r"[a-z0-9_]+").unwrap();
    let folded = deburr(input).to_lowercase();
    re.find_iter(&folded)
        .map(|m| m.as_str().to_string())
        .filter(|word| word.len() >= 2)
        .collect()
}

/// Removes diacritics via canonical decomposition: "Française" -> "Francaise".
///
/// Characters that do not decompose into a base letter plus combining marks
/// (e.g. Cyrillic) pass through unchanged and are later dropped by the
/// word-character scan.
fn deburr(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
