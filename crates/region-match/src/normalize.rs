//! Region text normalization.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block stripped after decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Convert arbitrary user text into its canonical comparison form.
///
/// The result is lowercase, accent-free, contains only `a-z`, `0-9` and
/// single spaces, and has no leading or trailing whitespace. Two inputs are
/// considered equivalent when their canonical forms are byte-equal.
///
/// ```
/// use region_match::normalize;
///
/// assert_eq!(normalize("  Región   Metropolitana!"), "region metropolitana");
/// ```
pub fn normalize(raw: &str) -> String {
    let cleaned: String = raw
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
