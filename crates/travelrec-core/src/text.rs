// crates/travelrec-core/src/text.rs

/// Convert a string into a folded key suitable for matching.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding.
///
/// Case-insensitive and accent-insensitive: both strings are transliterated
/// to ASCII and lowercased before comparison.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_transliterates_and_lowercases() {
        assert_eq!(fold_key("Łódź"), "lodz");
        assert_eq!(fold_key("Straße"), "strasse");
        assert_eq!(fold_key("TEMPLE"), "temple");
    }

    #[test]
    fn equals_folded_ignores_case_and_accents() {
        assert!(equals_folded("São Paulo", "sao paulo"));
        assert!(equals_folded("MÜNCHEN", "munchen"));
        assert!(!equals_folded("Berlin", "Paris"));
    }
}
