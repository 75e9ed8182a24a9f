//! Text normalization shared by the dictionary builder and the solver
//!
//! A token's matching form is lowercase, free of combining diacritical marks,
//! and made of letters only. The individual steps are exposed separately so the
//! builder can apply them as distinct pipeline stages.

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

/// Map an arbitrary token to its canonical matching form
///
/// Rules, in order:
/// 1. Lowercase every letter (full Unicode mapping)
/// 2. Strip diacritics (NFD, drop nonspacing marks, NFC)
/// 3. Drop every character that is not alphabetic
///
/// Steps 2 and 3 share one filter between decomposition and recomposition,
/// so characters left adjacent by a dropped one are composed in the same
/// pass and the result is stable under repeated normalization. An empty
/// result is valid.
///
/// # Examples
/// ```
/// use letter_hoard::core::normalize;
///
/// assert_eq!(normalize("AÇÃO"), "acao");
/// assert_eq!(normalize("d'água"), "dagua");
/// assert_eq!(normalize("123"), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_nonspacing_mark(c) && c.is_alphabetic())
        .nfc()
        .collect()
}

/// Remove diacritics while keeping base letters
///
/// Decomposes canonically, drops nonspacing marks (Mn), then recomposes so
/// that characters without a decomposable accent keep their composed form.
/// Spacing marks such as Indic vowel signs (Mc) are part of the word and
/// survive.
#[must_use]
pub fn strip_diacritics(input: &str) -> String {
    input
        .nfd()
        .filter(|&c| !is_nonspacing_mark(c))
        .nfc()
        .collect()
}

#[inline]
fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}

/// Length of a normalized word in Unicode scalar values
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_accents() {
        assert_eq!(normalize("AÇÃO"), "acao");
        assert_eq!(normalize("ação"), "acao");
        assert_eq!(normalize("Ção"), "cao");
        assert_eq!(normalize("Café"), "cafe");
    }

    #[test]
    fn drops_non_letters() {
        assert_eq!(normalize("café-com-leite"), "cafecomleite");
        assert_eq!(normalize("gato2"), "gato");
        assert_eq!(normalize("  casa \t"), "casa");
        assert_eq!(normalize("d'água"), "dagua");
    }

    #[test]
    fn empty_output_is_allowed() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("42-!"), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in [
            "AÇÃO",
            "Größe",
            "naïve",
            "İstanbul",
            "œuvre",
            "x-y-z",
            "ÅNGSTRÖM",
            "\u{1100}1\u{1161}",
            "\u{1100}-\u{1161}\u{11a8}",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn jamo_split_by_non_letter_compose_in_one_pass() {
        assert_eq!(normalize("\u{1100}1\u{1161}"), "\u{ac00}");
        assert_eq!(normalize("\u{1100}1\u{1161}").chars().count(), 1);
    }

    #[test]
    fn spacing_marks_survive() {
        // DEVANAGARI LETTER KA + VOWEL SIGN AA (Mc)
        assert_eq!(strip_diacritics("\u{0915}\u{093e}"), "\u{0915}\u{093e}");
        assert_eq!(normalize("\u{0915}\u{093e}"), "\u{0915}\u{093e}");
        assert_ne!(normalize("\u{0915}\u{093e}"), normalize("\u{0915}"));
    }

    #[test]
    fn nonspacing_marks_are_dropped() {
        // DEVANAGARI VOWEL SIGN E (Mn) and a combining acute
        assert_eq!(strip_diacritics("\u{0915}\u{0947}"), "\u{0915}");
        assert_eq!(strip_diacritics("e\u{0301}"), "e");
    }

    #[test]
    fn strip_diacritics_keeps_other_characters() {
        assert_eq!(strip_diacritics("pão-de-ló"), "pao-de-lo");
        assert_eq!(strip_diacritics("gato2"), "gato2");
        assert_eq!(strip_diacritics("ç"), "c");
    }

    #[test]
    fn strip_diacritics_handles_precomposed_and_decomposed_input() {
        let precomposed = "\u{00e3}";
        let decomposed = "a\u{0303}";
        assert_eq!(strip_diacritics(precomposed), "a");
        assert_eq!(strip_diacritics(decomposed), "a");
    }

    #[test]
    fn char_len_counts_scalars_not_bytes() {
        assert_eq!(char_len("casa"), 4);
        assert_eq!(char_len("ação"), 4);
        assert_eq!(char_len(""), 0);
    }
}
