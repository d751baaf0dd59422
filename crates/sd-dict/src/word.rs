//! Word pattern accepted by the dictionary.

use std::sync::LazyLock;

use regex::Regex;

/// One or more Unicode letters, whitespace characters or hyphens.
///
/// Line breaks are excluded from the whitespace class; the text formats are
/// line-based.
pub const WORD_PATTERN: &str = r"^[[\p{L}\s\-]&&[^\r\n]]+$";

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("word pattern is a valid regex"));

/// Whether `word` may be stored in the dictionary.
pub fn is_valid_word(word: &str) -> bool {
    WORD_REGEX.is_match(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_spaces_and_hyphens() {
        for word in ["cat", "ice cream", "well-known", "Ärger", "кот", "猫"] {
            assert!(is_valid_word(word), "{word}");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for word in ["", "123", "r2d2", "a;b", "don't", "cat!", "a_b"] {
            assert!(!is_valid_word(word), "{word}");
        }
    }

    #[test]
    fn spaces_allowed_line_breaks_rejected() {
        for word in [" ", "zebra ", " apple", "a\tb"] {
            assert!(is_valid_word(word), "{word:?}");
        }
        for word in ["a\nb", "zebra\r", "\n"] {
            assert!(!is_valid_word(word), "{word:?}");
        }
    }
}
