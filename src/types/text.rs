use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds text for loose comparisons.
///
/// The text is canonically decomposed, combining marks are dropped and the
/// remainder is lowercased, so `"Café"`, `"CAFE"` and `"cafe"` all fold to `"cafe"`.
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|character| !is_combining_mark(*character))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns the first control character in `text`, if any.
pub fn find_control_character(text: &str) -> Option<char> {
    text.chars().find(|character| character.is_control())
}
