const DOUBLE_QUOTE: char = '"';

/// Check that the sentence contains an even number of double quotes
///
/// Only the parity of the total count matters; pairing and nesting are not
/// inspected. Typographic quotes (`“`, `”`) are not counted.
#[inline]
pub fn has_balanced_quotes(sentence: &str) -> bool {
    sentence.chars().filter(|&ch| ch == DOUBLE_QUOTE).count() % 2 == 0
}
